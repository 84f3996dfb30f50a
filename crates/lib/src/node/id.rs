//! Persisted identifier type for tree nodes.
//!
//! The `NodeId` is the pair `(a, c)` taken from a node's matrix. It is all a storage
//! layer needs to keep: the rest of the matrix is recovered on decode.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::NodeError;
use crate::constants::ID_SEPARATOR;

/// The coprime integer pair identifying a node.
///
/// A `NodeId` on its own is not validated; decode it with
/// [`TreeNode::from_id`](super::TreeNode::from_id) to obtain a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    x: i64,
    y: i64,
}

impl NodeId {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The first component (the matrix entry `a`).
    pub fn x(&self) -> i64 {
        self.x
    }

    /// The second component (the matrix entry `c`).
    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn as_pair(&self) -> (i64, i64) {
        (self.x, self.y)
    }
}

impl From<(i64, i64)> for NodeId {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<NodeId> for (i64, i64) {
    fn from(id: NodeId) -> Self {
        id.as_pair()
    }
}

impl PartialEq<(i64, i64)> for NodeId {
    fn eq(&self, other: &(i64, i64)) -> bool {
        self.as_pair() == *other
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.x, ID_SEPARATOR, self.y)
    }
}

impl FromStr for NodeId {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NodeError::InvalidId {
            input: s.to_string(),
        };
        let (x, y) = s.split_once(ID_SEPARATOR).ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_| invalid())?;
        let y = y.trim().parse().map_err(|_| invalid())?;
        Ok(Self { x, y })
    }
}

// Stored as a bare two-integer tuple
impl Serialize for NodeId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_pair().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let pair = <(i64, i64)>::deserialize(deserializer)?;
        Ok(NodeId::from(pair))
    }
}
