//!
//! Defines `TreeNode`, a position in an unbounded tree encoded as a unimodular matrix.
//!
//! A node at path `[n₁, n₂, …, nₖ]` is the product `S(n₁)·S(n₂)·…·S(nₖ)` of atomic step
//! matrices `S(n) = [[n + 1, -1], [1, 0]]`. The resulting matrix `[[a, b], [c, d]]` always
//! satisfies:
//!
//! - `a·d − b·c = 1`
//! - `1 ≤ c < a` and `1 ≤ −b < a`
//! - `gcd(a, c) = 1` and `gcd(b, d) = 1`
//!
//! The pair `(a, c)` is the node's [`NodeId`]; the remaining entries are recoverable
//! from it, so storage only needs to persist two integers. Parent, root, ancestry, and
//! the full path are all computed from the matrix without visiting any other node.

pub mod errors;
pub mod id;
pub mod interval;
pub mod lineage;

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

pub use errors::NodeError;
pub use id::NodeId;
pub use interval::Interval;
pub use lineage::{Ancestors, Lineage};
use num_integer::Integer;
use num_rational::Ratio;
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    constants::PATH_SEPARATOR,
    euclid::extended_gcd,
    matrix::{Matrix, MatrixError},
};

/// An immutable position in the tree.
///
/// Nodes are created from a path of 1-based sibling indices or decoded from a
/// persisted [`NodeId`]. Two nodes are equal when their ids are equal.
///
/// # Example
///
/// ```
/// use matpath::TreeNode;
///
/// let food = TreeNode::from_path(&[1]).unwrap();
/// let steak = TreeNode::from_path(&[1, 1, 2, 1]).unwrap();
///
/// assert!(food.is_ancestor_of(&steak));
/// assert_eq!(steak.parent().unwrap().path(), vec![1, 1, 2]);
///
/// // Only the id needs to be stored
/// let (x, y) = steak.id().as_pair();
/// let loaded = TreeNode::from_id(x, y).unwrap();
/// assert_eq!(loaded.path(), vec![1, 1, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TreeNode {
    matrix: Matrix,
}

impl TreeNode {
    /// Creates the node at `indices`, ordered from the root down.
    ///
    /// # Errors
    /// * `InvalidPath` if the path is empty or any index is below 1
    /// * `Arithmetic` if the matrix entries overflow `i64`
    pub fn from_path(indices: &[i64]) -> Result<Self> {
        let matrix = fold_path(indices)?;
        Ok(Self::validated(matrix)?)
    }

    /// Decodes a node from its persisted id `(x, y)`.
    ///
    /// The missing matrix entries come from the Bézout coefficients of `x` and `y`,
    /// normalized so that `−b` falls in `[1, x)`.
    ///
    /// # Errors
    /// * `NotCoprime` if `gcd(x, y) ≠ 1`
    /// * `InvalidBounds` unless `x ≥ 2` and `1 ≤ y < x`
    pub fn from_id(x: i64, y: i64) -> Result<Self> {
        Ok(decode(x, y)?)
    }

    /// Returns the persisted id `(a, c)`.
    pub fn id(&self) -> NodeId {
        NodeId::new(self.matrix.a, self.matrix.c)
    }

    /// Returns the underlying matrix.
    pub fn matrix(&self) -> Matrix {
        self.matrix
    }

    /// Returns true if this node sits at the top level.
    pub fn is_root(&self) -> bool {
        self.matrix.d == 0
    }

    /// This node's own 1-based sibling index, the last component of its path.
    pub fn position(&self) -> i64 {
        let Matrix { a, b, .. } = self.matrix;
        -1 - Integer::div_floor(&a, &b)
    }

    /// Returns the parent node, or `None` for a top-level node.
    ///
    /// One Euclidean reduction step applied directly to the matrix.
    pub fn parent(&self) -> Option<TreeNode> {
        if self.is_root() {
            return None;
        }
        let Matrix { a, b, c, d } = self.matrix;
        Some(Self::derived(Matrix::new(
            -b,
            a.mod_floor(&b),
            -d,
            c.mod_floor(&d),
        )))
    }

    /// Returns the top-level ancestor (itself for a top-level node).
    pub fn root(&self) -> TreeNode {
        if self.is_root() {
            return *self;
        }
        let Matrix { a, c, .. } = self.matrix;
        // Equivalent to `step(-1 - a.div_floor(-c))`, which cannot overflow
        Self::derived(Matrix::new(-Integer::div_floor(&a, &-c), -1, 1, 0))
    }

    /// Number of components in this node's path.
    pub fn depth(&self) -> usize {
        self.ancestors().count() + 1
    }

    /// Reconstructs the full path from the root down to this node.
    pub fn path(&self) -> Vec<i64> {
        self.lineage().map(|node| node.position()).collect()
    }

    /// Walks from the root down to this node, inclusive at both ends.
    pub fn lineage(&self) -> Lineage {
        Lineage::new(*self)
    }

    /// Walks upward from the parent to the root, excluding this node.
    pub fn ancestors(&self) -> Ancestors {
        Ancestors::new(self)
    }

    /// Returns true if `parent` is this node's direct parent.
    pub fn is_child_of(&self, parent: &TreeNode) -> bool {
        self.matrix.b == -parent.matrix.a && self.matrix.d == -parent.matrix.c
    }

    /// Returns true if `child` is a direct child of this node.
    pub fn is_parent_of(&self, child: &TreeNode) -> bool {
        child.is_child_of(self)
    }

    /// The half-open interval `[(a + b)/(c + d), a/c)` occupied by this node's subtree.
    pub fn interval(&self) -> Interval {
        let Matrix { a, b, c, d } = self.matrix;
        // Node bounds keep both sums positive and below a and c respectively
        Interval::new(Ratio::new(a + b, c + d), Ratio::new(a, c))
    }

    /// Returns true if this node lies strictly below `other`.
    pub fn is_descendant_of(&self, other: &TreeNode) -> bool {
        other.interval().strictly_encloses(&self.interval())
    }

    /// Returns true if `other` lies strictly below this node.
    pub fn is_ancestor_of(&self, other: &TreeNode) -> bool {
        other.is_descendant_of(self)
    }

    /// Expresses this node relative to `ancestor`: the node whose path is the part of
    /// this node's path below `ancestor`.
    ///
    /// Returns `None` unless `ancestor` is a proper ancestor of this node.
    pub fn cutting_from(&self, ancestor: &TreeNode) -> Option<TreeNode> {
        let matrix = ancestor
            .matrix
            .inverse()
            .and_then(|inverse| inverse.checked_mul(&self.matrix))
            .ok()?;
        validate(&matrix).ok()?;
        Some(TreeNode { matrix })
    }

    /// Re-roots this node beneath `base`: the node whose path is `base`'s path followed
    /// by this node's path.
    pub fn grafted_onto(&self, base: &TreeNode) -> Result<TreeNode> {
        let matrix = base
            .matrix
            .checked_mul(&self.matrix)
            .map_err(NodeError::from)?;
        Ok(Self::validated(matrix)?)
    }

    /// Returns the child at 1-based sibling index `n`.
    pub fn child(&self, n: i64) -> Result<TreeNode> {
        TreeNode::from_path(&[n])?.grafted_onto(self)
    }

    /// Returns the node immediately after this one among its siblings.
    pub fn next_sibling(&self) -> Result<TreeNode> {
        let n = self
            .position()
            .checked_add(1)
            .ok_or(NodeError::from(MatrixError::Overflow {
                operation: "step",
            }))?;
        match self.parent() {
            Some(parent) => parent.child(n),
            None => TreeNode::from_path(&[n]),
        }
    }

    fn validated(matrix: Matrix) -> std::result::Result<Self, NodeError> {
        validate(&matrix)?;
        Ok(Self { matrix })
    }

    /// Wraps a matrix computed from an already valid node.
    fn derived(matrix: Matrix) -> Self {
        let check = validate(&matrix);
        if let Err(err) = &check {
            tracing::error!(%matrix, error = %err, "Derived matrix violates node invariants");
        }
        debug_assert!(check.is_ok(), "derived matrix {matrix} is not a valid node");
        Self { matrix }
    }
}

/// Folds the atomic step matrices of `indices` onto the identity.
fn fold_path(indices: &[i64]) -> std::result::Result<Matrix, NodeError> {
    if indices.is_empty() {
        tracing::debug!("Rejected empty path");
        return Err(NodeError::InvalidPath {
            reason: "path is empty".to_string(),
        });
    }
    indices
        .iter()
        .enumerate()
        .try_fold(Matrix::IDENTITY, |acc, (depth, &n)| {
            if n < 1 {
                tracing::debug!(depth, index = n, "Rejected non-positive path index");
                return Err(NodeError::InvalidPath {
                    reason: format!("index {n} at depth {depth} is not positive"),
                });
            }
            Ok(acc.checked_mul(&Matrix::step(n)?)?)
        })
}

fn decode(x: i64, y: i64) -> std::result::Result<TreeNode, NodeError> {
    let bezout = extended_gcd(x, y);
    if !bezout.is_coprime() {
        tracing::debug!(x, y, gcd = %bezout.gcd, "Rejected id with non-coprime components");
        return Err(NodeError::NotCoprime {
            x,
            y,
            gcd: bezout.gcd.abs(),
        });
    }
    if x < 2 || !(1..x).contains(&y) {
        tracing::debug!(x, y, "Rejected id outside node bounds");
        return Err(NodeError::InvalidBounds {
            id: NodeId::new(x, y),
            reason: "expected x >= 2 and 1 <= y < x",
        });
    }

    // s·x + t·y = 1 still holds after shifting t into [0, x)
    let (wide_x, wide_y) = (i128::from(x), i128::from(y));
    let k = Integer::div_floor(&bezout.t, &wide_x);
    let t = narrow(bezout.t - k * wide_x)?;
    let s = narrow(bezout.s + k * wide_y)?;

    TreeNode::validated(Matrix::new(x, -t, y, s))
}

fn narrow(value: i128) -> std::result::Result<i64, MatrixError> {
    i64::try_from(value).map_err(|_| MatrixError::Overflow {
        operation: "decode",
    })
}

/// Checks the node invariants on a candidate matrix.
fn validate(matrix: &Matrix) -> std::result::Result<(), NodeError> {
    let Matrix { a, b, c, d } = *matrix;
    let reason = if matrix.determinant() != 1 {
        "determinant must be 1"
    } else if !(1..a).contains(&c) {
        "expected 1 <= c < a"
    } else if !(-a + 1..0).contains(&b) {
        "expected 1 <= -b < a"
    } else if a.gcd(&c) != 1 {
        "a and c must be coprime"
    } else if b.gcd(&d) != 1 {
        "b and d must be coprime"
    } else {
        return Ok(());
    };
    Err(NodeError::InvalidBounds {
        id: NodeId::new(a, c),
        reason,
    })
}

impl PartialEq for TreeNode {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for TreeNode {}

impl Hash for TreeNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl From<TreeNode> for NodeId {
    fn from(node: TreeNode) -> Self {
        node.id()
    }
}

impl From<&TreeNode> for NodeId {
    fn from(node: &TreeNode) -> Self {
        node.id()
    }
}

impl TryFrom<NodeId> for TreeNode {
    type Error = crate::Error;

    fn try_from(id: NodeId) -> Result<Self> {
        TreeNode::from_id(id.x(), id.y())
    }
}

/// Formats the dotted path form, e.g. `1.1.2.1`.
impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.lineage().enumerate() {
            if i > 0 {
                write!(f, "{PATH_SEPARATOR}")?;
            }
            write!(f, "{}", node.position())?;
        }
        Ok(())
    }
}

impl FromStr for TreeNode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        let indices = s
            .split(PATH_SEPARATOR)
            .map(|part| {
                part.trim().parse::<i64>().map_err(|_| NodeError::InvalidPath {
                    reason: format!("'{part}' is not an integer index"),
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        TreeNode::from_path(&indices)
    }
}

impl Serialize for TreeNode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.id().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TreeNode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = NodeId::deserialize(deserializer)?;
        TreeNode::try_from(id).map_err(serde::de::Error::custom)
    }
}
