//! Node-specific error types.
//!
//! Construction is the only fallible step for a node: every invalid path, id, or
//! matrix is rejected eagerly, so no partially valid node is ever observable.

use thiserror::Error;

use super::NodeId;
use crate::matrix::MatrixError;

/// Errors that can occur while constructing or navigating tree nodes.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Field additions/changes require a major version bump
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    /// A path was empty, held a non-positive index, or could not be parsed
    #[error("Invalid path: {reason}")]
    InvalidPath {
        /// Why the path was rejected
        reason: String,
    },

    /// The two id components share a common factor
    #[error("Id components {x} and {y} are not coprime (gcd {gcd})")]
    NotCoprime {
        /// First id component
        x: i64,
        /// Second id component
        y: i64,
        /// Their greatest common divisor
        gcd: i128,
    },

    /// An id or matrix violates the structural bounds of a node
    #[error("Id {id} is not a valid node: {reason}")]
    InvalidBounds {
        /// The `(a, c)` pair of the offending matrix
        id: NodeId,
        /// Which bound was violated
        reason: &'static str,
    },

    /// Textual id could not be parsed
    #[error("Invalid id: {input}")]
    InvalidId {
        /// The rejected input
        input: String,
    },

    /// Node arithmetic left the supported integer range
    #[error(transparent)]
    Arithmetic(#[from] MatrixError),
}

impl NodeError {
    /// Check if this error is a rejected path.
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, NodeError::InvalidPath { .. })
    }

    /// Check if this error is a non-coprime id.
    pub fn is_not_coprime(&self) -> bool {
        matches!(self, NodeError::NotCoprime { .. })
    }

    /// Check if this error is a structural bound violation.
    pub fn is_invalid_bounds(&self) -> bool {
        matches!(self, NodeError::InvalidBounds { .. })
    }

    /// Check if this error is an integer overflow.
    pub fn is_overflow(&self) -> bool {
        matches!(self, NodeError::Arithmetic(err) if err.is_overflow())
    }

    /// Check if this error was caused by invalid caller input.
    pub fn is_validation_error(&self) -> bool {
        match self {
            NodeError::InvalidPath { .. }
            | NodeError::NotCoprime { .. }
            | NodeError::InvalidBounds { .. }
            | NodeError::InvalidId { .. } => true,
            NodeError::Arithmetic(err) => err.is_not_unimodular(),
        }
    }
}

// Conversion from NodeError to the main Error type
impl From<NodeError> for crate::Error {
    fn from(err: NodeError) -> Self {
        crate::Error::Node(err)
    }
}
