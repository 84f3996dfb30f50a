//!
//! matpath: tree positions encoded as pairs of coprime integers.
//! This library turns a path in an arbitrarily deep, arbitrarily wide tree into a single
//! integer id from which ancestry, parent/child links, and the full path can be recovered.
//!
//! ## Core Concepts
//!
//! * **Nodes (`node::TreeNode`)**: Immutable tree positions backed by a 2×2 unimodular matrix.
//! * **Ids (`node::NodeId`)**: The pair `(a, c)` of matrix entries, the only thing a storage layer persists.
//! * **Intervals (`node::Interval`)**: The exact rational span a node's subtree occupies;
//!   descendants nest strictly inside their ancestors, siblings never overlap.
//! * **Matrix algebra (`matrix::Matrix`)**: Checked 2×2 integer arithmetic used to build and cut paths.
//! * **Extended Euclid (`euclid::extended_gcd`)**: Recovers the unpersisted matrix entries from an id.

pub mod constants;
pub mod euclid;
pub mod matrix;
pub mod node;

/// Re-export the core node types for easier access.
pub use matrix::{Matrix, MatrixError};
pub use node::{Interval, NodeError, NodeId, TreeNode};

/// Result type used throughout the matpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the matpath library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured node errors from the node module
    #[error(transparent)]
    Node(node::NodeError),

    /// Structured arithmetic errors from the matrix module
    #[error(transparent)]
    Matrix(matrix::MatrixError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Node(_) => "node",
            Error::Matrix(_) => "matrix",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error is a rejected path.
    pub fn is_invalid_path(&self) -> bool {
        match self {
            Error::Node(node_err) => node_err.is_invalid_path(),
            _ => false,
        }
    }

    /// Check if this error is a non-coprime id.
    pub fn is_not_coprime(&self) -> bool {
        match self {
            Error::Node(node_err) => node_err.is_not_coprime(),
            _ => false,
        }
    }

    /// Check if this error is a structural bound violation.
    pub fn is_invalid_bounds(&self) -> bool {
        match self {
            Error::Node(node_err) => node_err.is_invalid_bounds(),
            _ => false,
        }
    }

    /// Check if this error is an integer overflow.
    pub fn is_overflow(&self) -> bool {
        match self {
            Error::Node(node_err) => node_err.is_overflow(),
            Error::Matrix(matrix_err) => matrix_err.is_overflow(),
            _ => false,
        }
    }

    /// Check if this error is validation-related.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Node(node_err) => node_err.is_validation_error(),
            Error::Matrix(matrix_err) => matrix_err.is_not_unimodular(),
            _ => false,
        }
    }

    /// Check if this error is a serialization failure.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
