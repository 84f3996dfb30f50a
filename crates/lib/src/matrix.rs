//! Fixed-size integer matrix algebra.
//!
//! Every tree position is a product of 2×2 unimodular matrices. This module provides
//! the small matrix type those products are built from, with all arithmetic checked:
//! intermediate values are computed exactly at double width and narrowed back, so an
//! entry that no longer fits in an `i64` is reported instead of wrapping.

use std::fmt;

use thiserror::Error;

/// Errors raised by matrix arithmetic.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A matrix entry left the `i64` range.
    #[error("Integer overflow during matrix {operation}")]
    Overflow {
        /// The arithmetic operation that overflowed
        operation: &'static str,
    },

    /// An exact integer inverse requires a determinant of ±1.
    #[error("Matrix is not unimodular: determinant is {determinant}")]
    NotUnimodular {
        /// The determinant that was found
        determinant: i128,
    },
}

impl MatrixError {
    /// Check if this error is an arithmetic overflow.
    pub fn is_overflow(&self) -> bool {
        matches!(self, MatrixError::Overflow { .. })
    }

    /// Check if this error is a failed inverse.
    pub fn is_not_unimodular(&self) -> bool {
        matches!(self, MatrixError::NotUnimodular { .. })
    }
}

impl From<MatrixError> for crate::Error {
    fn from(err: MatrixError) -> Self {
        crate::Error::Matrix(err)
    }
}

/// A 2×2 integer matrix `[[a, b], [c, d]]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i64,
}

impl Matrix {
    /// The identity matrix, used as the "virtual root" every path is folded onto.
    pub const IDENTITY: Matrix = Matrix::new(1, 0, 0, 1);

    pub const fn new(a: i64, b: i64, c: i64, d: i64) -> Self {
        Self { a, b, c, d }
    }

    /// The atomic step matrix `[[n + 1, -1], [1, 0]]` for sibling index `n`.
    pub fn step(n: i64) -> Result<Self, MatrixError> {
        let a = n
            .checked_add(1)
            .ok_or(MatrixError::Overflow { operation: "step" })?;
        Ok(Self::new(a, -1, 1, 0))
    }

    /// Exact determinant `a·d − b·c`.
    ///
    /// Computed at double width, so it never overflows.
    pub fn determinant(&self) -> i128 {
        i128::from(self.a) * i128::from(self.d) - i128::from(self.b) * i128::from(self.c)
    }

    /// Returns `self · rhs`, failing if any entry leaves the `i64` range.
    pub fn checked_mul(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        Ok(Matrix {
            a: dot("multiply", self.a, rhs.a, self.b, rhs.c)?,
            b: dot("multiply", self.a, rhs.b, self.b, rhs.d)?,
            c: dot("multiply", self.c, rhs.a, self.d, rhs.c)?,
            d: dot("multiply", self.c, rhs.b, self.d, rhs.d)?,
        })
    }

    /// Exact integer inverse: the adjugate divided by the determinant.
    ///
    /// Only matrices with determinant ±1 have an integer inverse; since `1/det == det`
    /// in that case, the adjugate is multiplied rather than divided.
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        let determinant = self.determinant();
        let sign = match determinant {
            1 => 1,
            -1 => -1,
            _ => return Err(MatrixError::NotUnimodular { determinant }),
        };
        Ok(Matrix {
            a: scale(self.d, sign)?,
            b: scale(self.b, -sign)?,
            c: scale(self.c, -sign)?,
            d: scale(self.a, sign)?,
        })
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix::IDENTITY
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[[{}, {}], [{}, {}]]", self.a, self.b, self.c, self.d)
    }
}

/// `x1·y1 + x2·y2`, narrowed back to `i64`.
fn dot(operation: &'static str, x1: i64, y1: i64, x2: i64, y2: i64) -> Result<i64, MatrixError> {
    let wide = i128::from(x1) * i128::from(y1) + i128::from(x2) * i128::from(y2);
    i64::try_from(wide).map_err(|_| MatrixError::Overflow { operation })
}

fn scale(value: i64, sign: i64) -> Result<i64, MatrixError> {
    value
        .checked_mul(sign)
        .ok_or(MatrixError::Overflow { operation: "inverse" })
}
