//! Error types for dense-linalg

use std::fmt::Debug;

use thiserror::Error;

/// Result type alias using the crate's [`LinalgError`]
pub type Result<T> = std::result::Result<T, LinalgError>;

/// Errors raised by container arithmetic and the reduction engines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Shapes or lengths are incompatible for the requested operation
    #[error("Dimension mismatch in '{op}': expected {expected}, got {got}")]
    DimensionMismatch {
        /// The operation name
        op: &'static str,
        /// Expected shape or length
        expected: String,
        /// Actual shape or length
        got: String,
    },

    /// No usable pivot was found while inverting a matrix
    #[error("Matrix is not invertible: no non-zero pivot in column {column}")]
    NotInvertible {
        /// Column whose pivot candidates were all zero
        column: usize,
    },

    /// Element access outside the container
    #[error("Index {index:?} out of bounds for shape {shape:?}")]
    IndexOutOfBounds {
        /// The invalid index
        index: Vec<usize>,
        /// Shape of the container
        shape: Vec<usize>,
    },

    /// A reduction was requested on a matrix without rows
    #[error("Operation '{op}' is undefined for an empty matrix")]
    EmptyMatrix {
        /// The operation name
        op: &'static str,
    },

    /// An operation received no operands at all
    #[error("Operation '{op}' requires at least one operand")]
    EmptyInput {
        /// The operation name
        op: &'static str,
    },

    /// Operands are of different kinds (scalar, vector, matrix)
    #[error("Operation '{op}' requires operands of the same kind")]
    TypeMismatch {
        /// The operation name
        op: &'static str,
    },

    /// A zero-length vector was used where a direction is required
    #[error("Operation '{op}' is undefined for a zero vector")]
    ZeroVector {
        /// The operation name
        op: &'static str,
    },

    /// Reduction settings failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl LinalgError {
    pub(crate) fn dimension_mismatch(
        op: &'static str,
        expected: impl Debug,
        got: impl Debug,
    ) -> Self {
        LinalgError::DimensionMismatch {
            op,
            expected: format!("{:?}", expected),
            got: format!("{:?}", got),
        }
    }
}
