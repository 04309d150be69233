use ratla_rational::RationalError;
use thiserror::Error;

/// An error type for matrix and vector operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// The operation requires a square matrix.
    #[error("Must be a square matrix, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows of the offending matrix.
        rows: usize,
        /// Number of columns of the offending matrix.
        cols: usize,
    },

    /// Two operands have incompatible shapes.
    #[error("Dimension mismatch: {left:?} and {right:?}")]
    DimensionMismatch {
        /// Shape of the left operand as (rows, cols).
        left: (usize, usize),
        /// Shape (or required shape) of the right operand as (rows, cols).
        right: (usize, usize),
    },

    /// The matrix has a zero determinant.
    #[error("Determinant is 0, the matrix is singular")]
    SingularMatrix,

    /// An argument is outside the domain of the operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Rational arithmetic failed.
    #[error(transparent)]
    Rational(#[from] RationalError),
}
