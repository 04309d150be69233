#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Checking hand-computed answers against a computed matrix.
pub mod compare;

/// Determinant, minors, cofactors and the adjugate inverse.
pub mod determinant;

/// Error types for matrix and vector operations.
pub mod error;

/// Text rendering of matrices as exact fractions or decimals.
pub mod format;

/// The rectangular matrix container.
pub mod matrix;

/// Element-wise arithmetic, transpose and matrix product.
pub mod ops;

/// In-memory save slots for reusing matrices across operations.
pub mod slots;

/// Linear system solvers: Cramer's rule and solving by inverse.
pub mod solve;

/// Structural transformations such as homogeneous augmentation.
pub mod transforms;

/// Vector algebra over single-column matrices.
pub mod vector;

pub use error::LinalgError;
pub use matrix::Matrix;
