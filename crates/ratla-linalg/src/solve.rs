use ratla_rational::RationalValue;

use crate::{
    determinant::{determinant, inverse},
    error::LinalgError,
    matrix::Matrix,
    ops::multiply,
};

/// Check that `constants` is an n x 1 column matching the n x n `coefficients`.
fn check_system(coefficients: &Matrix, constants: &Matrix) -> Result<usize, LinalgError> {
    let n = coefficients.ensure_square()?;
    if constants.shape() != (n, 1) {
        return Err(LinalgError::DimensionMismatch {
            left: coefficients.shape(),
            right: constants.shape(),
        });
    }
    Ok(n)
}

/// Solve `A x = b` with Cramer's rule.
///
/// Each unknown is `det(A_i) / det(A)`, where `A_i` is `A` with its i-th
/// column replaced by `b`.
///
/// # Arguments
///
/// * `coefficients` - The n x n matrix `A`.
/// * `constants` - The n x 1 column `b`.
///
/// # Returns
///
/// The n x 1 solution column `x`.
///
/// # Errors
///
/// - [`LinalgError::NotSquare`] if `A` is not square.
/// - [`LinalgError::DimensionMismatch`] if `b` is not an n x 1 column.
/// - [`LinalgError::SingularMatrix`] if `det(A)` is zero.
///
/// # Example
///
/// ```
/// use ratla_linalg::{solve::cramer, Matrix};
///
/// let a = Matrix::from_integers(&[[4, 3], [6, 3]]).unwrap();
/// let b = Matrix::from_integers(&[[17], [21]]).unwrap();
/// let x = cramer(&a, &b).unwrap();
/// assert_eq!(x, Matrix::from_integers(&[[2], [3]]).unwrap());
/// ```
pub fn cramer(coefficients: &Matrix, constants: &Matrix) -> Result<Matrix, LinalgError> {
    let n = check_system(coefficients, constants)?;

    let det = determinant(coefficients)?;
    if det.is_zero() {
        return Err(LinalgError::SingularMatrix);
    }
    let inv_det = det.reciprocal()?;

    let mut solution = Vec::with_capacity(n);
    for col in 0..n {
        let replaced = coefficients
            .rows()
            .iter()
            .zip(constants.rows())
            .map(|(row, b)| {
                let mut row = row.clone();
                row[col] = b[0].clone();
                row
            })
            .collect();
        let det_i = determinant(&Matrix::from_rows_unchecked(replaced))?;
        let value: RationalValue = det_i.checked_mul(&inv_det)?;
        log::debug!("cramer: x{} = {det_i} / {det} = {value}", col + 1);
        solution.push(vec![value]);
    }

    Ok(Matrix::from_rows_unchecked(solution))
}

/// Solve `A x = b` as `x = inverse(A) * b`.
///
/// # Errors
///
/// Same as [`cramer`].
pub fn solve_by_inverse(coefficients: &Matrix, constants: &Matrix) -> Result<Matrix, LinalgError> {
    check_system(coefficients, constants)?;
    let inv = inverse(coefficients)?;
    log::debug!("solve_by_inverse: inverted {:?} system", coefficients.shape());
    multiply(&inv, constants)
}
