use ratla_rational::{Decimal, RationalValue};

use crate::{
    error::LinalgError,
    matrix::Matrix,
    ops::{scalar_multiply, transpose},
};

/// The alternating cofactor sign `(-1)^(row + col)`.
fn cofactor_sign(row: usize, col: usize) -> Decimal {
    if (row + col) % 2 == 0 {
        Decimal::ONE
    } else {
        Decimal::NEGATIVE_ONE
    }
}

/// Compute the determinant by Laplace expansion along the first row.
///
/// The recursion depth equals the matrix size.
///
/// # Errors
///
/// Returns [`LinalgError::NotSquare`] if the matrix is not square.
///
/// # Example
///
/// ```
/// use ratla_linalg::{determinant::determinant, Matrix};
///
/// let m = Matrix::from_integers(&[[4, 3], [6, 3]]).unwrap();
/// assert!(determinant(&m).unwrap() == -6i64);
/// ```
pub fn determinant(matrix: &Matrix) -> Result<RationalValue, LinalgError> {
    let n = matrix.ensure_square()?;
    if n == 1 {
        return Ok(matrix[(0, 0)].clone());
    }

    let mut det = RationalValue::zero();
    for (col, entry) in matrix.rows()[0].iter().enumerate() {
        // zero entries contribute nothing, skip the sub-determinant
        if entry.is_zero() {
            continue;
        }
        let sub = minor(matrix, 0, col)?;
        let term = entry
            .scale(cofactor_sign(0, col))?
            .checked_mul(&determinant(&sub)?)?;
        det = det.checked_add(&term)?;
    }

    Ok(det)
}

/// The sub-matrix obtained by deleting `row` and `col`.
///
/// # Errors
///
/// - [`LinalgError::NotSquare`] if the matrix is not square.
/// - [`LinalgError::InvalidArgument`] if the matrix is 1x1, which has no
///   minor, or if `row`/`col` is out of bounds.
pub fn minor(matrix: &Matrix, row: usize, col: usize) -> Result<Matrix, LinalgError> {
    let n = matrix.ensure_square()?;
    if n == 1 {
        return Err(LinalgError::InvalidArgument(
            "a 1x1 matrix has no minor".to_string(),
        ));
    }
    if row >= n || col >= n {
        return Err(LinalgError::InvalidArgument(format!(
            "minor ({row}, {col}) is out of bounds for a {n}x{n} matrix"
        )));
    }

    let rows = matrix
        .rows()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != row)
        .map(|(_, r)| {
            r.iter()
                .enumerate()
                .filter(|(j, _)| *j != col)
                .map(|(_, v)| v.clone())
                .collect()
        })
        .collect();

    Ok(Matrix::from_rows_unchecked(rows))
}

/// The matrix of cofactors, `C[i][j] = (-1)^(i+j) * det(minor(i, j))`.
///
/// The cofactor matrix of a 1x1 matrix is `[[1]]`, the determinant of the
/// empty minor.
///
/// # Errors
///
/// Returns [`LinalgError::NotSquare`] if the matrix is not square.
pub fn cofactor_matrix(matrix: &Matrix) -> Result<Matrix, LinalgError> {
    let n = matrix.ensure_square()?;
    if n == 1 {
        return Matrix::identity(1);
    }

    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let mut row = Vec::with_capacity(n);
        for j in 0..n {
            let det = determinant(&minor(matrix, i, j)?)?;
            row.push(det.scale(cofactor_sign(i, j))?);
        }
        rows.push(row);
    }

    Ok(Matrix::from_rows_unchecked(rows))
}

/// Inverse by the adjugate method: `transpose(cofactors) / det`.
///
/// # Errors
///
/// - [`LinalgError::NotSquare`] if the matrix is not square.
/// - [`LinalgError::SingularMatrix`] if the determinant is zero.
///
/// # Example
///
/// ```
/// use ratla_linalg::{determinant::inverse, Matrix};
///
/// let m = Matrix::from_integers(&[[2, 0], [0, 4]]).unwrap();
/// let inv = inverse(&m).unwrap();
/// assert_eq!(inv[(1, 1)].to_string(), "1/4");
/// ```
pub fn inverse(matrix: &Matrix) -> Result<Matrix, LinalgError> {
    matrix.ensure_square()?;

    let det = determinant(matrix)?;
    log::debug!("inverse: determinant is {det}");
    if det.is_zero() {
        return Err(LinalgError::SingularMatrix);
    }

    let adjugate = transpose(&cofactor_matrix(matrix)?);
    scalar_multiply(&adjugate, &det.reciprocal()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::multiply;

    fn frac(n: i64, d: i64) -> RationalValue {
        RationalValue::from_integers(n, d).unwrap()
    }

    #[test]
    fn test_determinant_2x2() -> Result<(), LinalgError> {
        let m = Matrix::from_integers(&[[4, 3], [6, 3]])?;
        assert_eq!(determinant(&m)?, RationalValue::from(-6));
        Ok(())
    }

    #[test]
    fn test_determinant_1x1() -> Result<(), LinalgError> {
        let m = Matrix::from_integers(&[[5]])?;
        assert_eq!(determinant(&m)?, RationalValue::from(5));
        Ok(())
    }

    #[test]
    fn test_determinant_3x3() -> Result<(), LinalgError> {
        let m = Matrix::from_integers(&[[2, -3, 1], [2, 0, -1], [1, 4, 5]])?;
        assert_eq!(determinant(&m)?, RationalValue::from(49));

        let m = Matrix::from_integers(&[[0, 1, 2], [1, 0, 3], [4, -3, 8]])?;
        assert_eq!(determinant(&m)?, RationalValue::from(-2));
        Ok(())
    }

    #[test]
    fn test_determinant_fractions() -> Result<(), LinalgError> {
        let m = Matrix::from_rows(vec![
            vec![frac(1, 2), frac(1, 3)],
            vec![frac(1, 4), frac(1, 5)],
        ])?;
        // 1/10 - 1/12
        assert_eq!(determinant(&m)?, frac(1, 60));
        Ok(())
    }

    #[test]
    fn test_determinant_not_square() -> Result<(), LinalgError> {
        let m = Matrix::from_integers(&[[1, 2, 3], [4, 5, 6]])?;
        assert_eq!(
            determinant(&m),
            Err(LinalgError::NotSquare { rows: 2, cols: 3 })
        );
        Ok(())
    }

    #[test]
    fn test_minor() -> Result<(), LinalgError> {
        let m = Matrix::from_integers(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]])?;
        assert_eq!(minor(&m, 1, 1)?, Matrix::from_integers(&[[1, 3], [7, 9]])?);
        assert_eq!(minor(&m, 0, 2)?, Matrix::from_integers(&[[4, 5], [7, 8]])?);
        assert!(matches!(
            minor(&m, 3, 0),
            Err(LinalgError::InvalidArgument(_))
        ));
        Ok(())
    }

    #[test]
    fn test_minor_1x1_fails() -> Result<(), LinalgError> {
        let m = Matrix::from_integers(&[[5]])?;
        assert!(matches!(
            minor(&m, 0, 0),
            Err(LinalgError::InvalidArgument(_))
        ));
        Ok(())
    }

    #[test]
    fn test_cofactor_matrix() -> Result<(), LinalgError> {
        let m = Matrix::from_integers(&[[1, 2], [3, 4]])?;
        assert_eq!(
            cofactor_matrix(&m)?,
            Matrix::from_integers(&[[4, -3], [-2, 1]])?
        );
        Ok(())
    }

    #[test]
    fn test_inverse_identity() -> Result<(), LinalgError> {
        let i = Matrix::identity(2)?;
        assert_eq!(inverse(&i)?, i);
        Ok(())
    }

    #[test]
    fn test_inverse_3x3() -> Result<(), LinalgError> {
        let m = Matrix::from_integers(&[[2, -3, 1], [2, 0, -1], [1, 4, 5]])?;
        let inv = inverse(&m)?;
        assert_eq!(inv[(0, 0)], frac(4, 49));
        assert_eq!(multiply(&m, &inv)?, Matrix::identity(3)?);
        assert_eq!(multiply(&inv, &m)?, Matrix::identity(3)?);
        Ok(())
    }

    #[test]
    fn test_inverse_1x1() -> Result<(), LinalgError> {
        let m = Matrix::from_integers(&[[4]])?;
        assert_eq!(inverse(&m)?, Matrix::from_rows(vec![vec![frac(1, 4)]])?);
        Ok(())
    }

    #[test]
    fn test_inverse_singular() -> Result<(), LinalgError> {
        let m = Matrix::from_integers(&[[1, 1], [1, 1]])?;
        assert_eq!(inverse(&m), Err(LinalgError::SingularMatrix));
        Ok(())
    }
}
