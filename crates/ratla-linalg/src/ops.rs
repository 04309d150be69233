use ratla_rational::RationalValue;

use crate::{error::LinalgError, matrix::Matrix};

/// Multiply every element of the matrix by a scalar.
///
/// # Arguments
///
/// * `matrix` - The matrix to scale.
/// * `scalar` - The value to multiply each element by.
///
/// # Returns
///
/// A new matrix with the same shape.
pub fn scalar_multiply(
    matrix: &Matrix,
    scalar: &RationalValue,
) -> Result<Matrix, LinalgError> {
    Ok(matrix.try_map(|v| v.checked_mul(scalar))?)
}

/// Add (or subtract) two matrices element-wise.
///
/// # Arguments
///
/// * `lhs` - The left operand.
/// * `rhs` - The right operand.
/// * `subtract` - Compute `lhs - rhs` instead of `lhs + rhs`.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] unless both shapes are equal.
///
/// # Example
///
/// ```
/// use ratla_linalg::{ops::add, Matrix};
///
/// let a = Matrix::from_integers(&[[1, 2], [3, 4]]).unwrap();
/// let b = Matrix::from_integers(&[[4, 3], [2, 1]]).unwrap();
/// let c = add(&a, &b, false).unwrap();
/// assert_eq!(c, Matrix::from_integers(&[[5, 5], [5, 5]]).unwrap());
/// ```
pub fn add(lhs: &Matrix, rhs: &Matrix, subtract: bool) -> Result<Matrix, LinalgError> {
    if lhs.shape() != rhs.shape() {
        return Err(LinalgError::DimensionMismatch {
            left: lhs.shape(),
            right: rhs.shape(),
        });
    }

    let rows = lhs
        .rows()
        .iter()
        .zip(rhs.rows())
        .map(|(a_row, b_row)| {
            a_row
                .iter()
                .zip(b_row)
                .map(|(a, b)| {
                    if subtract {
                        a.checked_sub(b)
                    } else {
                        a.checked_add(b)
                    }
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Matrix::from_rows_unchecked(rows))
}

/// Subtract `rhs` from `lhs` element-wise.
pub fn subtract(lhs: &Matrix, rhs: &Matrix) -> Result<Matrix, LinalgError> {
    add(lhs, rhs, true)
}

/// Swap rows and columns.
pub fn transpose<T: Clone>(matrix: &Matrix<T>) -> Matrix<T> {
    let rows = (0..matrix.ncols())
        .map(|col| matrix.rows().iter().map(|row| row[col].clone()).collect())
        .collect();
    Matrix::from_rows_unchecked(rows)
}

/// Matrix product `lhs * rhs`.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] unless the column count of
/// `lhs` equals the row count of `rhs`.
pub fn multiply(lhs: &Matrix, rhs: &Matrix) -> Result<Matrix, LinalgError> {
    if lhs.ncols() != rhs.nrows() {
        return Err(LinalgError::DimensionMismatch {
            left: lhs.shape(),
            right: rhs.shape(),
        });
    }

    let mut rows = Vec::with_capacity(lhs.nrows());
    for lhs_row in lhs.rows() {
        let mut row = Vec::with_capacity(rhs.ncols());
        for col in 0..rhs.ncols() {
            let mut acc = RationalValue::zero();
            for (k, a) in lhs_row.iter().enumerate() {
                acc = acc.checked_add(&a.checked_mul(&rhs[(k, col)])?)?;
            }
            row.push(acc);
        }
        rows.push(row);
    }

    Ok(Matrix::from_rows_unchecked(rows))
}
