use ratla_rational::{Decimal, RationalValue};

use crate::{error::LinalgError, matrix::Matrix};

/// The components of a single-column matrix.
fn components(v: &Matrix) -> Result<Vec<&RationalValue>, LinalgError> {
    if v.ncols() != 1 {
        return Err(LinalgError::DimensionMismatch {
            left: v.shape(),
            right: (v.nrows(), 1),
        });
    }
    Ok(v.rows().iter().map(|row| &row[0]).collect())
}

/// The components of two column vectors of equal length.
fn paired<'a>(
    v1: &'a Matrix,
    v2: &'a Matrix,
) -> Result<(Vec<&'a RationalValue>, Vec<&'a RationalValue>), LinalgError> {
    let (a, b) = (components(v1)?, components(v2)?);
    if a.len() != b.len() {
        return Err(LinalgError::DimensionMismatch {
            left: v1.shape(),
            right: v2.shape(),
        });
    }
    Ok((a, b))
}

/// Euclidean length: square root of the sum of squared components.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] if `v` is not a single column.
///
/// # Example
///
/// ```
/// use ratla_linalg::{vector::magnitude, Matrix};
///
/// let v = Matrix::from_integers(&[[3], [4]]).unwrap();
/// assert!(magnitude(&v).unwrap() == 5i64);
/// ```
pub fn magnitude(v: &Matrix) -> Result<RationalValue, LinalgError> {
    let mut sum = RationalValue::zero();
    for c in components(v)? {
        sum = sum.checked_add(&c.checked_mul(c)?)?;
    }
    Ok(sum.sqrt()?)
}

/// Each component divided by the magnitude.
///
/// The zero vector maps to itself since dividing by zero yields zero.
pub fn unit_vector(v: &Matrix) -> Result<Matrix, LinalgError> {
    let length = magnitude(v)?;
    Ok(v.try_map(|c| c.checked_div(&length))?)
}

/// Sum of the element-wise products of two column vectors.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] unless both are columns of the
/// same length.
pub fn dot_product(v1: &Matrix, v2: &Matrix) -> Result<RationalValue, LinalgError> {
    let (a, b) = paired(v1, v2)?;
    let mut sum = RationalValue::zero();
    for (x, y) in a.into_iter().zip(b) {
        sum = sum.checked_add(&x.checked_mul(y)?)?;
    }
    Ok(sum)
}

/// The angle between two column vectors, in degrees.
///
/// The cosine is clamped into `[-1, 1]` before taking the arc cosine, since
/// the magnitudes come from a floating point square root.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] unless both are columns of the
/// same length.
pub fn angle_between(v1: &Matrix, v2: &Matrix) -> Result<RationalValue, LinalgError> {
    paired(v1, v2)?;

    let dot = dot_product(v1, v2)?;
    let lengths = magnitude(v1)?.checked_mul(&magnitude(v2)?)?;
    let cosine = dot.checked_div(&lengths)?;

    let quotient = cosine.to_decimal()?;
    let cosine = if quotient > Decimal::ONE {
        RationalValue::one()
    } else if quotient < Decimal::NEGATIVE_ONE {
        -RationalValue::one()
    } else {
        cosine
    };

    log::debug!("angle_between: cosine is {cosine}");
    Ok(cosine.acos()?)
}

/// The 3D cross product `v1 x v2`.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] unless both are 3 x 1 columns.
///
/// # Example
///
/// ```
/// use ratla_linalg::{vector::cross_product, Matrix};
///
/// let x = Matrix::from_integers(&[[1], [0], [0]]).unwrap();
/// let y = Matrix::from_integers(&[[0], [1], [0]]).unwrap();
/// let z = cross_product(&x, &y).unwrap();
/// assert_eq!(z, Matrix::from_integers(&[[0], [0], [1]]).unwrap());
/// ```
pub fn cross_product(v1: &Matrix, v2: &Matrix) -> Result<Matrix, LinalgError> {
    let (a, b) = paired(v1, v2)?;
    if a.len() != 3 {
        return Err(LinalgError::DimensionMismatch {
            left: v1.shape(),
            right: (3, 1),
        });
    }

    let term = |i: usize, j: usize| -> Result<RationalValue, LinalgError> {
        Ok(a[i].checked_mul(b[j])?.checked_sub(&a[j].checked_mul(b[i])?)?)
    };

    Matrix::column_vector(vec![term(1, 2)?, term(2, 0)?, term(0, 1)?])
}
