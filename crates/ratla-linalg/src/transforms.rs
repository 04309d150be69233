use ratla_rational::RationalValue;

use crate::matrix::Matrix;

/// Augment a matrix into homogeneous form `[[A, 0], [0, I_n]]`.
///
/// `n` zero columns are appended to every row, then `n` rows are added that
/// continue the identity diagonal of the new block. With `n == 0` the matrix
/// is returned unchanged.
///
/// # Example
///
/// ```
/// use ratla_linalg::{transforms::add_dimensions, Matrix};
///
/// let m = Matrix::from_integers(&[[2, 3], [4, 5]]).unwrap();
/// let h = add_dimensions(&m, 1);
/// assert_eq!(h, Matrix::from_integers(&[[2, 3, 0], [4, 5, 0], [0, 0, 1]]).unwrap());
/// ```
pub fn add_dimensions(matrix: &Matrix, n: usize) -> Matrix {
    let (rows, cols) = matrix.shape();
    let width = cols + n;

    let mut out: Vec<Vec<RationalValue>> = matrix
        .rows()
        .iter()
        .map(|row| {
            let mut row = row.clone();
            row.resize(width, RationalValue::zero());
            row
        })
        .collect();

    for k in 0..n {
        let mut row = vec![RationalValue::zero(); width];
        row[cols + k] = RationalValue::one();
        out.push(row);
    }

    log::debug!("add_dimensions: {rows}x{cols} -> {}x{width}", rows + n);
    Matrix::from_rows_unchecked(out)
}
