use std::ops::Index;

use ratla_rational::RationalValue;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::LinalgError;

/// A rectangular container of rows with at least one row and one column.
///
/// The element type defaults to [`RationalValue`]. Operations never mutate
/// their input matrices, they always build a new one.
///
/// # Example
///
/// ```
/// use ratla_linalg::Matrix;
///
/// let m = Matrix::from_integers(&[[4, 3], [6, 3]]).unwrap();
/// assert_eq!(m.shape(), (2, 2));
/// assert!(m.is_square());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Matrix<T = RationalValue> {
    rows: Vec<Vec<T>>,
}

impl<T> Matrix<T> {
    /// Create a matrix from its rows.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidArgument`] if there are no rows, the
    /// first row is empty, or the rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, LinalgError> {
        let cols = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => {
                return Err(LinalgError::InvalidArgument(
                    "matrix must have at least one row and one column".to_string(),
                ))
            }
        };

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(LinalgError::InvalidArgument(format!(
                "row {} has {} columns, expected {}",
                i + 1,
                row.len(),
                cols
            )));
        }

        Ok(Self { rows })
    }

    /// Build a matrix from rows already known to be rectangular and non-empty.
    pub(crate) fn from_rows_unchecked(rows: Vec<Vec<T>>) -> Self {
        debug_assert!(!rows.is_empty() && !rows[0].is_empty());
        debug_assert!(rows.iter().all(|r| r.len() == rows[0].len()));
        Self { rows }
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.rows[0].len()
    }

    /// The shape as (rows, cols).
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    /// Whether the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    /// Return the size of a square matrix, or fail with [`LinalgError::NotSquare`].
    pub(crate) fn ensure_square(&self) -> Result<usize, LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        Ok(self.nrows())
    }

    /// The element at `row`, `col`, if in bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// A single row, if in bounds.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// All rows.
    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// Consume the matrix and return its rows.
    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }

    /// Apply `f` to every element, keeping the shape.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Matrix<U> {
        Matrix {
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(&mut f).collect())
                .collect(),
        }
    }

    /// Apply a fallible `f` to every element, keeping the shape.
    pub fn try_map<U, E>(&self, mut f: impl FnMut(&T) -> Result<U, E>) -> Result<Matrix<U>, E> {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().map(&mut f).collect::<Result<Vec<_>, E>>())
            .collect::<Result<Vec<_>, E>>()?;
        Ok(Matrix { rows })
    }
}

impl Matrix<RationalValue> {
    /// A matrix of exact zeros.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, LinalgError> {
        Self::from_rows(vec![vec![RationalValue::zero(); cols]; rows])
    }

    /// The `n`x`n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, LinalgError> {
        let mut m = Self::zeros(n, n)?;
        for (i, row) in m.rows.iter_mut().enumerate() {
            row[i] = RationalValue::one();
        }
        Ok(m)
    }

    /// A single-column matrix holding `values`.
    pub fn column_vector(values: Vec<RationalValue>) -> Result<Self, LinalgError> {
        Self::from_rows(values.into_iter().map(|v| vec![v]).collect())
    }

    /// A matrix of integer entries.
    pub fn from_integers<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, LinalgError> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.as_ref().iter().map(|&v| RationalValue::from(v)).collect())
                .collect(),
        )
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.rows[row][col]
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Matrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Matrix::from_rows(rows).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_rejects_empty() {
        let res = Matrix::<RationalValue>::from_rows(vec![]);
        assert!(matches!(res, Err(LinalgError::InvalidArgument(_))));

        let res = Matrix::<RationalValue>::from_rows(vec![vec![]]);
        assert!(matches!(res, Err(LinalgError::InvalidArgument(_))));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let res = Matrix::from_integers(&[vec![1, 2], vec![3]]);
        assert!(matches!(res, Err(LinalgError::InvalidArgument(_))));
    }

    #[test]
    fn test_shape_and_access() -> Result<(), LinalgError> {
        let m = Matrix::from_integers(&[[1, 2, 3], [4, 5, 6]])?;
        assert_eq!(m.shape(), (2, 3));
        assert!(!m.is_square());
        assert_eq!(m[(1, 2)], RationalValue::from(6));
        assert_eq!(m.get(0, 1), Some(&RationalValue::from(2)));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.row(1).map(|r| r.len()), Some(3));
        assert_eq!(
            m.ensure_square(),
            Err(LinalgError::NotSquare { rows: 2, cols: 3 })
        );
        Ok(())
    }

    #[test]
    fn test_identity() -> Result<(), LinalgError> {
        let m = Matrix::identity(3)?;
        assert_eq!(m, Matrix::from_integers(&[[1, 0, 0], [0, 1, 0], [0, 0, 1]])?);
        assert!(Matrix::identity(0).is_err());
        Ok(())
    }

    #[test]
    fn test_map() -> Result<(), LinalgError> {
        let m = Matrix::from_integers(&[[1, -2]])?;
        let signs = m.map(|v| v.numerator().is_sign_negative());
        assert_eq!(signs.rows(), &[vec![false, true]]);
        Ok(())
    }

    #[test]
    fn test_serde_validates_shape() -> Result<(), serde_json::Error> {
        let m: Matrix<i32> = serde_json::from_str("[[1, 2], [3, 4]]")?;
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(serde_json::to_string(&m)?, "[[1,2],[3,4]]");

        let ragged: Result<Matrix<i32>, _> = serde_json::from_str("[[1, 2], [3]]");
        assert!(ragged.is_err());
        Ok(())
    }
}
