use std::fmt;

use ratla_rational::RationalValue;
use serde::Serialize;

use crate::{error::LinalgError, matrix::Matrix};

/// The outcome of comparing one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompareMark {
    /// The typed answer equals the computed value. Renders as `_`.
    Match,
    /// The typed answer differs. Renders as `X`.
    Mismatch,
}

impl fmt::Display for CompareMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareMark::Match => write!(f, "_"),
            CompareMark::Mismatch => write!(f, "X"),
        }
    }
}

/// Compare a computed matrix against typed answers such as `"3/4"` or `"-2"`.
///
/// # Arguments
///
/// * `computed` - The matrix produced by an operation.
/// * `answers` - The hand-computed answers, one string per cell.
///
/// # Errors
///
/// - [`LinalgError::DimensionMismatch`] if the shapes differ.
/// - [`LinalgError::Rational`] if an answer cell cannot be parsed.
///
/// # Example
///
/// ```
/// use ratla_linalg::{compare::{compare, CompareMark}, Matrix};
///
/// let computed = Matrix::from_integers(&[[1, 2]]).unwrap();
/// let answers = Matrix::from_rows(vec![vec!["1", "4/2"]]).unwrap();
/// let marks = compare(&computed, &answers).unwrap();
/// assert_eq!(marks.rows(), &[vec![CompareMark::Match, CompareMark::Match]]);
/// ```
pub fn compare<S: AsRef<str>>(
    computed: &Matrix,
    answers: &Matrix<S>,
) -> Result<Matrix<CompareMark>, LinalgError> {
    if computed.shape() != answers.shape() {
        return Err(LinalgError::DimensionMismatch {
            left: computed.shape(),
            right: answers.shape(),
        });
    }

    let rows = computed
        .rows()
        .iter()
        .zip(answers.rows())
        .map(|(values, typed)| {
            values
                .iter()
                .zip(typed)
                .map(|(value, text)| {
                    let answer: RationalValue = text.as_ref().parse()?;
                    Ok(if answer == *value {
                        CompareMark::Match
                    } else {
                        CompareMark::Mismatch
                    })
                })
                .collect::<Result<Vec<_>, LinalgError>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Matrix::from_rows_unchecked(rows))
}
