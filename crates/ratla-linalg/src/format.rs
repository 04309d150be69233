use ratla_rational::RationalValue;

use crate::{compare::CompareMark, matrix::Matrix};

const CELL_SEPARATOR: &str = ",  ";

fn render_rows<T>(matrix: &Matrix<T>, cell: impl Fn(&T) -> String) -> String {
    matrix
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let cells: Vec<String> = row.iter().map(&cell).collect();
            format!("Row {}:   {}", i + 1, cells.join(CELL_SEPARATOR))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render each row as exact fractions, e.g. `Row 1:   1/2,  -3`.
///
/// # Example
///
/// ```
/// use ratla_linalg::{format::format_fraction, Matrix};
///
/// let m = Matrix::from_integers(&[[1, 2], [3, 4]]).unwrap();
/// assert_eq!(format_fraction(&m), "Row 1:   1,  2\nRow 2:   3,  4");
/// ```
pub fn format_fraction(matrix: &Matrix) -> String {
    render_rows(matrix, RationalValue::to_string)
}

/// Render each row as decimals with at most four fractional digits.
pub fn format_decimal(matrix: &Matrix) -> String {
    render_rows(matrix, RationalValue::to_decimal_string)
}

/// Render a comparison result with `_` for matches and `X` for mismatches.
pub fn format_marks(marks: &Matrix<CompareMark>) -> String {
    render_rows(marks, CompareMark::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compare::compare, error::LinalgError};

    #[test]
    fn test_format_fraction_and_decimal() -> Result<(), LinalgError> {
        let m = Matrix::from_rows(vec![
            vec![RationalValue::from_integers(1, 3)?, RationalValue::from(-2)],
            vec![RationalValue::from_integers(7, 2)?, RationalValue::zero()],
        ])?;

        assert_eq!(format_fraction(&m), "Row 1:   1/3,  -2\nRow 2:   7/2,  0");
        assert_eq!(format_decimal(&m), "Row 1:   0.3333,  -2\nRow 2:   3.5,  0");
        Ok(())
    }

    #[test]
    fn test_format_marks() -> Result<(), LinalgError> {
        let computed = Matrix::from_integers(&[[1, 2, 3]])?;
        let answers = Matrix::from_rows(vec![vec!["1", "3", "3"]])?;
        let marks = compare(&computed, &answers)?;
        assert_eq!(format_marks(&marks), "Row 1:   _,  X,  _");
        Ok(())
    }
}
