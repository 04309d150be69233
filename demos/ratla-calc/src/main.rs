use argh::FromArgs;
use serde::Serialize;

use ratla::linalg::{
    compare::{compare, CompareMark},
    determinant, format, ops, solve, transforms, vector, LinalgError, Matrix,
};
use ratla::rational::RationalValue;

/// Exact-fraction matrix and vector calculator.
///
/// Matrices are written as "1 2; 3 4": rows separated by ';', cells by
/// whitespace or ','. Cells accept fractions and variables, e.g. "3/4" or "2x^2".
#[derive(FromArgs)]
struct Args {
    /// output format: decimal (default), fraction or json
    #[argh(
        option,
        short = 'f',
        default = "Format::Decimal",
        from_str_fn(to_format)
    )]
    format: Format,

    #[argh(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Decimal,
    Fraction,
    Json,
}

fn to_format(value: &str) -> Result<Format, String> {
    match value {
        "decimal" => Ok(Format::Decimal),
        "fraction" => Ok(Format::Fraction),
        "json" => Ok(Format::Json),
        _ => Err(format!("unsupported format '{value}'")),
    }
}

/// Split "1 2; 3 4" into a rectangular matrix of cell strings.
fn to_cells(text: &str) -> Result<Matrix<String>, String> {
    let rows = text
        .split(';')
        .filter(|row| !row.trim().is_empty())
        .map(|row| {
            row.split(|c: char| c.is_whitespace() || c == ',')
                .filter(|cell| !cell.is_empty())
                .map(str::to_owned)
                .collect()
        })
        .collect();
    Matrix::from_rows(rows).map_err(|e| e.to_string())
}

fn to_matrix(text: &str) -> Result<Matrix, String> {
    to_cells(text)?
        .try_map(|cell| cell.parse::<RationalValue>())
        .map_err(|e| e.to_string())
}

fn to_value(text: &str) -> Result<RationalValue, String> {
    text.parse().map_err(|e: ratla::rational::RationalError| e.to_string())
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Det(Det),
    Minor(Minor),
    Transpose(Transpose),
    Scale(Scale),
    Add(Add),
    Mul(Mul),
    Cofactors(Cofactors),
    Inverse(Inverse),
    Cramer(Cramer),
    Solve(Solve),
    Compare(Compare),
    Augment(Augment),
    Magnitude(Magnitude),
    Unit(Unit),
    Dot(Dot),
    Angle(Angle),
    Cross(Cross),
}

/// Determinant of a square matrix.
#[derive(FromArgs)]
#[argh(subcommand, name = "det")]
struct Det {
    /// the matrix
    #[argh(positional, from_str_fn(to_matrix))]
    matrix: Matrix,
}

/// Minor of a square matrix: delete one row and one column.
#[derive(FromArgs)]
#[argh(subcommand, name = "minor")]
struct Minor {
    /// the matrix
    #[argh(positional, from_str_fn(to_matrix))]
    matrix: Matrix,

    /// row to delete, starting at 1
    #[argh(option, short = 'r')]
    row: usize,

    /// column to delete, starting at 1
    #[argh(option, short = 'c')]
    col: usize,
}

/// Swap rows and columns.
#[derive(FromArgs)]
#[argh(subcommand, name = "transpose")]
struct Transpose {
    /// the matrix
    #[argh(positional, from_str_fn(to_matrix))]
    matrix: Matrix,
}

/// Multiply every element by a scalar.
#[derive(FromArgs)]
#[argh(subcommand, name = "scale")]
struct Scale {
    /// the matrix
    #[argh(positional, from_str_fn(to_matrix))]
    matrix: Matrix,

    /// the scalar, e.g. 3 or -1/2
    #[argh(option, short = 's', from_str_fn(to_value))]
    scalar: RationalValue,
}

/// Add two matrices of the same shape.
#[derive(FromArgs)]
#[argh(subcommand, name = "add")]
struct Add {
    /// the left matrix
    #[argh(positional, from_str_fn(to_matrix))]
    lhs: Matrix,

    /// the right matrix
    #[argh(positional, from_str_fn(to_matrix))]
    rhs: Matrix,

    /// subtract the right matrix instead
    #[argh(switch)]
    subtract: bool,
}

/// Matrix product.
#[derive(FromArgs)]
#[argh(subcommand, name = "mul")]
struct Mul {
    /// the left matrix
    #[argh(positional, from_str_fn(to_matrix))]
    lhs: Matrix,

    /// the right matrix
    #[argh(positional, from_str_fn(to_matrix))]
    rhs: Matrix,
}

/// Matrix of cofactors.
#[derive(FromArgs)]
#[argh(subcommand, name = "cofactors")]
struct Cofactors {
    /// the matrix
    #[argh(positional, from_str_fn(to_matrix))]
    matrix: Matrix,
}

/// Inverse by the adjugate method.
#[derive(FromArgs)]
#[argh(subcommand, name = "inverse")]
struct Inverse {
    /// the matrix
    #[argh(positional, from_str_fn(to_matrix))]
    matrix: Matrix,
}

/// Solve a linear system with Cramer's rule.
#[derive(FromArgs)]
#[argh(subcommand, name = "cramer")]
struct Cramer {
    /// the coefficient matrix
    #[argh(positional, from_str_fn(to_matrix))]
    coefficients: Matrix,

    /// the constants as a single column, e.g. "17; 21"
    #[argh(positional, from_str_fn(to_matrix))]
    constants: Matrix,
}

/// Solve a linear system by multiplying with the inverse.
#[derive(FromArgs)]
#[argh(subcommand, name = "solve")]
struct Solve {
    /// the coefficient matrix
    #[argh(positional, from_str_fn(to_matrix))]
    coefficients: Matrix,

    /// the constants as a single column
    #[argh(positional, from_str_fn(to_matrix))]
    constants: Matrix,
}

/// Check hand-computed answers against a matrix.
#[derive(FromArgs)]
#[argh(subcommand, name = "compare")]
struct Compare {
    /// the computed matrix
    #[argh(positional, from_str_fn(to_matrix))]
    computed: Matrix,

    /// the answers, same shape
    #[argh(positional, from_str_fn(to_cells))]
    answers: Matrix<String>,
}

/// Augment into homogeneous form.
#[derive(FromArgs)]
#[argh(subcommand, name = "augment")]
struct Augment {
    /// the matrix
    #[argh(positional, from_str_fn(to_matrix))]
    matrix: Matrix,

    /// number of dimensions to add
    #[argh(option, short = 'n', default = "1")]
    dims: usize,
}

/// Length of a column vector.
#[derive(FromArgs)]
#[argh(subcommand, name = "magnitude")]
struct Magnitude {
    /// the vector, e.g. "3; 4"
    #[argh(positional, from_str_fn(to_matrix))]
    vector: Matrix,
}

/// Unit vector in the same direction.
#[derive(FromArgs)]
#[argh(subcommand, name = "unit")]
struct Unit {
    /// the vector
    #[argh(positional, from_str_fn(to_matrix))]
    vector: Matrix,
}

/// Dot product of two column vectors.
#[derive(FromArgs)]
#[argh(subcommand, name = "dot")]
struct Dot {
    /// the first vector
    #[argh(positional, from_str_fn(to_matrix))]
    v1: Matrix,

    /// the second vector
    #[argh(positional, from_str_fn(to_matrix))]
    v2: Matrix,
}

/// Angle between two column vectors, in degrees.
#[derive(FromArgs)]
#[argh(subcommand, name = "angle")]
struct Angle {
    /// the first vector
    #[argh(positional, from_str_fn(to_matrix))]
    v1: Matrix,

    /// the second vector
    #[argh(positional, from_str_fn(to_matrix))]
    v2: Matrix,
}

/// Cross product of two 3D column vectors.
#[derive(FromArgs)]
#[argh(subcommand, name = "cross")]
struct Cross {
    /// the first vector
    #[argh(positional, from_str_fn(to_matrix))]
    v1: Matrix,

    /// the second vector
    #[argh(positional, from_str_fn(to_matrix))]
    v2: Matrix,
}

/// The result of one operation.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Output {
    Value(RationalValue),
    Matrix(Matrix),
    Marks(Matrix<CompareMark>),
}

fn run(command: Command) -> Result<Output, LinalgError> {
    let output = match command {
        Command::Det(c) => Output::Value(determinant::determinant(&c.matrix)?),
        Command::Minor(c) => {
            if c.row == 0 || c.col == 0 {
                return Err(LinalgError::InvalidArgument(
                    "rows and columns start at 1".to_string(),
                ));
            }
            Output::Matrix(determinant::minor(&c.matrix, c.row - 1, c.col - 1)?)
        }
        Command::Transpose(c) => Output::Matrix(ops::transpose(&c.matrix)),
        Command::Scale(c) => Output::Matrix(ops::scalar_multiply(&c.matrix, &c.scalar)?),
        Command::Add(c) => Output::Matrix(ops::add(&c.lhs, &c.rhs, c.subtract)?),
        Command::Mul(c) => Output::Matrix(ops::multiply(&c.lhs, &c.rhs)?),
        Command::Cofactors(c) => Output::Matrix(determinant::cofactor_matrix(&c.matrix)?),
        Command::Inverse(c) => Output::Matrix(determinant::inverse(&c.matrix)?),
        Command::Cramer(c) => Output::Matrix(solve::cramer(&c.coefficients, &c.constants)?),
        Command::Solve(c) => {
            Output::Matrix(solve::solve_by_inverse(&c.coefficients, &c.constants)?)
        }
        Command::Compare(c) => Output::Marks(compare(&c.computed, &c.answers)?),
        Command::Augment(c) => Output::Matrix(transforms::add_dimensions(&c.matrix, c.dims)),
        Command::Magnitude(c) => Output::Value(vector::magnitude(&c.vector)?),
        Command::Unit(c) => Output::Matrix(vector::unit_vector(&c.vector)?),
        Command::Dot(c) => Output::Value(vector::dot_product(&c.v1, &c.v2)?),
        Command::Angle(c) => Output::Value(vector::angle_between(&c.v1, &c.v2)?),
        Command::Cross(c) => Output::Matrix(vector::cross_product(&c.v1, &c.v2)?),
    };
    Ok(output)
}

fn render(output: &Output, fmt: Format) -> Result<String, serde_json::Error> {
    Ok(match (output, fmt) {
        (_, Format::Json) => serde_json::to_string_pretty(output)?,
        (Output::Value(v), Format::Decimal) => v.to_decimal_string(),
        (Output::Value(v), Format::Fraction) => v.to_string(),
        (Output::Matrix(m), Format::Decimal) => format::format_decimal(m),
        (Output::Matrix(m), Format::Fraction) => format::format_fraction(m),
        (Output::Marks(m), _) => format::format_marks(m),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    match run(args.command) {
        Ok(output) => println!("{}", render(&output, args.format)?),
        Err(e) => {
            log::debug!("operation failed: {e:?}");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}
