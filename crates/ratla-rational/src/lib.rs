#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for rational arithmetic.
///
/// Defines [`RationalError`] for zero denominators, malformed input and
/// values that cannot be represented as a decimal.
pub mod error;

/// Parsing of fraction literals such as `3/4`, `-2x^2` or `5/6y`.
pub mod parse;

/// Exact fraction and decimal rendering.
pub mod format;

/// Square root, trigonometric and power functions over rational values.
///
/// These go through a floating point approximation and rebuild a reduced
/// value from the result.
pub mod transcendental;

/// The self-reducing rational value type.
pub mod value;

/// Symbolic variable powers attached to a rational value.
pub mod variable;

pub use error::RationalError;
pub use format::DECIMAL_PLACES;
pub use value::{RationalValue, DENOMINATOR_LIMIT, UNDERFLOW_EPSILON};
pub use variable::Variable;

/// Re-export of the decimal type backing numerators and denominators.
pub use rust_decimal::Decimal;
