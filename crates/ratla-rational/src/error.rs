use thiserror::Error;

/// An error type for rational value operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RationalError {
    /// A fraction was constructed with a zero denominator.
    #[error("Denominator cannot be 0")]
    ZeroDenominator,

    /// The input text is not a valid fraction literal.
    #[error("Invalid value '{input}': {reason}")]
    Parse {
        /// The text that failed to parse.
        input: String,
        /// Why the text was rejected.
        reason: String,
    },

    /// Decimal arithmetic exceeded the representable range.
    #[error("Decimal overflow during {0}")]
    Overflow(&'static str),

    /// A floating point result has no decimal representation (NaN, infinite or out of range).
    #[error("Result {0} cannot be represented as a decimal")]
    NotRepresentable(f64),
}

impl RationalError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        RationalError::Parse {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}
