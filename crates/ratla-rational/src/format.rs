use std::fmt;

use rust_decimal::Decimal;

use crate::value::RationalValue;

/// Number of fractional digits kept by [`RationalValue::to_decimal_string`].
pub const DECIMAL_PLACES: usize = 4;

/// Added (or subtracted for negative values) when the digit after the last
/// kept place rounds up.
const ROUNDING_NUDGE: Decimal = Decimal::from_parts(1, 0, 0, false, 4);

/// Render a coefficient with its variables, eliding a unit coefficient.
fn with_variables(coefficient: Decimal, variables: &str) -> String {
    if variables.is_empty() {
        coefficient.to_string()
    } else if coefficient == Decimal::ONE {
        variables.to_owned()
    } else if coefficient == Decimal::NEGATIVE_ONE {
        format!("-{variables}")
    } else {
        format!("{coefficient}{variables}")
    }
}

/// Renders the exact fraction, e.g. `3x^2/4y`.
///
/// Variables with a positive power go to the numerator, variables with a
/// negative power go to the denominator with the absolute power.
impl fmt::Display for RationalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut upper = String::new();
        let mut lower = String::new();
        for var in self.variables() {
            if var.power.is_sign_positive() {
                upper.push_str(&var.to_string());
            } else {
                lower.push_str(&var.abs().to_string());
            }
        }

        write!(f, "{}", with_variables(self.numerator(), &upper))?;

        if self.denominator() == Decimal::ONE && lower.is_empty() {
            return Ok(());
        }

        write!(f, "/{}", with_variables(self.denominator(), &lower))
    }
}

/// The digit right after the last kept decimal place.
fn next_digit(value: Decimal) -> Decimal {
    let value = value.abs();
    let shifted = value.checked_mul(Decimal::from(100_000));
    let kept = value.checked_mul(Decimal::from(10_000));

    match (shifted, kept) {
        (Some(shifted), Some(kept)) => shifted.trunc() - kept.trunc() * Decimal::TEN,
        _ => Decimal::ZERO,
    }
}

impl RationalValue {
    /// Render the value as a decimal with at most [`DECIMAL_PLACES`] digits.
    ///
    /// The fourth place is rounded half up, the rest is truncated, and an
    /// integral result is printed without a fractional part. Variables are
    /// appended as written, e.g. `0.3333x^-1`. A value whose quotient leaves
    /// the decimal range falls back to the exact form.
    ///
    /// # Example
    ///
    /// ```
    /// use ratla_rational::RationalValue;
    ///
    /// let v = RationalValue::from_integers(2, 3).unwrap();
    /// assert_eq!(v.to_decimal_string(), "0.6667");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let Ok(mut value) = self.to_decimal() else {
            return self.to_string();
        };

        if value.is_zero() {
            return "0".to_owned();
        }

        if next_digit(value) > Decimal::from(4) {
            let nudge = if value.is_sign_positive() {
                ROUNDING_NUDGE
            } else {
                -ROUNDING_NUDGE
            };
            value = value.checked_add(nudge).unwrap_or(value).normalize();
        }

        let text = value.to_string();
        let mut rendered = match text.split_once('.') {
            None => text,
            Some((whole, fraction)) => {
                let fraction = &fraction[..fraction.len().min(DECIMAL_PLACES)];
                if fraction.bytes().all(|b| b == b'0') {
                    whole.to_owned()
                } else {
                    format!("{whole}.{fraction}")
                }
            }
        };

        if rendered == "-0" {
            rendered = "0".to_owned();
        }

        for var in self.variables() {
            rendered.push_str(&var.to_string());
        }

        rendered
    }
}
