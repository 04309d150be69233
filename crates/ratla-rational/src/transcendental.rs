use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::{error::RationalError, value::RationalValue, variable::Variable};

const HALF: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

fn to_decimal(value: f64) -> Result<Decimal, RationalError> {
    Decimal::from_f64(value).ok_or(RationalError::NotRepresentable(value))
}

impl RationalValue {
    /// The value as a floating point approximation, ignoring variables.
    ///
    /// `NaN` if the quotient has no decimal representation.
    pub fn to_f64(&self) -> f64 {
        self.to_decimal()
            .ok()
            .and_then(|d| d.to_f64())
            .unwrap_or(f64::NAN)
    }

    /// Apply `f` to the float approximation and rebuild a single-term value,
    /// keeping the variables.
    fn map_float(&self, f: impl Fn(f64) -> f64) -> Result<Self, RationalError> {
        let numerator = to_decimal(f(self.to_f64()))?;
        Self::new(numerator, Decimal::ONE, self.variables().to_vec())
    }

    /// Square root of numerator and denominator independently, halving every
    /// variable power.
    ///
    /// # Errors
    ///
    /// Fails with [`RationalError::NotRepresentable`] for negative values.
    pub fn sqrt(&self) -> Result<Self, RationalError> {
        let numerator = to_decimal(self.numerator().to_f64().unwrap_or(f64::NAN).sqrt())?;
        let denominator = to_decimal(self.denominator().to_f64().unwrap_or(f64::NAN).sqrt())?;
        let variables = self
            .variables()
            .iter()
            .map(|v| v.scaled(HALF))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(numerator, denominator, variables)
    }

    /// Sine of the value in degrees.
    pub fn sin(&self) -> Result<Self, RationalError> {
        self.map_float(|deg| deg.to_radians().sin())
    }

    /// Inverse sine, in degrees.
    pub fn asin(&self) -> Result<Self, RationalError> {
        self.map_float(|x| x.asin().to_degrees())
    }

    /// Cosine of the value in degrees.
    pub fn cos(&self) -> Result<Self, RationalError> {
        self.map_float(|deg| deg.to_radians().cos())
    }

    /// Inverse cosine, in degrees.
    pub fn acos(&self) -> Result<Self, RationalError> {
        self.map_float(|x| x.acos().to_degrees())
    }

    /// Tangent of the value in degrees.
    pub fn tan(&self) -> Result<Self, RationalError> {
        self.map_float(|deg| deg.to_radians().tan())
    }

    /// Inverse tangent, in degrees.
    pub fn atan(&self) -> Result<Self, RationalError> {
        self.map_float(|x| x.atan().to_degrees())
    }

    /// Raise to a real power through the float approximation.
    ///
    /// Every variable power is multiplied by `power`. A zero power gives
    /// exactly one, without variables.
    pub fn powf(&self, power: f64) -> Result<Self, RationalError> {
        if power == 0.0 {
            return Ok(Self::one());
        }

        let factor = to_decimal(power)?;
        let variables = self
            .variables()
            .iter()
            .map(|v| v.scaled(factor))
            .collect::<Result<Vec<Variable>, _>>()?;

        let value = to_decimal(self.to_f64().powf(power))?;
        Self::new(value, Decimal::ONE, variables)
    }

    /// Raise to an integer power by exact repeated multiplication.
    ///
    /// Negative exponents use the reciprocal, so variable powers are
    /// multiplied by `exp` in both cases.
    pub fn powi(&self, exp: i32) -> Result<Self, RationalError> {
        let mut base = if exp < 0 {
            self.reciprocal()?
        } else {
            self.clone()
        };
        let mut remaining = exp.unsigned_abs();
        let mut result = Self::one();

        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result.checked_mul(&base)?;
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base.checked_mul(&base)?;
            }
        }

        Ok(result)
    }
}
