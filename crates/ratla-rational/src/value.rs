use std::ops::Neg;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    error::RationalError,
    variable::{merge_powers, Variable},
};

/// Denominators above this magnitude collapse to an integer approximation.
pub const DENOMINATOR_LIMIT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Numerators below this magnitude snap to exactly zero.
pub const UNDERFLOW_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 10);

/// An exact fraction with optional symbolic variable powers.
///
/// The value is kept reduced at all times:
///
/// - the denominator is strictly positive,
/// - numerator and denominator share no common factor,
/// - the denominator is an integer, a fraction whose reduced parts do not fit
///   a decimal is folded into its quotient over one,
/// - denominators larger than [`DENOMINATOR_LIMIT`] are folded into the numerator,
/// - numerators smaller than [`UNDERFLOW_EPSILON`] become `0/1`,
/// - variables with a zero power are removed.
///
/// Arithmetic never mutates its operands, every operation returns a new value.
///
/// # Example
///
/// ```
/// use ratla_rational::RationalValue;
///
/// let a = RationalValue::from_integers(6, 8).unwrap();
/// let b = RationalValue::from_integers(1, 4).unwrap();
/// let sum = a.checked_add(&b).unwrap();
/// assert_eq!(sum, RationalValue::one());
/// assert_eq!(a.to_string(), "3/4");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RationalParts")]
pub struct RationalValue {
    numerator: Decimal,
    denominator: Decimal,
    variables: Vec<Variable>,
}

/// Unvalidated serialized form, reduced on the way in.
#[derive(Deserialize)]
struct RationalParts {
    numerator: Decimal,
    denominator: Decimal,
    #[serde(default)]
    variables: Vec<Variable>,
}

impl TryFrom<RationalParts> for RationalValue {
    type Error = RationalError;

    fn try_from(parts: RationalParts) -> Result<Self, Self::Error> {
        RationalValue::new(parts.numerator, parts.denominator, parts.variables)
    }
}

/// Greatest common divisor by Euclid's algorithm over decimal remainders.
///
/// `None` when a remainder cannot be computed at the combined scale.
fn gcd(mut m: Decimal, mut n: Decimal) -> Option<Decimal> {
    while !m.is_zero() {
        let r = n.checked_rem(m)?;
        n = m;
        m = r;
    }
    Some(n.abs())
}

impl RationalValue {
    /// Create a new reduced value.
    ///
    /// # Arguments
    ///
    /// * `numerator` - The numerator, may carry fractional digits.
    /// * `denominator` - The denominator, must not be zero.
    /// * `variables` - Symbolic variable powers attached to the value.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::ZeroDenominator`] if `denominator` is zero and
    /// [`RationalError::Overflow`] if the reduced value leaves the decimal range.
    pub fn new(
        numerator: Decimal,
        denominator: Decimal,
        variables: Vec<Variable>,
    ) -> Result<Self, RationalError> {
        if denominator.is_zero() {
            return Err(RationalError::ZeroDenominator);
        }

        let mut value = Self {
            numerator,
            denominator,
            variables,
        };
        value.reduce()?;
        Ok(value)
    }

    /// Create a variable-free value from an integer numerator and denominator.
    pub fn from_integers(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        Self::new(
            Decimal::from(numerator),
            Decimal::from(denominator),
            Vec::new(),
        )
    }

    /// The exact value `0/1`.
    pub fn zero() -> Self {
        Self::from(0)
    }

    /// The exact value `1/1`.
    pub fn one() -> Self {
        Self::from(1)
    }

    /// The numerator, carrying the sign of the value.
    pub fn numerator(&self) -> Decimal {
        self.numerator
    }

    /// The strictly positive denominator.
    pub fn denominator(&self) -> Decimal {
        self.denominator
    }

    /// The variable powers attached to the value, in insertion order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Whether the numerator is zero.
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// The quotient `numerator / denominator`, ignoring variables.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::Overflow`] if the quotient leaves the decimal range.
    pub fn to_decimal(&self) -> Result<Decimal, RationalError> {
        self.numerator
            .checked_div(self.denominator)
            .map(|q| q.normalize())
            .ok_or(RationalError::Overflow("division"))
    }

    /// Replace the fraction by its quotient over one.
    fn collapse(&mut self) -> Result<(), RationalError> {
        self.numerator = self.to_decimal()?;
        self.denominator = Decimal::ONE;
        Ok(())
    }

    /// Normalize sign, reduce to lowest terms and apply the precision clamps.
    fn reduce(&mut self) -> Result<(), RationalError> {
        if self.denominator.is_sign_negative() {
            self.numerator = -self.numerator;
            self.denominator = -self.denominator;
        }

        let factor = gcd(self.numerator, self.denominator);
        if factor != Some(Decimal::ONE) {
            match factor.and_then(|f| {
                Some((self.numerator.checked_div(f)?, self.denominator.checked_div(f)?))
            }) {
                Some((numerator, denominator)) if denominator.fract().is_zero() => {
                    self.numerator = numerator;
                    self.denominator = denominator;
                }
                // the reduced parts need more digits than a decimal holds
                _ => {
                    log::trace!(
                        "{}/{} has no reduced form in range, collapsing to a single term",
                        self.numerator,
                        self.denominator
                    );
                    self.collapse()?;
                }
            }
        }

        if self.numerator == self.denominator {
            self.numerator = Decimal::ONE;
            self.denominator = Decimal::ONE;
        }

        if self.denominator > DENOMINATOR_LIMIT {
            log::trace!(
                "denominator {} exceeds limit, collapsing to a single term",
                self.denominator
            );
            self.collapse()?;
        }

        if self.numerator.abs() < UNDERFLOW_EPSILON {
            if !self.numerator.is_zero() {
                log::trace!("numerator {} underflows to zero", self.numerator);
            }
            self.numerator = Decimal::ZERO;
            self.denominator = Decimal::ONE;
            self.variables.clear();
        }

        self.numerator = self.numerator.normalize();
        self.denominator = self.denominator.normalize();
        self.variables.retain(|v| !v.power.is_zero());
        Ok(())
    }

    /// The reciprocal value with every variable power negated.
    ///
    /// The reciprocal of zero is zero.
    pub fn reciprocal(&self) -> Result<Self, RationalError> {
        if self.is_zero() {
            return Ok(Self::zero());
        }

        Self::new(
            self.denominator,
            self.numerator,
            self.variables.iter().map(Variable::inverted).collect(),
        )
    }

    /// Add two values.
    ///
    /// Variables are not combined: the result keeps the variables of `self`.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, RationalError> {
        self.combine(rhs, Decimal::checked_add, "addition")
    }

    /// Subtract `rhs` from `self`.
    ///
    /// Variables are not combined: the result keeps the variables of `self`.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, RationalError> {
        self.combine(rhs, Decimal::checked_sub, "subtraction")
    }

    fn combine(
        &self,
        rhs: &Self,
        op: fn(Decimal, Decimal) -> Option<Decimal>,
        what: &'static str,
    ) -> Result<Self, RationalError> {
        let overflow = || RationalError::Overflow(what);

        let (numerator, denominator) = if self.denominator == rhs.denominator {
            (
                op(self.numerator, rhs.numerator).ok_or_else(overflow)?,
                self.denominator,
            )
        } else {
            let left = self
                .numerator
                .checked_mul(rhs.denominator)
                .ok_or_else(overflow)?;
            let right = rhs
                .numerator
                .checked_mul(self.denominator)
                .ok_or_else(overflow)?;
            (
                op(left, right).ok_or_else(overflow)?,
                self.denominator
                    .checked_mul(rhs.denominator)
                    .ok_or_else(overflow)?,
            )
        };

        Self::new(numerator, denominator, self.variables.clone())
    }

    /// Multiply two values, merging their variable powers.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, RationalError> {
        let overflow = || RationalError::Overflow("multiplication");
        let numerator = self
            .numerator
            .checked_mul(rhs.numerator)
            .ok_or_else(overflow)?;
        let denominator = self
            .denominator
            .checked_mul(rhs.denominator)
            .ok_or_else(overflow)?;

        Self::new(
            numerator,
            denominator,
            merge_powers(&self.variables, &rhs.variables)?,
        )
    }

    /// Divide `self` by `rhs`, defined as multiplication by the reciprocal.
    ///
    /// Since the reciprocal of zero is zero, dividing by zero yields zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, RationalError> {
        self.checked_mul(&rhs.reciprocal()?)
    }

    /// Multiply by a plain scalar.
    ///
    /// A zero product short-circuits to an exact zero without variables.
    pub fn scale(&self, factor: Decimal) -> Result<Self, RationalError> {
        let numerator = self
            .numerator
            .checked_mul(factor)
            .ok_or(RationalError::Overflow("scalar multiplication"))?;

        if numerator.is_zero() {
            return Ok(Self::zero());
        }

        Self::new(numerator, self.denominator, self.variables.clone())
    }
}

impl Default for RationalValue {
    fn default() -> Self {
        Self::zero()
    }
}

impl TryFrom<Decimal> for RationalValue {
    type Error = RationalError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value, Decimal::ONE, Vec::new())
    }
}

// An integer over one is already in lowest terms.
impl From<i64> for RationalValue {
    fn from(value: i64) -> Self {
        Self {
            numerator: Decimal::from(value),
            denominator: Decimal::ONE,
            variables: Vec::new(),
        }
    }
}

impl Neg for RationalValue {
    type Output = RationalValue;

    fn neg(mut self) -> Self::Output {
        if !self.numerator.is_zero() {
            self.numerator = -self.numerator;
        }
        self
    }
}

impl Neg for &RationalValue {
    type Output = RationalValue;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

// Values are always stored reduced, so comparing the stored parts is the
// same as comparing after re-reducing both sides.
impl PartialEq for RationalValue {
    fn eq(&self, other: &Self) -> bool {
        self.variables == other.variables
            && self.numerator == other.numerator
            && self.denominator == other.denominator
    }
}

impl Eq for RationalValue {}

impl PartialEq<i64> for RationalValue {
    fn eq(&self, other: &i64) -> bool {
        // integral values are stored over one
        self.variables.is_empty()
            && self.denominator == Decimal::ONE
            && self.numerator == Decimal::from(*other)
    }
}
