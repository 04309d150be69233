use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::RationalError;

/// A symbolic variable raised to a power, e.g. `x^2`.
///
/// Negative powers place the variable in the denominator when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// The variable symbol.
    pub symbol: char,
    /// The power the symbol is raised to.
    pub power: Decimal,
}

impl Variable {
    /// Create a new variable with the given power.
    pub fn new(symbol: char, power: Decimal) -> Self {
        Self { symbol, power }
    }

    /// Create a variable raised to the first power.
    pub fn linear(symbol: char) -> Self {
        Self::new(symbol, Decimal::ONE)
    }

    /// The same symbol with the power negated.
    pub fn inverted(&self) -> Self {
        Self::new(self.symbol, -self.power)
    }

    /// The same symbol with the absolute value of the power.
    pub fn abs(&self) -> Self {
        Self::new(self.symbol, self.power.abs())
    }

    /// Multiply the power by `factor`.
    pub fn scaled(&self, factor: Decimal) -> Result<Self, RationalError> {
        let power = self
            .power
            .checked_mul(factor)
            .ok_or(RationalError::Overflow("variable power scaling"))?;
        Ok(Self::new(self.symbol, power.normalize()))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.power.is_zero() {
            return write!(f, "1");
        }
        if self.power == Decimal::ONE {
            write!(f, "{}", self.symbol)
        } else {
            write!(f, "{}^{}", self.symbol, self.power.normalize())
        }
    }
}

/// Merge two variable lists as in a product: powers of matching symbols are
/// summed (and dropped when they cancel), unmatched variables from both sides
/// are kept in order, left first.
pub(crate) fn merge_powers(
    left: &[Variable],
    right: &[Variable],
) -> Result<Vec<Variable>, RationalError> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut consumed = vec![false; right.len()];

    for var in left {
        let matching = right
            .iter()
            .enumerate()
            .find(|(i, other)| !consumed[*i] && other.symbol == var.symbol);

        match matching {
            Some((i, other)) => {
                consumed[i] = true;
                let power = var
                    .power
                    .checked_add(other.power)
                    .ok_or(RationalError::Overflow("variable power addition"))?;
                if !power.is_zero() {
                    merged.push(Variable::new(var.symbol, power.normalize()));
                }
            }
            None => merged.push(*var),
        }
    }

    merged.extend(
        right
            .iter()
            .zip(consumed)
            .filter(|(_, used)| !used)
            .map(|(var, _)| *var),
    );

    Ok(merged)
}
