use std::str::FromStr;

use rust_decimal::Decimal;

use crate::{
    error::RationalError,
    value::RationalValue,
    variable::{merge_powers, Variable},
};

/// One side of a fraction literal: a coefficient followed by variables.
struct Term {
    coefficient: Decimal,
    variables: Vec<Variable>,
}

fn parse_decimal(text: &str, input: &str) -> Result<Decimal, RationalError> {
    Decimal::from_str(text)
        .map_err(|e| RationalError::parse(input, format!("bad number '{text}': {e}")))
}

fn parse_term(text: &str, input: &str) -> Result<Term, RationalError> {
    let split = text.find(|c: char| c.is_alphabetic()).unwrap_or(text.len());
    let (number, symbols) = text.split_at(split);

    if symbols.is_empty() && matches!(number, "" | "+" | "-") {
        return Err(RationalError::parse(input, "missing value"));
    }

    let coefficient = match number {
        "" | "+" => Decimal::ONE,
        "-" => Decimal::NEGATIVE_ONE,
        _ => parse_decimal(number, input)?,
    };

    let mut variables: Vec<Variable> = Vec::new();
    let mut chars = symbols.chars().peekable();
    while let Some(symbol) = chars.next() {
        if !symbol.is_alphabetic() {
            return Err(RationalError::parse(
                input,
                format!("unexpected character '{symbol}'"),
            ));
        }

        let power = if chars.peek() == Some(&'^') {
            chars.next();
            let mut exponent = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_alphabetic() {
                    break;
                }
                exponent.push(c);
                chars.next();
            }
            if exponent.is_empty() {
                return Err(RationalError::parse(
                    input,
                    format!("missing power for '{symbol}'"),
                ));
            }
            parse_decimal(&exponent, input)?
        } else {
            Decimal::ONE
        };

        variables = merge_powers(&variables, &[Variable::new(symbol, power)])?;
    }

    Ok(Term {
        coefficient,
        variables,
    })
}

/// Parse a fraction literal.
///
/// The accepted form is `numerator[/denominator]` where each side is an
/// optional signed decimal followed by variables such as `x`, `y^2` or
/// `z^-0.5`. Variables on the denominator side get negated powers.
///
/// # Example
///
/// ```
/// use ratla_rational::RationalValue;
///
/// let v: RationalValue = "6x^2/8y".parse().unwrap();
/// assert_eq!(v.to_string(), "3x^2/4y");
/// ```
impl FromStr for RationalValue {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();

        let mut parts = compact.split('/');
        let numerator = parse_term(parts.next().unwrap_or_default(), s)?;
        let denominator = parts
            .next()
            .map(|text| parse_term(text, s))
            .transpose()?;

        if parts.next().is_some() {
            return Err(RationalError::parse(s, "more than one '/'"));
        }

        let value = RationalValue::new(numerator.coefficient, Decimal::ONE, numerator.variables)?;

        match denominator {
            None => Ok(value),
            Some(term) if term.coefficient.is_zero() => Err(RationalError::ZeroDenominator),
            Some(term) => {
                let divisor = RationalValue::new(term.coefficient, Decimal::ONE, term.variables)?;
                value.checked_div(&divisor)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> RationalValue {
        RationalValue::from_integers(n, d).unwrap()
    }

    #[test]
    fn test_parse_integer_and_fraction() -> Result<(), RationalError> {
        assert_eq!("5".parse::<RationalValue>()?, frac(5, 1));
        assert_eq!("-12/16".parse::<RationalValue>()?, frac(-3, 4));
        assert_eq!(" 3 / -9 ".parse::<RationalValue>()?, frac(-1, 3));
        assert_eq!("1.5".parse::<RationalValue>()?, frac(3, 2));
        Ok(())
    }

    #[test]
    fn test_parse_variables() -> Result<(), RationalError> {
        let v: RationalValue = "2x^2y/3z".parse()?;
        assert_eq!(v.numerator(), Decimal::from(2));
        assert_eq!(v.denominator(), Decimal::from(3));
        assert_eq!(
            v.variables(),
            &[
                Variable::new('x', Decimal::from(2)),
                Variable::linear('y'),
                Variable::new('z', Decimal::NEGATIVE_ONE),
            ]
        );

        let v: RationalValue = "-x".parse()?;
        assert_eq!(v.numerator(), Decimal::NEGATIVE_ONE);
        assert_eq!(v.variables(), &[Variable::linear('x')]);
        Ok(())
    }

    #[test]
    fn test_parse_cancels_variables() -> Result<(), RationalError> {
        let v: RationalValue = "4x/2x".parse()?;
        assert_eq!(v, frac(2, 1));
        assert!(v.variables().is_empty());
        Ok(())
    }

    #[test]
    fn test_parse_zero_denominator() {
        assert_eq!(
            "3/0".parse::<RationalValue>(),
            Err(RationalError::ZeroDenominator)
        );
    }

    #[test]
    fn test_parse_malformed() {
        for text in ["", "/", "1/2/3", "abc/", "3..2", "x^", "2*x", "1/-"] {
            let res = text.parse::<RationalValue>();
            assert!(
                matches!(res, Err(RationalError::Parse { .. })),
                "{text:?} parsed as {res:?}"
            );
        }
    }

    #[test]
    fn test_render_roundtrip() -> Result<(), RationalError> {
        let values = [
            frac(-7, 3),
            frac(12, 1),
            RationalValue::zero(),
            "5x^2/6y^3".parse()?,
            "-x/4".parse()?,
            "1/2z".parse()?,
        ];
        for value in values {
            let back: RationalValue = value.to_string().parse()?;
            assert_eq!(back, value, "roundtrip of {value}");
        }
        Ok(())
    }
}
