use crate::error::ValidationError;
use derive_more::{Add, AddAssign, Deref};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

///
/// Price
///
/// Non-negative fixed-point money amount. A wrapper over `rust_decimal` so
/// the non-negativity invariant is enforced at every construction site and
/// comparisons are exact (no float rounding in range predicates).
///

#[derive(
    Add,
    AddAssign,
    Clone,
    Copy,
    Debug,
    Default,
    Deref,
    Deserialize,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Construct from a decimal. `None` if negative.
    #[must_use]
    pub fn new(value: Decimal) -> Option<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Parse a decimal string, rejecting malformed or negative input.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let value = Decimal::from_str(input).map_err(|_| ValidationError::MalformedPrice {
            input: input.to_string(),
        })?;

        Self::new(value).ok_or_else(|| ValidationError::NegativePrice {
            input: input.to_string(),
        })
    }

    /// Whole-unit constructor, mainly for fixtures.
    #[must_use]
    pub fn from_int(units: u64) -> Self {
        Self(Decimal::from(units))
    }

    #[must_use]
    pub const fn into_inner(self) -> Decimal {
        self.0
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_strings() {
        assert_eq!(Price::parse("300").unwrap(), Price::from_int(300));
        assert_eq!(
            Price::parse("19.99").unwrap().into_inner(),
            Decimal::new(1999, 2)
        );
        assert_eq!(Price::parse("0").unwrap(), Price::ZERO);
    }

    #[test]
    fn rejects_malformed_prices() {
        assert!(matches!(
            Price::parse("abc"),
            Err(ValidationError::MalformedPrice { .. })
        ));
        assert!(matches!(
            Price::parse(""),
            Err(ValidationError::MalformedPrice { .. })
        ));
    }

    #[test]
    fn rejects_negative_prices() {
        assert!(matches!(
            Price::parse("-1"),
            Err(ValidationError::NegativePrice { .. })
        ));
        assert!(matches!(
            Price::parse("-0.01"),
            Err(ValidationError::NegativePrice { .. })
        ));
    }

    #[test]
    fn negative_zero_normalizes_to_zero() {
        assert_eq!(Price::parse("-0").unwrap(), Price::ZERO);
    }

    #[test]
    fn ordering_is_exact() {
        assert!(Price::parse("300").unwrap() < Price::parse("300.01").unwrap());
        assert_eq!(Price::parse("1.50").unwrap(), Price::parse("1.5").unwrap());
    }
}
