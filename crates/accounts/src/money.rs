use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finapi_core::{DomainError, ValueObject};

/// Non-negative amount of money carried by a statement operation.
///
/// No currency or rounding rules apply; the value is whatever decimal the
/// caller sent.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, DomainError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::validation(format!(
                "amount must not be negative (got {value})"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl ValueObject for Amount {}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(value: Amount) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_amount_is_rejected() {
        let err = Amount::new(Decimal::new(-1, 2)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("negative")));
    }

    #[test]
    fn zero_is_a_valid_amount() {
        assert_eq!(Amount::new(Decimal::ZERO).unwrap(), Amount::ZERO);
    }

    #[test]
    fn json_numbers_deserialize_and_negative_ones_fail() {
        let amount: Amount = serde_json::from_str("100").unwrap();
        assert_eq!(amount.value(), Decimal::new(100, 0));

        let cents: Amount = serde_json::from_str("12.5").unwrap();
        assert_eq!(cents.value(), Decimal::new(125, 1));

        assert!(serde_json::from_str::<Amount>("-3").is_err());
    }
}
