//! Transfer amounts and their pinned text and JSON renderings

use crate::error::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// Largest magnitude below which every integer is exactly representable
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A finite transfer amount.
///
/// Sign and range are not policed here; zero and negative amounts are
/// accepted and left for the node to judge.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    /// Wrap a finite value. `-0` is folded into `0`.
    pub fn new(value: f64) -> Option<Amount> {
        if !value.is_finite() {
            return None;
        }
        if value == 0.0 {
            return Some(Amount(0.0));
        }
        Some(Amount(value))
    }

    /// Parse user input. Surrounding whitespace is ignored; decimal and
    /// exponent forms are accepted. Empty, NaN and infinite input is rejected.
    pub fn parse(raw: &str) -> std::result::Result<Amount, ValidationError> {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| ValidationError::NotANumber(raw.to_string()))?;
        Amount::new(value).ok_or_else(|| ValidationError::NotANumber(raw.to_string()))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    fn as_safe_integer(&self) -> Option<i64> {
        if self.0.fract() == 0.0 && self.0.abs() <= MAX_SAFE_INTEGER {
            Some(self.0 as i64)
        } else {
            None
        }
    }
}

/// Shortest round-trip decimal, never in exponent form, no trailing `.0`.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_safe_integer() {
            Some(int) => write!(f, "{int}"),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Integral amounts go out as JSON integers so integer-typed decoders
        // on the node accept them.
        match self.as_safe_integer() {
            Some(int) => serializer.serialize_i64(int),
            None => serializer.serialize_f64(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Amount::new(value).ok_or_else(|| serde::de::Error::custom("amount must be finite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_numbers() {
        assert_eq!(Amount::parse("12.5").unwrap().value(), 12.5);
        assert_eq!(Amount::parse("10").unwrap().value(), 10.0);
        assert_eq!(Amount::parse(" 7 ").unwrap().value(), 7.0);
        assert_eq!(Amount::parse("1e3").unwrap().value(), 1000.0);
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        for raw in ["abc", "", "   ", "12abc", "NaN", "inf", "-infinity", "1,5"] {
            assert_eq!(
                Amount::parse(raw),
                Err(ValidationError::NotANumber(raw.to_string())),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn test_zero_and_negative_pass_through() {
        assert_eq!(Amount::parse("0").unwrap().value(), 0.0);
        assert_eq!(Amount::parse("-5").unwrap().value(), -5.0);
    }

    #[test]
    fn test_display_is_canonical() {
        let cases = [
            ("10", "10"),
            ("10.0", "10"),
            ("12.5", "12.5"),
            ("-3", "-3"),
            ("-0", "0"),
            ("0.1", "0.1"),
            ("1e21", "1000000000000000000000"),
            ("0.0000001", "0.0000001"),
        ];
        for (raw, expected) in cases {
            assert_eq!(Amount::parse(raw).unwrap().to_string(), expected, "input {raw:?}");
        }
    }

    #[test]
    fn test_json_integral_amounts_are_integers() {
        let amount = Amount::parse("10").unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "10");
        let amount = Amount::parse("12.5").unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "12.5");
    }

    #[test]
    fn test_json_decodes_integers_and_floats() {
        let amount: Amount = serde_json::from_str("42").unwrap();
        assert_eq!(amount.value(), 42.0);
        let amount: Amount = serde_json::from_str("0.25").unwrap();
        assert_eq!(amount.value(), 0.25);
    }
}
