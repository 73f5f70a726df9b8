//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. On disk an amount is written as a plain JSON number in currency
//! units (`4.5`). That round-trips exactly only while the cent count stays
//! well inside f64's 53-bit mantissa, so single amounts are capped at
//! [`Money::MAX`] and sums are checked.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Sub;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Largest single amount: 9,999,999,999,999.99
    pub const MAX: Money = Money(999_999_999_999_999);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Whether the magnitude is within [`Money::MAX`]
    pub const fn in_range(&self) -> bool {
        self.0.unsigned_abs() <= Self::MAX.0 as u64
    }

    /// Add two amounts, or None on i64 overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Sum amounts, or None if the total does not fit
    pub fn checked_sum<I: IntoIterator<Item = Money>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Self::zero(), Self::checked_add)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "10.5", ".5".
    /// More than two fractional digits is rejected rather than rounded, and
    /// so is anything beyond [`Money::MAX`].
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(input.to_string());

        let (negative, rest) = match input.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, input),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let (whole, fraction) = match rest.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (rest, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }
        if fraction.len() > 2 {
            return Err(MoneyParseError::TooPrecise(input.to_string()));
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| MoneyParseError::OutOfRange(input.to_string()))?
        };
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .filter(|&t| t <= Self::MAX.0)
            .ok_or_else(|| MoneyParseError::OutOfRange(input.to_string()))?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}", symbol, self.format_plain_abs())
        } else {
            format!("{}{}", symbol, self.format_plain_abs())
        }
    }

    /// Format as a bare two-decimal number, e.g. "4.50"
    pub fn format_plain(&self) -> String {
        self.format_with_symbol("")
    }

    fn format_plain_abs(&self) -> String {
        format!("{}.{:02}", self.dollars().abs(), self.cents_part())
    }

    fn as_units(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_units())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let units = f64::deserialize(deserializer)?;
        if !units.is_finite() {
            return Err(serde::de::Error::custom("amount must be a finite number"));
        }
        let cents = (units * 100.0).round();
        if cents.abs() > Self::MAX.0 as f64 {
            return Err(serde::de::Error::custom(format!(
                "amount {} exceeds the maximum of {}",
                units,
                Self::MAX.format_plain()
            )));
        }
        Ok(Self(cents as i64))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooPrecise(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "'{}' is not a number", s),
            MoneyParseError::TooPrecise(s) => {
                write!(f, "'{}' has more than two decimal places", s)
            }
            MoneyParseError::OutOfRange(s) => write!(f, "'{}' is too large", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("4.5").unwrap().cents(), 450);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("10.").unwrap().cents(), 1000);
    }

    #[test]
    fn test_parse_whole_and_symbol() {
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse(" 7 ").unwrap().cents(), 700);
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert!(Money::parse("-3").unwrap().is_negative());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("1.-5").is_err());
        assert!(Money::parse("1e3").is_err());
        assert!(Money::parse(".").is_err());
        assert_eq!(
            Money::parse("1.234"),
            Err(MoneyParseError::TooPrecise("1.234".into()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(450).to_string(), "$4.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-$0.05");
        assert_eq!(Money::from_cents(15000).format_plain(), "150.00");
        assert_eq!(Money::from_cents(1234).format_with_symbol("€"), "€12.34");
    }

    #[test]
    fn test_parse_rejects_amounts_above_max() {
        assert_eq!(Money::parse("9999999999999.99").unwrap(), Money::MAX);
        assert_eq!(Money::parse("-9999999999999.99").unwrap().cents(), -Money::MAX.cents());
        assert!(matches!(
            Money::parse("10000000000000"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("100000000000000.01"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("90000000000000000"),
            Err(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_checked_sum() {
        let amounts = [Money::from_cents(10), Money::from_cents(20), Money::from_cents(5)];
        assert_eq!(Money::checked_sum(amounts), Some(Money::from_cents(35)));
        assert_eq!(Money::checked_sum(Vec::new()), Some(Money::zero()));

        let huge = Money::from_cents(i64::MAX - 1);
        assert_eq!(Money::checked_sum([huge, Money::from_cents(2)]), None);
    }

    #[test]
    fn test_json_is_plain_number() {
        let json = serde_json::to_string(&Money::from_cents(450)).unwrap();
        assert_eq!(json, "4.5");

        let back: Money = serde_json::from_str("4.5").unwrap();
        assert_eq!(back, Money::from_cents(450));

        let whole: Money = serde_json::from_str("150").unwrap();
        assert_eq!(whole, Money::from_cents(15000));
    }

    #[test]
    fn test_json_round_trip_keeps_cents() {
        for cents in [1, 7, 10, 99, 101, 1999, 123_456_789, 10_000_000_000_001] {
            let money = Money::from_cents(cents);
            let json = serde_json::to_string(&money).unwrap();
            let back: Money = serde_json::from_str(&json).unwrap();
            assert_eq!(back, money, "round trip of {}", json);
        }
    }

    #[test]
    fn test_json_round_trip_at_max() {
        for money in [Money::MAX, Money::from_cents(Money::MAX.cents() - 1)] {
            let json = serde_json::to_string(&money).unwrap();
            let back: Money = serde_json::from_str(&json).unwrap();
            assert_eq!(back, money, "round trip of {}", json);
        }
    }

    #[test]
    fn test_json_rejects_amounts_above_max() {
        assert!(serde_json::from_str::<Money>("10000000000000").is_err());
        assert!(serde_json::from_str::<Money>("1e300").is_err());
        assert!(Money::MAX.in_range());
        assert!(!Money::from_cents(Money::MAX.cents() + 1).in_range());
    }
}
