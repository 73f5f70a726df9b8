//! Expense identifiers
//!
//! Expenses are numbered sequentially, so the ID is a positive integer
//! rather than a UUID. The newtype keeps it from being mixed up with
//! other integers such as month numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Positive, sequentially assigned expense ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ExpenseId(u32);

impl ExpenseId {
    /// The ID given to the first expense in an empty ledger
    pub const FIRST: ExpenseId = ExpenseId(1);

    /// Create an ID, returning None for zero
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    /// Get the raw value
    pub fn value(&self) -> u32 {
        self.0
    }

    /// The ID following this one, or None at `u32::MAX`
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for ExpenseId {
    type Error = IdParseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| IdParseError(value.to_string()))
    }
}

impl From<ExpenseId> for u32 {
    fn from(id: ExpenseId) -> Self {
        id.0
    }
}

impl FromStr for ExpenseId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u32>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| IdParseError(trimmed.to_string()))
    }
}

/// An ID that is not a positive integer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdParseError(pub String);

impl fmt::Display for IdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid expense ID", self.0)
    }
}

impl std::error::Error for IdParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("42".parse::<ExpenseId>().unwrap().value(), 42);
        assert!("0".parse::<ExpenseId>().is_err());
        assert!("-1".parse::<ExpenseId>().is_err());
        assert!("abc".parse::<ExpenseId>().is_err());
        assert!("".parse::<ExpenseId>().is_err());
    }

    #[test]
    fn test_next() {
        assert_eq!(ExpenseId::FIRST.next().unwrap().value(), 2);
        assert_eq!(ExpenseId::new(u32::MAX).unwrap().next(), None);
    }

    #[test]
    fn test_serde() {
        let id: ExpenseId = serde_json::from_str("3").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
        assert!(serde_json::from_str::<ExpenseId>("0").is_err());
    }
}
