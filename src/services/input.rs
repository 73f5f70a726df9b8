//! Parsing of raw command arguments
//!
//! Every argument is validated here before any document is loaded, so a bad
//! argument never causes a write.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseId, Money, Month};

/// Parse a strictly positive amount
pub fn parse_amount(raw: &str) -> ExpenseResult<Money> {
    let amount = Money::parse(raw)
        .map_err(|e| ExpenseError::InvalidInput(format!("Invalid amount: {}", e)))?;

    if !amount.is_positive() {
        return Err(ExpenseError::InvalidInput(format!(
            "Amount must be positive, got {}",
            raw.trim()
        )));
    }

    Ok(amount)
}

/// Parse a month index between 1 and 12
pub fn parse_month(raw: &str) -> ExpenseResult<Month> {
    raw.parse()
        .map_err(|e| ExpenseError::InvalidInput(format!("Invalid month: {}", e)))
}

/// Parse a positive expense ID
pub fn parse_id(raw: &str) -> ExpenseResult<ExpenseId> {
    raw.parse()
        .map_err(|e| ExpenseError::InvalidInput(format!("Invalid ID: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("4.5").unwrap(), Money::from_cents(450));
        assert!(parse_amount("0").unwrap_err().is_validation());
        assert!(parse_amount("-2").unwrap_err().is_validation());
        assert!(parse_amount("lots").unwrap_err().is_validation());
        assert!(parse_amount("").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("12").unwrap().name(), "December");
        assert!(parse_month("13").unwrap_err().is_validation());
        assert!(parse_month("0").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("8").unwrap().value(), 8);
        assert!(parse_id("0").unwrap_err().is_validation());
        assert!(parse_id("x").unwrap_err().is_validation());
    }
}
