//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Month;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Malformed or out-of-range arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Entity not found errors
    #[error("{entity_type} not found (ID: {identifier})")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Editing a month that has no budget yet
    #[error("No budget set for month {0}. Use set-budget to set a budget first.")]
    NoBudgetSet(Month),

    /// Nothing to show. Reported to the user, but not a failure.
    #[error("{0}")]
    EmptyResult(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// The empty state of an unfiltered or category-filtered listing
    pub fn no_expenses() -> Self {
        Self::EmptyResult("No Expense Found.".into())
    }

    /// The empty state of a monthly summary
    pub fn no_expenses_for_month() -> Self {
        Self::EmptyResult("No expenses found for this month.".into())
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if this is an empty result rather than a real failure
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::EmptyResult(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::InvalidInput("amount must be positive".into());
        assert_eq!(err.to_string(), "Invalid input: amount must be positive");
        assert!(err.is_validation());
    }

    #[test]
    fn test_not_found_error() {
        let err = ExpenseError::expense_not_found("7");
        assert_eq!(err.to_string(), "Expense not found (ID: 7)");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_no_budget_set_error() {
        let month = Month::new(5).unwrap();
        let err = ExpenseError::NoBudgetSet(month);
        assert_eq!(
            err.to_string(),
            "No budget set for month May. Use set-budget to set a budget first."
        );
    }

    #[test]
    fn test_empty_result_is_not_failure_kind() {
        let err = ExpenseError::no_expenses();
        assert!(err.is_empty_result());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "No Expense Found.");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExpenseError = io_err.into();
        assert!(matches!(err, ExpenseError::Io(_)));
    }
}
