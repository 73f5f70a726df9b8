//! Journal entries
//!
//! One entry per saved change. Expense changes carry the full record, so a
//! deleted expense can still be read back from the journal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Expense, Money, Month};

/// A change to the ledger or the budget register
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Change {
    ExpenseAdded {
        expense: Expense,
    },
    ExpenseDeleted {
        expense: Expense,
    },
    /// A month's limit was stored. `previous` is the limit it replaced.
    BudgetSet {
        month: Month,
        limit: Money,
        previous: Option<Money>,
    },
}

impl Change {
    /// One-line description of the change, amounts in `currency_symbol`
    pub fn describe(&self, currency_symbol: &str) -> String {
        match self {
            Change::ExpenseAdded { expense } => {
                format!("added {}", describe_expense(expense, currency_symbol))
            }
            Change::ExpenseDeleted { expense } => {
                format!("deleted {}", describe_expense(expense, currency_symbol))
            }
            Change::BudgetSet {
                month,
                limit,
                previous: None,
            } => format!(
                "budget for {} set to {}",
                month,
                limit.format_with_symbol(currency_symbol)
            ),
            Change::BudgetSet {
                month,
                limit,
                previous: Some(previous),
            } => format!(
                "budget for {} changed from {} to {}",
                month,
                previous.format_with_symbol(currency_symbol),
                limit.format_with_symbol(currency_symbol)
            ),
        }
    }
}

fn describe_expense(expense: &Expense, currency_symbol: &str) -> String {
    format!(
        "#{} {} {} ({}, {})",
        expense.id,
        expense.description,
        expense.amount.format_with_symbol(currency_symbol),
        expense.category,
        expense.date.format("%Y-%m-%d")
    )
}

/// A change and when it was saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub recorded_at: DateTime<Utc>,
    pub change: Change,
}

impl JournalEntry {
    /// Stamp a change with the current time
    pub fn now(change: Change) -> Self {
        Self {
            recorded_at: Utc::now(),
            change,
        }
    }
}
