//! Budget service
//!
//! Sets and edits monthly spending limits in the budget register.

use crate::error::ExpenseResult;
use crate::journal::Change;
use crate::models::{Money, Month};
use crate::storage::Store;

use super::input::{parse_amount, parse_month};
use super::record_change;

/// A limit that was just stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetChange {
    pub month: Month,
    pub limit: Money,
    /// The limit it replaced, if the month already had one
    pub previous: Option<Money>,
}

/// Service for budget management
pub struct BudgetService<'a, S: Store + ?Sized> {
    store: &'a S,
}

impl<'a, S: Store + ?Sized> BudgetService<'a, S> {
    /// Create a new budget service
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Set the limit for a month, replacing any existing one
    pub fn set(&self, month: &str, amount: &str) -> ExpenseResult<BudgetChange> {
        let month = parse_month(month)?;
        let limit = parse_amount(amount)?;

        let mut register = self.store.load_register()?;
        let previous = register.set(month, limit)?;
        self.store.save_register(&register)?;

        let change = BudgetChange {
            month,
            limit,
            previous,
        };
        self.stored(change);
        Ok(change)
    }

    /// Change the limit for a month that already has one
    ///
    /// Fails with `NoBudgetSet` and writes nothing when the month has no limit.
    pub fn edit(&self, month: &str, amount: &str) -> ExpenseResult<BudgetChange> {
        let month = parse_month(month)?;
        let limit = parse_amount(amount)?;

        let mut register = self.store.load_register()?;
        let previous = register.edit(month, limit)?;
        self.store.save_register(&register)?;

        let change = BudgetChange {
            month,
            limit,
            previous: Some(previous),
        };
        self.stored(change);
        Ok(change)
    }

    /// Limit for a month, if set
    pub fn get(&self, month: &str) -> ExpenseResult<Option<Money>> {
        let month = parse_month(month)?;
        Ok(self.store.load_register()?.get(month))
    }

    /// All months with a limit, in calendar order
    pub fn list(&self) -> ExpenseResult<Vec<(Month, Money)>> {
        Ok(self.store.load_register()?.iter().collect())
    }

    fn stored(&self, change: BudgetChange) {
        tracing::info!(month = %change.month, limit = %change.limit, "budget stored");
        record_change(
            self.store,
            Change::BudgetSet {
                month: change.month,
                limit: change.limit,
                previous: change.previous,
            },
        );
    }
}
