//! Expense ledger
//!
//! The ordered collection of expenses for one invocation. Insertion order is
//! the display order and the persisted order; nothing here reorders records.
//! The ledger does no I/O. Services load it from a store, mutate it, and
//! write it back.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};

use super::expense::{Expense, NewExpense};
use super::ids::ExpenseId;
use super::money::Money;
use super::month::Month;

/// Ordered collection of expenses, persisted as a JSON array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from already-recorded expenses, keeping their order
    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// All expenses in stored order
    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    /// Look up an expense by ID
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// The ID the next added expense will receive
    ///
    /// One more than the highest ID present, or 1 for an empty ledger.
    /// Fails once the highest ID is `u32::MAX`.
    pub fn next_id(&self) -> ExpenseResult<ExpenseId> {
        match self.expenses.iter().map(|e| e.id).max() {
            None => Ok(ExpenseId::FIRST),
            Some(highest) => highest.next().ok_or_else(|| {
                ExpenseError::Storage(format!(
                    "No expense IDs left after {}; delete expense {} to free it",
                    highest, highest
                ))
            }),
        }
    }

    /// Append a new expense dated `date`
    pub fn add(&mut self, input: NewExpense, date: NaiveDate) -> ExpenseResult<&Expense> {
        let expense = Expense {
            id: self.next_id()?,
            description: input.description.trim().to_string(),
            amount: input.amount,
            category: input.category,
            date,
        };

        expense
            .validate()
            .map_err(|e| ExpenseError::InvalidInput(e.to_string()))?;

        self.expenses.push(expense);
        let index = self.expenses.len() - 1;
        Ok(&self.expenses[index])
    }

    /// Remove the expense with the given ID, returning it
    ///
    /// Leaves the ledger untouched when no expense matches.
    pub fn delete(&mut self, id: ExpenseId) -> ExpenseResult<Expense> {
        let position = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        Ok(self.expenses.remove(position))
    }

    /// Expenses in the given category (case-insensitive), or all expenses
    ///
    /// The returned iterator is lazy. An empty match is reported as
    /// `EmptyResult` instead of an empty iterator.
    pub fn list<'a>(
        &'a self,
        category: Option<&'a str>,
    ) -> ExpenseResult<impl Iterator<Item = &'a Expense> + 'a> {
        let mut matches = self
            .expenses
            .iter()
            .filter(move |e| category.map_or(true, |c| e.in_category(c)))
            .peekable();

        if matches.peek().is_none() {
            return Err(ExpenseError::no_expenses());
        }

        Ok(matches)
    }

    /// Expenses dated in the given calendar month, any year
    pub fn in_month(&self, month: Month) -> impl Iterator<Item = &Expense> + '_ {
        self.expenses.iter().filter(move |e| e.month() == month)
    }

    /// Sum of all expenses, or of those in one month
    ///
    /// A monthly sum of zero is reported as "no expenses for this month",
    /// the same as a month with no records.
    pub fn total(&self, month: Option<Month>) -> ExpenseResult<Money> {
        match month {
            Some(month) => {
                let total = sum_amounts(self.in_month(month))?;
                if total.is_zero() {
                    Err(ExpenseError::no_expenses_for_month())
                } else {
                    Ok(total)
                }
            }
            None if self.expenses.is_empty() => Err(ExpenseError::no_expenses()),
            None => sum_amounts(self.expenses.iter()),
        }
    }
}

fn sum_amounts<'a>(expenses: impl Iterator<Item = &'a Expense>) -> ExpenseResult<Money> {
    Money::checked_sum(expenses.map(|e| e.amount))
        .ok_or_else(|| ExpenseError::Storage("Total of stored expenses is too large".into()))
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
