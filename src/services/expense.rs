//! Expense service
//!
//! Runs one ledger command against a store: load, apply, and save when
//! something changed. Arguments arrive as raw strings and are validated
//! before anything is loaded.

use chrono::{Local, NaiveDate};

use crate::error::{ExpenseError, ExpenseResult};
use crate::journal::Change;
use crate::models::{Expense, Money, Month, NewExpense, DEFAULT_CATEGORY};
use crate::storage::Store;

use super::evaluator::{BudgetEvaluator, Overrun};
use super::input::{parse_amount, parse_id, parse_month};
use super::record_change;

/// Result of the summary command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// The month filter, if one was given
    pub month: Option<Month>,
    pub total: Money,
    /// Only ever present for a monthly summary
    pub overrun: Option<Overrun>,
}

/// Service for expense management
pub struct ExpenseService<'a, S: Store + ?Sized> {
    store: &'a S,
    default_category: String,
}

impl<'a, S: Store + ?Sized> ExpenseService<'a, S> {
    /// Create a new expense service
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            default_category: DEFAULT_CATEGORY.to_string(),
        }
    }

    /// Use a different category for expenses added without one
    pub fn with_default_category(mut self, category: impl Into<String>) -> Self {
        self.default_category = category.into();
        self
    }

    /// Record a new expense
    ///
    /// `date` defaults to today on the local clock.
    pub fn add(
        &self,
        description: &str,
        amount: &str,
        category: Option<&str>,
        date: Option<NaiveDate>,
    ) -> ExpenseResult<Expense> {
        if description.trim().is_empty() {
            return Err(ExpenseError::InvalidInput(
                "Please provide a description".into(),
            ));
        }
        let amount = parse_amount(amount)?;
        let input = NewExpense::new(description, amount)
            .with_category(self.default_category.as_str())
            .with_category(category.unwrap_or_default());
        let date = date.unwrap_or_else(|| Local::now().date_naive());

        let mut ledger = self.store.load_ledger()?;
        let expense = ledger.add(input, date)?.clone();
        self.store.save_ledger(&ledger)?;

        tracing::info!(id = %expense.id, amount = %expense.amount, "expense added");
        record_change(
            self.store,
            Change::ExpenseAdded {
                expense: expense.clone(),
            },
        );

        Ok(expense)
    }

    /// Delete an expense by ID, returning the removed record
    ///
    /// Nothing is written when the ID is unknown.
    pub fn delete(&self, id: &str) -> ExpenseResult<Expense> {
        let id = parse_id(id)?;

        let mut ledger = self.store.load_ledger()?;
        let removed = ledger.delete(id)?;
        self.store.save_ledger(&ledger)?;

        tracing::info!(id = %removed.id, "expense deleted");
        record_change(
            self.store,
            Change::ExpenseDeleted {
                expense: removed.clone(),
            },
        );

        Ok(removed)
    }

    /// Expenses in a category (case-insensitive), or all of them
    pub fn list(&self, category: Option<&str>) -> ExpenseResult<Vec<Expense>> {
        let ledger = self.store.load_ledger()?;
        let category = category.map(str::trim).filter(|c| !c.is_empty());
        let expenses = ledger.list(category)?.cloned().collect();
        Ok(expenses)
    }

    /// Total spending, overall or for one month
    ///
    /// A monthly total is checked against that month's budget.
    pub fn summary(&self, month: Option<&str>) -> ExpenseResult<Summary> {
        let month = month.map(parse_month).transpose()?;

        let ledger = self.store.load_ledger()?;
        let total = ledger.total(month)?;

        let overrun = match month {
            Some(month) => {
                let register = self.store.load_register()?;
                BudgetEvaluator::new(&register).evaluate(month, total)
            }
            None => None,
        };

        if let Some(overrun) = &overrun {
            tracing::info!(month = %overrun.month, excess = %overrun.excess, "budget exceeded");
        }

        Ok(Summary {
            month,
            total,
            overrun,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetRegister, ExpenseId, Ledger};
    use crate::storage::MemoryStore;

    use crate::services::testing::BrokenJournal;

    fn day(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_add_first_expense() {
        let store = MemoryStore::new();
        let service = ExpenseService::new(&store);

        let expense = service.add("Coffee", "4.5", None, None).unwrap();
        assert_eq!(expense.id, ExpenseId::FIRST);
        assert_eq!(expense.category, "General");
        assert_eq!(expense.date, Local::now().date_naive());
        assert_eq!(store.ledger_writes(), 1);

        let summary = service.summary(None).unwrap();
        assert_eq!(summary.total.format_plain(), "4.50");
        assert_eq!(summary.overrun, None);
    }

    #[test]
    fn test_add_invalid_input_writes_nothing() {
        let store = MemoryStore::new();
        let service = ExpenseService::new(&store);

        assert!(service.add("", "4", None, None).unwrap_err().is_validation());
        assert!(service.add("Tea", "abc", None, None).unwrap_err().is_validation());
        assert!(service.add("Tea", "0", None, None).unwrap_err().is_validation());
        assert!(service.add("Tea", "-1", None, None).unwrap_err().is_validation());

        assert_eq!(store.ledger_writes(), 0);
        assert!(store.history(10).unwrap().is_empty());
    }

    #[test]
    fn test_configured_default_category() {
        let store = MemoryStore::new();
        let service = ExpenseService::new(&store).with_default_category("Misc");

        let plain = service.add("Stamps", "2", None, None).unwrap();
        assert_eq!(plain.category, "Misc");

        let tagged = service.add("Lunch", "9", Some("Food"), None).unwrap();
        assert_eq!(tagged.category, "Food");
    }

    #[test]
    fn test_delete_scenario() {
        let store = MemoryStore::new();
        let service = ExpenseService::new(&store);
        service.add("Coffee", "4.5", None, None).unwrap();
        service.add("Bagel", "3", None, None).unwrap();

        let removed = service.delete("1").unwrap();
        assert_eq!(removed.description, "Coffee");

        let remaining = service.list(None).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].description, "Bagel");

        let writes = store.ledger_writes();
        let err = service.delete("1").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.ledger_writes(), writes);
    }

    #[test]
    fn test_delete_rejects_bad_id() {
        let store = MemoryStore::new();
        let service = ExpenseService::new(&store);

        assert!(service.delete("0").unwrap_err().is_validation());
        assert!(service.delete("-4").unwrap_err().is_validation());
        assert!(service.delete("one").unwrap_err().is_validation());
    }

    #[test]
    fn test_list_by_category() {
        let store = MemoryStore::new();
        let service = ExpenseService::new(&store);
        service.add("Lunch", "12", Some("Food"), None).unwrap();
        service.add("Bus", "2.5", Some("Transport"), None).unwrap();

        let food = service.list(Some("FOOD")).unwrap();
        assert_eq!(food.len(), 1);
        assert_eq!(food[0].description, "Lunch");

        let err = service.list(Some("Rent")).unwrap_err();
        assert!(err.is_empty_result());
        assert_eq!(err.to_string(), "No Expense Found.");
    }

    #[test]
    fn test_monthly_summary_with_overrun() {
        let mut register = BudgetRegister::new();
        register
            .set(Month::new(3).unwrap(), Money::from_cents(10_000))
            .unwrap();
        let store = MemoryStore::with_data(Ledger::new(), register);
        let service = ExpenseService::new(&store);

        service
            .add("Concert", "150", Some("Fun"), day(2024, 3, 15))
            .unwrap();
        service.add("Snack", "20", None, day(2024, 4, 1)).unwrap();

        let summary = service.summary(Some("3")).unwrap();
        assert_eq!(summary.total.format_plain(), "150.00");
        let overrun = summary.overrun.unwrap();
        assert_eq!(overrun.excess.format_plain(), "50.00");

        let april = service.summary(Some("4")).unwrap();
        assert_eq!(april.overrun, None);
    }

    #[test]
    fn test_summary_of_empty_month() {
        let store = MemoryStore::new();
        let service = ExpenseService::new(&store);
        service.add("Snack", "20", None, day(2024, 4, 1)).unwrap();

        let err = service.summary(Some("5")).unwrap_err();
        assert!(err.is_empty_result());
        assert!(service.summary(Some("13")).unwrap_err().is_validation());
    }

    #[test]
    fn test_changes_are_journaled() {
        let store = MemoryStore::new();
        let service = ExpenseService::new(&store);
        let added = service.add("Coffee", "4.5", None, None).unwrap();
        service.delete("1").unwrap();

        let history: Vec<Change> = store
            .history(10)
            .unwrap()
            .into_iter()
            .map(|e| e.change)
            .collect();
        assert_eq!(
            history,
            vec![
                Change::ExpenseAdded {
                    expense: added.clone()
                },
                Change::ExpenseDeleted { expense: added },
            ]
        );
    }

    #[test]
    fn test_journal_failure_keeps_saved_change() {
        let store = BrokenJournal::default();
        let service = ExpenseService::new(&store);

        let expense = service.add("Coffee", "4.5", None, None).unwrap();
        assert_eq!(expense.id, ExpenseId::FIRST);
        assert_eq!(store.0.ledger_writes(), 1);
        assert_eq!(store.0.load_ledger().unwrap().len(), 1);

        service.delete("1").unwrap();
        assert!(store.0.load_ledger().unwrap().is_empty());
    }

    #[test]
    fn test_add_rejects_amounts_beyond_max() {
        let store = MemoryStore::new();
        let service = ExpenseService::new(&store);

        assert!(service
            .add("a", "90000000000000000", None, None)
            .unwrap_err()
            .is_validation());
        assert!(service
            .add("a", "100000000000000.01", None, None)
            .unwrap_err()
            .is_validation());
        assert_eq!(store.ledger_writes(), 0);
    }

    #[test]
    fn test_summary_total_overflow_is_an_error() {
        let expenses = (1..=10_000)
            .map(|id| Expense {
                id: ExpenseId::new(id).unwrap(),
                description: "max".into(),
                amount: Money::MAX,
                category: "General".into(),
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            })
            .collect();
        let store = MemoryStore::with_data(Ledger::from_expenses(expenses), BudgetRegister::new());
        let service = ExpenseService::new(&store);

        assert!(matches!(service.summary(None), Err(ExpenseError::Storage(_))));
        assert!(matches!(service.summary(Some("3")), Err(ExpenseError::Storage(_))));
    }
}
