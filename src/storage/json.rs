//! JSON file store
//!
//! Keeps the ledger in `expenses.json` and the budget in `budget.json`,
//! rewriting the whole document on every save.

use crate::journal::{JournalEntry, JournalFile};
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseResult;
use crate::models::{BudgetRegister, Ledger};

use super::file_io::{read_json, write_json_atomic};
use super::init::initialize_storage;
use super::Store;

/// File-backed [`Store`]
pub struct JsonStore {
    paths: ExpensePaths,
    journal: Option<JournalFile>,
}

impl JsonStore {
    /// Open the store, creating empty documents if they are missing
    pub fn open(paths: ExpensePaths) -> ExpenseResult<Self> {
        initialize_storage(&paths)?;

        Ok(Self {
            journal: Some(JournalFile::new(paths.journal_file())),
            paths,
        })
    }

    /// Stop journaling changes
    pub fn without_journal(mut self) -> Self {
        self.journal = None;
        self
    }

    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }
}

impl Store for JsonStore {
    fn load_ledger(&self) -> ExpenseResult<Ledger> {
        let ledger: Ledger = read_json(self.paths.expenses_file())?;
        tracing::debug!(expenses = ledger.len(), "loaded ledger");
        Ok(ledger)
    }

    fn save_ledger(&self, ledger: &Ledger) -> ExpenseResult<()> {
        write_json_atomic(self.paths.expenses_file(), ledger)?;
        tracing::debug!(expenses = ledger.len(), "saved ledger");
        Ok(())
    }

    fn load_register(&self) -> ExpenseResult<BudgetRegister> {
        let register: BudgetRegister = read_json(self.paths.budget_file())?;
        tracing::debug!(months = register.iter().count(), "loaded budget");
        Ok(register)
    }

    fn save_register(&self, register: &BudgetRegister) -> ExpenseResult<()> {
        write_json_atomic(self.paths.budget_file(), register)?;
        tracing::debug!(months = register.iter().count(), "saved budget");
        Ok(())
    }

    fn record(&self, entry: &JournalEntry) -> ExpenseResult<()> {
        match &self.journal {
            Some(journal) => journal.append(entry),
            None => Ok(()),
        }
    }

    fn history(&self, limit: usize) -> ExpenseResult<Vec<JournalEntry>> {
        match &self.journal {
            Some(journal) => journal.recent(limit),
            None => Ok(Vec::new()),
        }
    }
}
