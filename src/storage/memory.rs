//! In-memory store
//!
//! Holds the ledger, register and journal behind `RwLock`s and counts
//! writes, so tests can check that a failed operation saved nothing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::journal::JournalEntry;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{BudgetRegister, Ledger};

use super::Store;

/// [`Store`] that never touches disk
#[derive(Default)]
pub struct MemoryStore {
    ledger: RwLock<Ledger>,
    register: RwLock<BudgetRegister>,
    journal: RwLock<Vec<JournalEntry>>,
    ledger_writes: AtomicUsize,
    register_writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing ledger and register
    pub fn with_data(ledger: Ledger, register: BudgetRegister) -> Self {
        Self {
            ledger: RwLock::new(ledger),
            register: RwLock::new(register),
            ..Self::default()
        }
    }

    /// Number of times the ledger has been saved
    pub fn ledger_writes(&self) -> usize {
        self.ledger_writes.load(Ordering::SeqCst)
    }

    /// Number of times the register has been saved
    pub fn register_writes(&self) -> usize {
        self.register_writes.load(Ordering::SeqCst)
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> ExpenseError {
    ExpenseError::Storage(format!("Failed to acquire lock: {}", e))
}

impl Store for MemoryStore {
    fn load_ledger(&self) -> ExpenseResult<Ledger> {
        Ok(self.ledger.read().map_err(poisoned)?.clone())
    }

    fn save_ledger(&self, ledger: &Ledger) -> ExpenseResult<()> {
        *self.ledger.write().map_err(poisoned)? = ledger.clone();
        self.ledger_writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn load_register(&self) -> ExpenseResult<BudgetRegister> {
        Ok(self.register.read().map_err(poisoned)?.clone())
    }

    fn save_register(&self, register: &BudgetRegister) -> ExpenseResult<()> {
        *self.register.write().map_err(poisoned)? = register.clone();
        self.register_writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn record(&self, entry: &JournalEntry) -> ExpenseResult<()> {
        self.journal.write().map_err(poisoned)?.push(entry.clone());
        Ok(())
    }

    fn history(&self, limit: usize) -> ExpenseResult<Vec<JournalEntry>> {
        let journal = self.journal.read().map_err(poisoned)?;
        let start = journal.len().saturating_sub(limit);
        Ok(journal[start..].to_vec())
    }
}
