//! Storage layer for the expense tracker
//!
//! Services talk to persistence through the [`Store`] trait: a full load at
//! the start of a command and a full save after a mutation. [`JsonStore`] is
//! the on-disk implementation; [`MemoryStore`] keeps everything in memory for
//! tests.
//!
//! There is no file locking. Two invocations running at the same time can
//! overwrite each other's changes (last writer wins).

pub mod file_io;
pub mod init;
pub mod json;
pub mod memory;

pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use json::JsonStore;
pub use memory::MemoryStore;

use crate::journal::JournalEntry;
use crate::error::ExpenseResult;
use crate::models::{BudgetRegister, Ledger};

/// Persistence port for the ledger and the budget register
pub trait Store {
    /// Load the full ledger
    fn load_ledger(&self) -> ExpenseResult<Ledger>;

    /// Replace the stored ledger
    fn save_ledger(&self, ledger: &Ledger) -> ExpenseResult<()>;

    /// Load the full budget register
    fn load_register(&self) -> ExpenseResult<BudgetRegister>;

    /// Replace the stored budget register
    fn save_register(&self, register: &BudgetRegister) -> ExpenseResult<()>;

    /// Journal a saved change. Stores without a journal ignore it.
    fn record(&self, _entry: &JournalEntry) -> ExpenseResult<()> {
        Ok(())
    }

    /// Most recent journal entries, oldest first
    fn history(&self, _limit: usize) -> ExpenseResult<Vec<JournalEntry>> {
        Ok(Vec::new())
    }
}
