//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage port,
//! handling argument validation, persistence and journaling.

pub mod budget;
pub mod evaluator;
pub mod expense;
pub mod input;

pub use budget::{BudgetChange, BudgetService};
pub use evaluator::{BudgetEvaluator, Overrun};
pub use expense::{ExpenseService, Summary};

use crate::journal::{Change, JournalEntry};
use crate::storage::Store;

/// Journal a change that has already been saved
///
/// The change stands even if the journal cannot be written, so a failure is
/// logged instead of returned.
fn record_change<S: Store + ?Sized>(store: &S, change: Change) {
    if let Err(e) = store.record(&JournalEntry::now(change)) {
        tracing::warn!(error = %e, "change saved but not journaled");
    }
}
