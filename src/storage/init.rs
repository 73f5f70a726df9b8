//! Storage initialization
//!
//! Creates the data directory and empty documents on first run: `[]` for
//! the ledger and `{}` for the budget register.

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::{BudgetRegister, Ledger};

use super::file_io::write_json_atomic;

/// Create any missing directories and documents
///
/// Existing documents are left untouched.
pub fn initialize_storage(paths: &ExpensePaths) -> Result<(), ExpenseError> {
    paths.ensure_directories()?;

    if !paths.expenses_file().exists() {
        tracing::debug!(path = %paths.expenses_file().display(), "creating empty ledger");
        write_json_atomic(paths.expenses_file(), &Ledger::new())?;
    }

    if !paths.budget_file().exists() {
        tracing::debug!(path = %paths.budget_file().display(), "creating empty budget");
        write_json_atomic(paths.budget_file(), &BudgetRegister::new())?;
    }

    Ok(())
}
