//! CLI command for CSV export

use std::path::PathBuf;

use chrono::Local;

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseResult;
use crate::export::export_expenses_to_file;
use crate::services::ExpenseService;
use crate::storage::Store;

/// Export the whole ledger to CSV
///
/// Writes to `output` when given, otherwise to a dated file in the exports
/// directory.
pub fn handle_export_csv<S: Store + ?Sized>(
    store: &S,
    paths: &ExpensePaths,
    output: Option<PathBuf>,
) -> ExpenseResult<()> {
    let expenses = ExpenseService::new(store).list(None)?;
    let path = output.unwrap_or_else(|| paths.export_file(Local::now().date_naive()));

    export_expenses_to_file(&expenses, &path)?;
    println!("Expenses exported to {}", path.display());

    Ok(())
}
