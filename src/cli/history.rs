//! CLI command for the change journal

use crate::config::settings::Settings;
use crate::display::format_history;
use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::Store;

/// Print the most recent journal entries, oldest first
pub fn handle_history<S: Store + ?Sized>(
    store: &S,
    settings: &Settings,
    limit: usize,
) -> ExpenseResult<()> {
    let entries = store.history(limit)?;
    if entries.is_empty() {
        return Err(ExpenseError::EmptyResult("No history recorded.".into()));
    }

    println!("{}", format_history(&entries, &settings.currency_symbol));
    Ok(())
}
