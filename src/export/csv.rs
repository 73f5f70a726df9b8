//! CSV export of the ledger
//!
//! One row per expense in stored order under an
//! `ID,Date,Description,Amount,Category` header. Fields containing commas
//! or quotes are quoted by the `csv` writer.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Header row of an expense export
pub const CSV_HEADER: [&str; 5] = ["ID", "Date", "Description", "Amount", "Category"];

/// Write expenses as CSV to any writer
pub fn export_expenses_csv<'a, W, I>(expenses: I, writer: W) -> ExpenseResult<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Expense>,
{
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADER)?;

    let mut rows = 0;
    for expense in expenses {
        csv.write_record([
            expense.id.to_string(),
            expense.date.format("%Y-%m-%d").to_string(),
            expense.description.clone(),
            expense.amount.format_plain(),
            expense.category.clone(),
        ])?;
        rows += 1;
    }

    csv.flush()
        .map_err(|e| ExpenseError::Export(format!("Failed to flush CSV: {}", e)))?;
    Ok(rows)
}

/// Write expenses to a CSV file, creating its directory if needed
///
/// Returns the number of rows written, excluding the header.
pub fn export_expenses_to_file(expenses: &[Expense], path: &Path) -> ExpenseResult<usize> {
    if expenses.is_empty() {
        return Err(ExpenseError::no_expenses());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ExpenseError::Export(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;

    let rows = export_expenses_csv(expenses, BufWriter::new(file))?;
    tracing::info!(rows, path = %path.display(), "exported expenses");
    Ok(rows)
}
