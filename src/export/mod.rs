//! Export module for the expense tracker
//!
//! CSV export of the full ledger for spreadsheets.

pub mod csv;

pub use self::csv::{export_expenses_csv, export_expenses_to_file, CSV_HEADER};
