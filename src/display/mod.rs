//! Display formatting for terminal output

pub mod budget;
pub mod expense;
pub mod history;

pub use budget::format_budget_table;
pub use expense::{format_expense_table, format_summary};
pub use history::format_history;
