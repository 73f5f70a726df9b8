//! CLI command handlers
//!
//! Bridges the clap argument parsing with the service layer. Handlers are
//! generic over the [`Store`](crate::storage::Store) they run against.

pub mod budget;
pub mod expense;
pub mod export;
pub mod history;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::handle_export_csv;
pub use history::handle_history;
