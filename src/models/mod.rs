//! Core data models for the expense tracker
//!
//! Expense records, the ledger that holds them, and the per-month budget
//! register, plus the value types (money, month, IDs) they are built from.

pub mod expense;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod month;
pub mod register;

pub use expense::{Expense, ExpenseValidationError, NewExpense, DEFAULT_CATEGORY};
pub use ids::{ExpenseId, IdParseError};
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use month::{Month, MonthParseError};
pub use register::BudgetRegister;
