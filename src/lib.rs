//! Expense Tracker - a personal expense ledger with monthly budgets
//!
//! Records expenses with a description, amount, category and date, lists and
//! totals them, and keeps one optional spending limit per calendar month.
//! A monthly summary warns when spending went over that month's limit.
//!
//! # Architecture
//!
//! - `models`: the ledger, the budget register and their value types
//! - `services`: one command at a time against a [`storage::Store`]
//! - `storage`: JSON documents on disk, or memory for tests
//! - `config`: path resolution and user settings
//! - `journal`: append-only record of every saved change
//! - `export`: CSV export
//! - `cli` and `display`: clap commands and terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::MemoryStore;
//!
//! let store = MemoryStore::new();
//! let service = ExpenseService::new(&store);
//! let expense = service.add("Coffee", "4.5", None, None)?;
//! assert_eq!(expense.id.value(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod journal;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
