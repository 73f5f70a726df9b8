//! Expense CLI commands
//!
//! Implements the ledger commands: add, delete, list and summary.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_table, format_summary};
use crate::error::ExpenseResult;
use crate::services::ExpenseService;
use crate::storage::Store;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount (e.g., "4.5" or "4.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (defaults to the configured default category)
        category: Option<String>,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Delete an expense by ID
    Delete {
        /// Expense ID
        #[arg(long, allow_hyphen_values = true)]
        id: String,
    },

    /// List expenses, optionally only one category
    #[command(alias = "ls")]
    List {
        /// Category name (case-insensitive)
        category: Option<String>,
    },

    /// Show total spending, overall or for one month
    Summary {
        /// Month number (1-12)
        #[arg(short, long, allow_hyphen_values = true)]
        month: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command<S: Store + ?Sized>(
    store: &S,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(store).with_default_category(&settings.default_category);

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
            date,
        } => {
            let expense = service.add(&description, &amount, category.as_deref(), date)?;
            println!("Expense added successfully (ID: {})", expense.id);
        }

        ExpenseCommands::Delete { id } => {
            let removed = service.delete(&id)?;
            println!("Expense deleted successfully (ID: {})", removed.id);
        }

        ExpenseCommands::List { category } => {
            let expenses = service.list(category.as_deref())?;
            println!(
                "{}",
                format_expense_table(&expenses, &settings.currency_symbol)
            );
        }

        ExpenseCommands::Summary { month } => {
            let summary = service.summary(month.as_deref())?;
            println!("{}", format_summary(&summary, &settings.currency_symbol));
        }
    }

    Ok(())
}
