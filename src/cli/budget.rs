//! Budget CLI commands
//!
//! Sets, edits and lists monthly spending limits.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_budget_table;
use crate::error::ExpenseResult;
use crate::services::BudgetService;
use crate::storage::Store;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the spending limit for a month
    SetBudget {
        /// Month number (1-12)
        #[arg(short, long, allow_hyphen_values = true)]
        month: String,
        /// Limit (e.g., "100" or "100.00")
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
    },

    /// Change the limit of a month that already has one
    EditBudget {
        /// Month number (1-12)
        #[arg(short, long, allow_hyphen_values = true)]
        month: String,
        /// New limit
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
    },

    /// Show every month that has a limit
    Budgets,
}

/// Handle a budget command
pub fn handle_budget_command<S: Store + ?Sized>(
    store: &S,
    settings: &Settings,
    cmd: BudgetCommands,
) -> ExpenseResult<()> {
    let service = BudgetService::new(store);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::SetBudget { month, amount } => {
            let change = service.set(&month, &amount)?;
            println!(
                "Budget set for month {}: {}",
                change.month,
                change.limit.format_with_symbol(symbol)
            );
        }

        BudgetCommands::EditBudget { month, amount } => {
            let change = service.edit(&month, &amount)?;
            println!(
                "Budget updated for month {}: {}",
                change.month,
                change.limit.format_with_symbol(symbol)
            );
        }

        BudgetCommands::Budgets => {
            let limits = service.list()?;
            println!("{}", format_budget_table(&limits, symbol));
        }
    }

    Ok(())
}
