use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_budget_command, handle_expense_command, handle_export_csv, handle_history,
    BudgetCommands, ExpenseCommands,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::storage::JsonStore;
use expense_tracker::ExpenseError;

/// Environment variable holding the tracing filter
const LOG_ENV: &str = "EXPENSE_TRACKER_LOG";

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense ledger with monthly budgets",
    long_about = "Record expenses, list and total them by category or month, \
                  and get warned when a month goes over its budget."
)]
struct Cli {
    /// Directory holding the ledger, budget and settings
    #[arg(long, global = true, env = "EXPENSE_TRACKER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    #[command(flatten)]
    Budget(BudgetCommands),

    /// Export all expenses to a CSV file
    ExportCsv {
        /// Output file path (defaults to a dated file in the exports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show recent changes from the journal
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> ExitCode {
    init_tracing();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<ExpenseError>() {
            Some(e) if e.is_empty_result() => {
                println!("{}", e);
                ExitCode::SUCCESS
            }
            _ => {
                eprintln!("Error: {:#}", err);
                ExitCode::FAILURE
            }
        },
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let paths = ExpensePaths::resolve(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;

    let store = JsonStore::open(paths.clone())?;
    let store = if settings.journal_enabled {
        store
    } else {
        store.without_journal()
    };

    match cli.command {
        Some(Commands::Expense(cmd)) => handle_expense_command(&store, &settings, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&store, &settings, cmd)?,
        Some(Commands::ExportCsv { output }) => handle_export_csv(&store, &paths, output)?,
        Some(Commands::History { limit }) => handle_history(&store, &settings, limit)?,
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Expenses file:    {}", paths.expenses_file().display());
            println!("Budget file:      {}", paths.budget_file().display());
            println!("Exports directory: {}", paths.exports_dir().display());
            println!("Journal:          {}", paths.journal_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Default category: {}", settings.default_category);
            println!("  Journal enabled:  {}", settings.journal_enabled);
        }
        None => {
            println!("Expense Tracker - personal expenses and monthly budgets");
            println!();
            println!("Run 'expense --help' for usage information.");
        }
    }

    Ok(())
}
