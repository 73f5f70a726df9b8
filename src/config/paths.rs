//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` flag or `EXPENSE_TRACKER_DATA_DIR` environment variable
//! 2. The platform config directory from `directories`
//!    (`~/.config/expense-tracker` on Linux)

use chrono::NaiveDate;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::error::ExpenseError;

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Base directory for all expense tracker data
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Resolve paths, preferring an explicit base directory when given
    ///
    /// # Errors
    ///
    /// Returns an error if there is no explicit directory and no home
    /// directory can be determined.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, ExpenseError> {
        let base_dir = match explicit {
            Some(dir) => dir,
            None => ProjectDirs::from("", "", "expense-tracker")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    ExpenseError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the export directory (<base>/exports/)
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the change journal
    pub fn journal_file(&self) -> PathBuf {
        self.base_dir.join("journal.jsonl")
    }

    /// Get the path to expenses.json (the ledger)
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Get the path to budget.json (monthly limits)
    pub fn budget_file(&self) -> PathBuf {
        self.data_dir().join("budget.json")
    }

    /// Default CSV export path for a given day
    pub fn export_file(&self, date: NaiveDate) -> PathBuf {
        self.exports_dir()
            .join(format!("Expenses_{}.csv", date.format("%Y-%m-%d")))
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ExpenseError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}
