//! Append-only journal file
//!
//! One JSON entry per line in `journal.jsonl`. Appends never rewrite
//! earlier entries, so the journal outlives any single ledger save.

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};

use super::entry::JournalEntry;

/// Journal stored at a fixed path
pub struct JournalFile {
    path: PathBuf,
}

impl JournalFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry, creating the file on first use
    pub fn append(&self, entry: &JournalEntry) -> ExpenseResult<()> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error("open", e))?;

        // single write so a line is never split between two appends
        file.write_all(&line).map_err(|e| self.io_error("write", e))?;
        Ok(())
    }

    /// The last `limit` entries, oldest first
    ///
    /// A missing file is an empty journal.
    pub fn recent(&self, limit: usize) -> ExpenseResult<Vec<JournalEntry>> {
        if limit == 0 || !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).map_err(|e| self.io_error("open", e))?;
        let stream =
            serde_json::Deserializer::from_reader(BufReader::new(file)).into_iter::<JournalEntry>();

        let mut window = VecDeque::with_capacity(limit);
        for entry in stream {
            let entry = entry.map_err(|e| {
                ExpenseError::Storage(format!(
                    "Corrupt journal {} (line {}): {}",
                    self.path.display(),
                    e.line(),
                    e
                ))
            })?;
            if window.len() == limit {
                window.pop_front();
            }
            window.push_back(entry);
        }

        Ok(window.into())
    }

    fn io_error(&self, action: &str, e: std::io::Error) -> ExpenseError {
        ExpenseError::Io(format!(
            "Failed to {} journal {}: {}",
            action,
            self.path.display(),
            e
        ))
    }
}
