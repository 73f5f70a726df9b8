//! Change journal
//!
//! Every saved expense or budget change is appended to `journal.jsonl`,
//! and the `history` command reads it back.

mod entry;
mod file;

pub use entry::{Change, JournalEntry};
pub use file::JournalFile;
