//! Journal display formatting

use chrono::Local;

use crate::journal::JournalEntry;

/// Format journal entries one per line, in local time
pub fn format_history(entries: &[JournalEntry], currency_symbol: &str) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{}  {}",
                entry.recorded_at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S"),
                entry.change.describe(currency_symbol)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
