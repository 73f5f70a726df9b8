//! Calendar month identifier
//!
//! Budgets are keyed by month of year (1-12) independent of the year, so a
//! budget for March applies to every March in the ledger.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A validated month of the year, 1 (January) through 12 (December)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Month(u8);

impl Month {
    /// Create a month, returning None outside 1..=12
    pub fn new(number: u32) -> Option<Self> {
        if (1..=12).contains(&number) {
            Some(Self(number as u8))
        } else {
            None
        }
    }

    /// The month a date falls in
    pub fn of(date: NaiveDate) -> Self {
        Self(date.month() as u8)
    }

    /// Iterate over all twelve months in calendar order
    pub fn all() -> impl Iterator<Item = Month> {
        (1..=12u8).map(Self)
    }

    /// Month number, 1-12
    pub fn number(&self) -> u32 {
        self.0 as u32
    }

    /// Zero-based position in the calendar
    pub fn index(&self) -> usize {
        self.0 as usize - 1
    }

    /// English month name
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.index()]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for Month {
    type Error = MonthParseError;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        Self::new(number).ok_or_else(|| MonthParseError(number.to_string()))
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> Self {
        month.number()
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u32>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| MonthParseError(trimmed.to_string()))
    }
}

/// A month index that is not a number between 1 and 12
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthParseError(pub String);

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a month index (1-12)", self.0)
    }
}

impl std::error::Error for MonthParseError {}
