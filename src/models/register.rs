//! Budget register
//!
//! Spending limits keyed by month of year. A month without an entry has no
//! limit at all, which is different from a limit of zero.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

use crate::error::{ExpenseError, ExpenseResult};

use super::money::Money;
use super::month::Month;

/// Per-month budget limits
///
/// Persisted as a JSON object from month number ("1".."12") to amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, Money>")]
pub struct BudgetRegister {
    limits: [Option<Money>; 12],
}

impl BudgetRegister {
    /// Create a register with no limits set
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit for a month, if one is set
    pub fn get(&self, month: Month) -> Option<Money> {
        self.limits[month.index()]
    }

    /// Set or replace the limit for a month
    ///
    /// Returns the previous limit, if any.
    pub fn set(&mut self, month: Month, amount: Money) -> ExpenseResult<Option<Money>> {
        validate_limit(amount)?;
        Ok(self.limits[month.index()].replace(amount))
    }

    /// Replace an existing limit
    ///
    /// Fails with `NoBudgetSet` when the month has no limit yet; the register
    /// is left unchanged in that case. Returns the previous limit.
    pub fn edit(&mut self, month: Month, amount: Money) -> ExpenseResult<Money> {
        validate_limit(amount)?;
        let previous = self.get(month).ok_or(ExpenseError::NoBudgetSet(month))?;
        self.limits[month.index()] = Some(amount);
        Ok(previous)
    }

    /// Months that have a limit, in calendar order
    pub fn iter(&self) -> impl Iterator<Item = (Month, Money)> + '_ {
        Month::all().filter_map(move |m| self.get(m).map(|limit| (m, limit)))
    }

    pub fn is_empty(&self) -> bool {
        self.limits.iter().all(Option::is_none)
    }
}

fn validate_limit(amount: Money) -> ExpenseResult<()> {
    if !amount.is_positive() {
        return Err(ExpenseError::InvalidInput(format!(
            "Budget amount must be positive, got {}",
            amount
        )));
    }
    if !amount.in_range() {
        return Err(ExpenseError::InvalidInput(format!(
            "Budget amount {} is above the maximum of {}",
            amount,
            Money::MAX
        )));
    }
    Ok(())
}

impl Serialize for BudgetRegister {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries: Vec<_> = self.iter().collect();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (month, limit) in entries {
            map.serialize_entry(&month.number().to_string(), &limit)?;
        }
        map.end()
    }
}

impl TryFrom<BTreeMap<String, Money>> for BudgetRegister {
    type Error = String;

    fn try_from(raw: BTreeMap<String, Money>) -> Result<Self, Self::Error> {
        let mut register = Self::new();
        for (key, limit) in raw {
            let month: Month = key.parse().map_err(|e| format!("budget key: {}", e))?;
            register
                .set(month, limit)
                .map_err(|e| format!("budget for {}: {}", month, e))?;
        }
        Ok(register)
    }
}
