//! Budget evaluation
//!
//! Compares a month's spending with the limit in the budget register. Months
//! without a limit are never reported; budgets are opt-in.

use std::fmt;

use crate::models::{BudgetRegister, Money, Month};

/// Spending above a month's limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overrun {
    pub month: Month,
    pub limit: Money,
    pub total: Money,
    /// `total - limit`, always positive
    pub excess: Money,
}

impl fmt::Display for Overrun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warning: You have exceeded the budget for month {} by {}",
            self.month, self.excess
        )
    }
}

/// Read-only view over a register that reports overruns
pub struct BudgetEvaluator<'a> {
    register: &'a BudgetRegister,
}

impl<'a> BudgetEvaluator<'a> {
    pub fn new(register: &'a BudgetRegister) -> Self {
        Self { register }
    }

    /// Report an overrun if `month` has a limit and `total` is strictly above it
    pub fn evaluate(&self, month: Month, total: Money) -> Option<Overrun> {
        let limit = self.register.get(month)?;

        (total > limit).then(|| Overrun {
            month,
            limit,
            total,
            excess: total - limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march() -> Month {
        Month::new(3).unwrap()
    }

    fn register_with(limit_cents: i64) -> BudgetRegister {
        let mut register = BudgetRegister::new();
        register.set(march(), Money::from_cents(limit_cents)).unwrap();
        register
    }

    #[test]
    fn test_no_limit_no_report() {
        let register = BudgetRegister::new();
        let evaluator = BudgetEvaluator::new(&register);
        assert_eq!(evaluator.evaluate(march(), Money::from_cents(1_000_000)), None);
    }

    #[test]
    fn test_overrun_reports_excess() {
        let register = register_with(10_000);
        let overrun = BudgetEvaluator::new(&register)
            .evaluate(march(), Money::from_cents(15_000))
            .unwrap();

        assert_eq!(overrun.excess, Money::from_cents(5_000));
        assert_eq!(overrun.limit, Money::from_cents(10_000));
        assert_eq!(
            overrun.to_string(),
            "Warning: You have exceeded the budget for month March by $50.00"
        );
    }

    #[test]
    fn test_exactly_at_limit_is_fine() {
        let register = register_with(10_000);
        let evaluator = BudgetEvaluator::new(&register);
        assert_eq!(evaluator.evaluate(march(), Money::from_cents(10_000)), None);
        assert_eq!(evaluator.evaluate(march(), Money::from_cents(9_999)), None);
        assert!(evaluator.evaluate(march(), Money::from_cents(10_001)).is_some());
    }

    #[test]
    fn test_other_month_unaffected() {
        let register = register_with(100);
        let evaluator = BudgetEvaluator::new(&register);
        assert_eq!(
            evaluator.evaluate(Month::new(4).unwrap(), Money::from_cents(50_000)),
            None
        );
    }
}
