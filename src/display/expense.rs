//! Expense display formatting
//!
//! Tables for the ledger listing and the lines printed by `summary`.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Expense;
use crate::services::Summary;

const DESCRIPTION_WIDTH: usize = 30;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, currency_symbol: &str) -> Self {
        Self {
            id: expense.id.to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            description: truncate(&expense.description, DESCRIPTION_WIDTH),
            amount: expense.amount.format_with_symbol(currency_symbol),
            category: expense.category.clone(),
        }
    }
}

/// Format expenses as a table, in the order given
pub fn format_expense_table(expenses: &[Expense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No Expense Found.".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow::new(e, currency_symbol));
    Table::new(rows)
        .with(Style::psql())
        .modify(Columns::single(3), Alignment::right())
        .to_string()
}

/// Format the output of the summary command
///
/// The overrun warning, if any, is on its own final line.
pub fn format_summary(summary: &Summary, currency_symbol: &str) -> String {
    let total = summary.total.format_with_symbol(currency_symbol);

    let mut output = match summary.month {
        Some(month) => format!("Total expenses for {}: {}", month, total),
        None => format!("Total expenses: {}", total),
    };

    if let Some(overrun) = &summary.overrun {
        output.push_str(&format!(
            "\nWarning: You have exceeded the budget for month {} by {}",
            overrun.month,
            overrun.excess.format_with_symbol(currency_symbol)
        ));
    }

    output
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money, Month};
    use crate::services::Overrun;
    use chrono::NaiveDate;

    fn expense(id: u32, description: &str, cents: i64) -> Expense {
        Expense {
            id: ExpenseId::new(id).unwrap(),
            description: description.into(),
            amount: Money::from_cents(cents),
            category: "General".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
        }
    }

    #[test]
    fn test_table_contains_rows() {
        let table = format_expense_table(
            &[expense(1, "Coffee", 450), expense(2, "Rent", 120_000)],
            "$",
        );

        assert!(table.contains("Description"));
        assert!(table.contains("Coffee"));
        assert!(table.contains("$4.50"));
        assert!(table.contains("$1200.00"));
        assert!(table.find("Coffee").unwrap() < table.find("Rent").unwrap());
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[], "$"), "No Expense Found.");
    }

    #[test]
    fn test_long_description_truncated() {
        let long = "a".repeat(50);
        let table = format_expense_table(&[expense(1, &long, 100)], "$");
        assert!(!table.contains(&long));
        assert!(table.contains("..."));
    }

    #[test]
    fn test_summary_lines() {
        let march = Month::new(3).unwrap();
        let summary = Summary {
            month: Some(march),
            total: Money::from_cents(15_000),
            overrun: Some(Overrun {
                month: march,
                limit: Money::from_cents(10_000),
                total: Money::from_cents(15_000),
                excess: Money::from_cents(5_000),
            }),
        };

        assert_eq!(
            format_summary(&summary, "$"),
            "Total expenses for March: $150.00\n\
             Warning: You have exceeded the budget for month March by $50.00"
        );

        let overall = Summary {
            month: None,
            total: Money::from_cents(450),
            overrun: None,
        };
        assert_eq!(format_summary(&overall, "€"), "Total expenses: €4.50");
    }
}
