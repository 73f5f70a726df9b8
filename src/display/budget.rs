//! Budget display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{Money, Month};

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "#")]
    number: u32,
    #[tabled(rename = "Month")]
    month: &'static str,
    #[tabled(rename = "Limit")]
    limit: String,
}

/// Format monthly limits as a table
pub fn format_budget_table(limits: &[(Month, Money)], currency_symbol: &str) -> String {
    if limits.is_empty() {
        return "No budgets set.".to_string();
    }

    let rows = limits.iter().map(|(month, limit)| BudgetRow {
        number: month.number(),
        month: month.name(),
        limit: limit.format_with_symbol(currency_symbol),
    });

    Table::new(rows)
        .with(Style::psql())
        .modify(Columns::single(2), Alignment::right())
        .to_string()
}
