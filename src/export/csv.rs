//! CSV Export functionality
//!
//! Writes all line items as `Type,Omschrijving,Bedrag` rows in the order
//! income, expenses, savings. Text cells are always quoted; amounts are
//! plain decimals with a `.` separator.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{format_plain, BudgetData, Category};

/// Header row of a budget export
pub const CSV_HEADER: &str = "Type,Omschrijving,Bedrag";

/// Render the budget items as CSV text (rows joined by `\n`, no trailing newline)
pub fn export_budget_csv(data: &BudgetData) -> String {
    let mut rows = Vec::with_capacity(data.item_count() + 1);
    rows.push(CSV_HEADER.to_string());

    for category in Category::ALL {
        for item in data.items(category) {
            rows.push(format!(
                "{},{},{}",
                quote_csv(category.csv_tag()),
                quote_csv(&item.label),
                format_plain(item.amount)
            ));
        }
    }

    rows.join("\n")
}

/// Write the budget CSV to any writer
pub fn write_budget_csv<W: Write>(data: &BudgetData, writer: &mut W) -> BudgetResult<()> {
    writer
        .write_all(export_budget_csv(data).as_bytes())
        .map_err(|e| BudgetError::Export(e.to_string()))
}

/// Date-stamped file name for an export, e.g. `gezinsbudget_export_2024-05-31.csv`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("gezinsbudget_export_{}.csv", date.format("%Y-%m-%d"))
}

/// Quote a text cell, doubling embedded quotes
fn quote_csv(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}
