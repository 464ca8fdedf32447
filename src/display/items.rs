//! Item display formatting
//!
//! Formats a category's line items as a table with a total row.

use crate::models::{format_currency, BudgetItem, Category};
use crate::services::summary::sum_amounts;

/// Format the items of one category as a table
pub fn format_item_list(category: Category, items: &[BudgetItem], symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", category.title()));

    if items.is_empty() {
        output.push_str("  No items.\n");
        return output;
    }

    let label_width = items
        .iter()
        .map(|item| item.label.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    output.push_str(&format!(
        "  {:<8}  {:<label_width$}  {:>14}\n",
        "ID",
        "Label",
        "Amount",
        label_width = label_width,
    ));
    output.push_str(&format!(
        "  {:-<8}  {:-<label_width$}  {:->14}\n",
        "",
        "",
        "",
        label_width = label_width,
    ));

    for item in items {
        output.push_str(&format!(
            "  {:<8}  {:<label_width$}  {:>14}\n",
            item.id.short(),
            item.label,
            format_currency(item.amount, symbol),
            label_width = label_width,
        ));
    }

    output.push_str(&format!(
        "  {:<8}  {:<label_width$}  {:>14}\n",
        "",
        "TOTAL",
        format_currency(sum_amounts(items), symbol),
        label_width = label_width,
    ));

    output
}
