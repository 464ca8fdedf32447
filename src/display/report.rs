//! Report display formatting
//!
//! Formats the dashboard summary, expense breakdown, history log and
//! projection for terminal output.

use crate::models::{format_currency, BudgetHistoryItem};
use crate::services::{BreakdownEntry, BudgetSummary, ProjectionPoint};

/// Format the dashboard figures
pub fn format_summary(summary: &BudgetSummary, symbol: &str) -> String {
    let money = |amount: f64| format_currency(amount, symbol);
    let mut output = String::new();

    output.push_str("Budget Overview\n");
    output.push_str("===============\n");
    output.push_str(&format!("  Total income:     {:>14}\n", money(summary.total_income)));
    output.push_str(&format!("  Total expenses:   {:>14}\n", money(summary.total_expenses)));
    output.push_str(&format!("  Net result:       {:>14}\n", money(summary.net_result)));
    output.push_str(&format!("  Reserved savings: {:>14}\n", money(summary.total_savings)));
    output.push('\n');
    output.push_str("Childcare Check\n");
    output.push_str(&format!("  Costs:            {:>14}\n", money(summary.childcare_expenses)));
    output.push_str(&format!("  Subsidies:        {:>14}\n", money(summary.childcare_income)));
    output.push_str(&format!("  Net own share:    {:>14}\n", money(summary.net_childcare_cost)));

    output
}

/// Format the expense breakdown with percentage shares
pub fn format_breakdown(entries: &[BreakdownEntry], symbol: &str) -> String {
    if entries.is_empty() {
        return "Add expenses to see the breakdown.\n".to_string();
    }

    let label_width = entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::from("Expense Breakdown\n");
    for entry in entries {
        output.push_str(&format!(
            "  {:<label_width$}  {:>14}  {:>5.1}%\n",
            entry.label,
            format_currency(entry.amount, symbol),
            entry.share * 100.0,
            label_width = label_width,
        ));
    }
    output
}

/// Format archived entries, newest first
pub fn format_history(entries: &[&BudgetHistoryItem], symbol: &str) -> String {
    if entries.is_empty() {
        return "No history entries found.\n".to_string();
    }

    let label_width = entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8}  {:<10}  {:<label_width$}  {:>14}  {:>14}  {:>14}  {:>14}\n",
        "ID",
        "Date",
        "Period",
        "Income",
        "Expenses",
        "Savings",
        "Net",
        label_width = label_width,
    ));
    output.push_str(&format!(
        "{:-<8}  {:-<10}  {:-<label_width$}  {:->14}  {:->14}  {:->14}  {:->14}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        label_width = label_width,
    ));

    for entry in entries.iter().rev() {
        output.push_str(&format!(
            "{:<8}  {:<10}  {:<label_width$}  {:>14}  {:>14}  {:>14}  {:>14}\n",
            entry.id.short(),
            entry.date.format("%Y-%m-%d").to_string(),
            entry.label,
            format_currency(entry.income, symbol),
            format_currency(entry.expenses, symbol),
            format_currency(entry.savings, symbol),
            format_currency(entry.net(), symbol),
            label_width = label_width,
        ));
    }

    output
}

/// Format projected months as a table
pub fn format_projection(points: &[ProjectionPoint], symbol: &str) -> String {
    if points.is_empty() {
        return "Nothing to project.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Projection (if the budget stays the same)\n");
    output.push_str(&format!(
        "{:<9}  {:>16}  {:>16}\n",
        "Month", "Cumulative net", "Cum. savings"
    ));
    output.push_str(&format!("{:-<9}  {:->16}  {:->16}\n", "", "", ""));

    for point in points {
        output.push_str(&format!(
            "{:<9}  {:>16}  {:>16}\n",
            point.label(),
            format_currency(point.cumulative_net, symbol),
            format_currency(point.cumulative_savings, symbol),
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::project;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_format_summary() {
        let summary = BudgetSummary {
            total_income: 5650.0,
            total_expenses: 3510.0,
            total_savings: 750.0,
            net_result: 2140.0,
            childcare_income: 950.0,
            childcare_expenses: 1200.0,
            net_childcare_cost: 250.0,
        };
        let out = format_summary(&summary, "€");

        assert!(out.contains("€ 5.650,00"));
        assert!(out.contains("€ 2.140,00"));
        assert!(out.contains("€ 250,00"));
    }

    #[test]
    fn test_format_history_newest_first() {
        let old = BudgetHistoryItem::dated(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            "januari 2024",
            100.0,
            40.0,
            0.0,
        );
        let new = BudgetHistoryItem::dated(
            Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
            "februari 2024",
            100.0,
            60.0,
            0.0,
        );
        let out = format_history(&[&old, &new], "€");

        let jan = out.find("januari 2024").unwrap();
        let feb = out.find("februari 2024").unwrap();
        assert!(feb < jan);
        assert!(out.contains("€ 60,00"));
    }

    #[test]
    fn test_format_projection() {
        let points: Vec<_> = project(100.0, 40.0, 10.0, 3).collect();
        let out = format_projection(&points, "€");

        assert!(out.contains("Maand 3"));
        assert!(out.contains("€ 180,00"));
        assert!(out.contains("€ 30,00"));
    }

    #[test]
    fn test_format_breakdown() {
        let entries = vec![BreakdownEntry {
            label: "Huur".into(),
            amount: 300.0,
            share: 0.75,
        }];
        let out = format_breakdown(&entries, "€");
        assert!(out.contains("75.0%"));
        assert!(format_breakdown(&[], "€").contains("Add expenses"));
    }
}
