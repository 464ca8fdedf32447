//! Archived monthly snapshots
//!
//! A history entry freezes the three category totals at the moment the user
//! archives a month. The underlying items are not kept.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::ids::HistoryId;

/// Immutable rollup of category totals tagged with a period name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetHistoryItem {
    /// Unique identifier
    pub id: HistoryId,

    /// Creation instant (ISO-8601 on disk)
    pub date: DateTime<Utc>,

    /// User supplied period name, e.g. "mei 2024"
    pub label: String,

    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
}

impl BudgetHistoryItem {
    /// Create a snapshot dated now
    pub fn new(label: impl Into<String>, income: f64, expenses: f64, savings: f64) -> Self {
        Self::dated(Utc::now(), label, income, expenses, savings)
    }

    /// Create a snapshot with an explicit date
    pub fn dated(
        date: DateTime<Utc>,
        label: impl Into<String>,
        income: f64,
        expenses: f64,
        savings: f64,
    ) -> Self {
        Self {
            id: HistoryId::new(),
            date,
            label: label.into(),
            income,
            expenses,
            savings,
        }
    }

    /// Income minus expenses for the archived month
    pub fn net(&self) -> f64 {
        self.income - self.expenses
    }

    /// Year-month key ("YYYY-MM") of the snapshot date
    pub fn month_key(&self) -> String {
        format!("{:04}-{:02}", self.date.year(), self.date.month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_net_and_month_key() {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let entry = BudgetHistoryItem::dated(date, "mei 2024", 5650.0, 3510.0, 750.0);

        assert_eq!(entry.net(), 2140.0);
        assert_eq!(entry.month_key(), "2024-05");
    }

    #[test]
    fn test_deserializes_js_iso_timestamp() {
        let json = r#"{"id":"a1b2c3d","date":"2024-01-15T10:20:30.123Z","label":"januari 2024","income":100,"expenses":40.5,"savings":10}"#;
        let entry: BudgetHistoryItem = serde_json::from_str(json).unwrap();

        assert_eq!(entry.month_key(), "2024-01");
        assert_eq!(entry.expenses, 40.5);
        assert_eq!(entry.id.as_str(), "a1b2c3d");
    }
}
