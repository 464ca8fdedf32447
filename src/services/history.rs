//! History service
//!
//! Archives the current category totals as a monthly snapshot, removes
//! snapshots, and selects snapshots by year-month range.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetData, BudgetHistoryItem, HistoryId};

use super::summary::sum_amounts;

const DUTCH_MONTHS: [&str; 12] = [
    "januari",
    "februari",
    "maart",
    "april",
    "mei",
    "juni",
    "juli",
    "augustus",
    "september",
    "oktober",
    "november",
    "december",
];

/// Service for archived snapshots
pub struct HistoryService<'a> {
    data: &'a mut BudgetData,
}

impl<'a> HistoryService<'a> {
    /// Create a new history service
    pub fn new(data: &'a mut BudgetData) -> Self {
        Self { data }
    }

    /// Archive the current totals under `label`, dated now
    pub fn archive(&mut self, label: &str) -> BudgetResult<HistoryId> {
        self.archive_at(label, Utc::now())
    }

    /// Archive the current totals under `label` with an explicit date
    ///
    /// Entries are never deduplicated: archiving the same month twice
    /// yields two entries.
    pub fn archive_at(&mut self, label: &str, date: DateTime<Utc>) -> BudgetResult<HistoryId> {
        let label = label.trim();
        if label.is_empty() {
            return Err(BudgetError::Validation(
                "Archive label cannot be empty".into(),
            ));
        }

        let entry = BudgetHistoryItem::dated(
            date,
            label,
            sum_amounts(&self.data.income),
            sum_amounts(&self.data.expenses),
            sum_amounts(&self.data.savings),
        );
        let id = entry.id.clone();

        log::debug!("archived '{}' as {}", label, id);
        self.data.history.push(entry);
        Ok(id)
    }

    /// Remove the matching entry; returns whether anything was removed
    pub fn delete(&mut self, id: &HistoryId) -> bool {
        let before = self.data.history.len();
        self.data.history.retain(|entry| &entry.id != id);
        let removed = self.data.history.len() != before;
        if removed {
            log::debug!("deleted history entry {}", id);
        }
        removed
    }
}

/// Entries sorted ascending by date, restricted to `[start, end]` months
///
/// Bounds are `"YYYY-MM"` strings compared lexicographically against each
/// entry's year-month; a missing bound leaves that side open.
pub fn filter_by_period<'h>(
    history: &'h [BudgetHistoryItem],
    start: Option<&str>,
    end: Option<&str>,
) -> Vec<&'h BudgetHistoryItem> {
    let mut entries: Vec<&BudgetHistoryItem> = history.iter().collect();
    entries.sort_by_key(|entry| entry.date);

    entries
        .into_iter()
        .filter(|entry| {
            let month = entry.month_key();
            start.map_or(true, |s| month.as_str() >= s) && end.map_or(true, |e| month.as_str() <= e)
        })
        .collect()
}

/// Check that a month bound is formatted as `YYYY-MM`
pub fn validate_month(month: &str) -> BudgetResult<()> {
    NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")
        .ok()
        .filter(|_| month.len() == 7)
        .map(|_| ())
        .ok_or_else(|| {
            BudgetError::Validation(format!("Invalid month '{}', expected YYYY-MM", month))
        })
}

/// Suggested archive label for a date, e.g. "oktober 2026"
pub fn default_archive_label<D: Datelike>(date: &D) -> String {
    format!("{} {}", DUTCH_MONTHS[date.month0() as usize], date.year())
}

/// Resolve a full id or a unique id prefix to a history id
pub fn resolve_history_id(data: &BudgetData, needle: &str) -> BudgetResult<HistoryId> {
    if let Some(entry) = data.history.iter().find(|e| e.id.as_str() == needle) {
        return Ok(entry.id.clone());
    }

    let matches: Vec<&BudgetHistoryItem> = data
        .history
        .iter()
        .filter(|e| e.id.matches_prefix(needle))
        .collect();

    match matches.as_slice() {
        [] => Err(BudgetError::history_not_found(needle)),
        [single] => Ok(single.id.clone()),
        _ => Err(BudgetError::Validation(format!(
            "Id prefix '{}' matches {} history entries",
            needle,
            matches.len()
        ))),
    }
}
