//! Budget session
//!
//! The session owns the budget state and the store it came from. Every
//! command that changes the state ends with [`BudgetSession::changed`], which
//! writes the whole budget back. A failed write is logged and the in-memory
//! state carries on unsaved.

use chrono::{DateTime, Utc};

use crate::config::Settings;
use crate::error::BudgetResult;
use crate::export::export_budget_csv;
use crate::models::{BudgetData, BudgetHistoryItem, Category, HistoryId, ItemId, ItemUpdate};
use crate::services::history::resolve_history_id;
use crate::services::items::resolve_item_id;
use crate::services::{
    filter_by_period, parse_budget_csv, project, BreakdownEntry, BudgetSummary, HistoryService,
    ImportSummary, ItemService, Projection, SummaryService,
};
use crate::storage::{load_or_default, BudgetStore};

/// Command surface used by the presentation layer
pub struct BudgetSession {
    data: BudgetData,
    store: Box<dyn BudgetStore>,
    settings: Settings,
}

impl BudgetSession {
    /// Load the budget from `store`, falling back to the sample budget
    pub fn open(store: Box<dyn BudgetStore>, settings: Settings) -> Self {
        let data = load_or_default(store.as_ref());
        Self {
            data,
            store,
            settings,
        }
    }

    /// Current budget state
    pub fn data(&self) -> &BudgetData {
        &self.data
    }

    /// Active settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Persist the current state; failures are logged, never returned
    pub fn changed(&mut self) {
        if let Err(e) = self.store.save(&self.data) {
            log::error!("failed to save budget, changes are kept in memory only: {}", e);
        }
    }

    // === Items ===

    /// Append a placeholder item to a category
    pub fn add_item(&mut self, category: Category) -> ItemId {
        let label = self.settings.new_item_label.clone();
        let id = ItemService::new(&mut self.data).add(category, &label);
        self.changed();
        id
    }

    /// Update label and/or amount of an item; `false` when the id is unknown
    pub fn update_item(&mut self, category: Category, id: &ItemId, update: ItemUpdate) -> bool {
        let found = ItemService::new(&mut self.data).update(category, id, &update);
        if found {
            self.changed();
        }
        found
    }

    /// Delete an item; `false` when the id is unknown
    pub fn delete_item(&mut self, category: Category, id: &ItemId) -> bool {
        let removed = ItemService::new(&mut self.data).delete(category, id);
        if removed {
            self.changed();
        }
        removed
    }

    /// Resolve a full id or unique prefix within a category
    pub fn resolve_item(&self, category: Category, needle: &str) -> BudgetResult<ItemId> {
        resolve_item_id(&self.data, category, needle)
    }

    /// Forget the stored budget and start again from the sample budget
    pub fn reset_to_defaults(&mut self) {
        if let Err(e) = self.store.clear() {
            log::warn!("failed to clear stored budget: {}", e);
        }
        self.data = BudgetData::sample();
        log::info!("budget reset to defaults");
        self.changed();
    }

    // === History ===

    /// Archive the current totals under `label`
    pub fn archive_current_month(&mut self, label: &str) -> BudgetResult<HistoryId> {
        self.archive_at(label, Utc::now())
    }

    /// Archive the current totals under `label` with an explicit date
    pub fn archive_at(&mut self, label: &str, date: DateTime<Utc>) -> BudgetResult<HistoryId> {
        let id = HistoryService::new(&mut self.data).archive_at(label, date)?;
        self.changed();
        Ok(id)
    }

    /// Delete a history entry; `false` when the id is unknown
    pub fn delete_history_item(&mut self, id: &HistoryId) -> bool {
        let removed = HistoryService::new(&mut self.data).delete(id);
        if removed {
            self.changed();
        }
        removed
    }

    /// Resolve a full id or unique prefix of a history entry
    pub fn resolve_history(&self, needle: &str) -> BudgetResult<HistoryId> {
        resolve_history_id(&self.data, needle)
    }

    /// History in ascending date order within the month range
    pub fn history_in_period(
        &self,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Vec<&BudgetHistoryItem> {
        filter_by_period(&self.data.history, start, end)
    }

    // === CSV ===

    /// Render all items as CSV
    pub fn export_csv(&self) -> String {
        export_budget_csv(&self.data)
    }

    /// Replace the item lists from CSV text
    ///
    /// # Errors
    ///
    /// Fails without touching the budget when the text holds no valid rows.
    pub fn import_csv(&mut self, content: &str) -> BudgetResult<ImportSummary> {
        let parsed = parse_budget_csv(content)?;
        let summary = parsed.apply(&mut self.data);
        log::info!(
            "imported {} income, {} expense and {} savings items",
            summary.income,
            summary.expenses,
            summary.savings
        );
        self.changed();
        Ok(summary)
    }

    // === Derived values ===

    fn summary_service(&self) -> SummaryService<'_> {
        SummaryService::new(&self.data, &self.settings.childcare)
    }

    /// All derived totals
    pub fn summary(&self) -> BudgetSummary {
        self.summary_service().summary()
    }

    /// Sum of one category
    pub fn total(&self, category: Category) -> f64 {
        self.summary_service().total(category)
    }

    /// Income minus expenses
    pub fn net_result(&self) -> f64 {
        self.summary_service().net_result()
    }

    pub fn childcare_income(&self) -> f64 {
        self.summary_service().childcare_income()
    }

    pub fn childcare_expenses(&self) -> f64 {
        self.summary_service().childcare_expenses()
    }

    pub fn net_childcare_cost(&self) -> f64 {
        self.summary_service().net_childcare_cost()
    }

    /// Positive expenses and their shares
    pub fn expense_breakdown(&self) -> Vec<BreakdownEntry> {
        self.summary_service().expense_breakdown()
    }

    /// Projection over the configured number of months
    pub fn projection(&self) -> Projection {
        self.projection_for(self.settings.projection_periods)
    }

    /// Projection over `periods` months
    pub fn projection_for(&self, periods: u32) -> Projection {
        project(
            self.total(Category::Income),
            self.total(Category::Expense),
            self.total(Category::Savings),
            periods,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetItem;
    use crate::storage::{JsonFileStore, MemoryStore};
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn empty_session() -> BudgetSession {
        BudgetSession::open(
            Box::new(MemoryStore::with_data(BudgetData::default())),
            Settings::default(),
        )
    }

    #[test]
    fn test_open_without_record_uses_sample() {
        let session = BudgetSession::open(Box::new(MemoryStore::new()), Settings::default());
        assert_eq!(session.data().item_count(), 13);
        assert_eq!(session.net_result(), 2140.0);
    }

    #[test]
    fn test_mutations_are_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");

        let mut session =
            BudgetSession::open(Box::new(JsonFileStore::new(path.clone())), Settings::default());
        let id = session.add_item(Category::Income);
        session.update_item(
            Category::Income,
            &id,
            ItemUpdate {
                label: Some("Bijbaan".into()),
                amount: Some(400.0),
            },
        );

        let reopened = BudgetSession::open(Box::new(JsonFileStore::new(path)), Settings::default());
        let item = reopened.data().income.last().unwrap();
        assert_eq!(item.label, "Bijbaan");
        assert_eq!(item.amount, 400.0);
    }

    #[test]
    fn test_save_failure_keeps_memory_state() {
        let mut session = BudgetSession::open(Box::new(MemoryStore::failing()), Settings::default());
        session.add_item(Category::Savings);

        assert_eq!(session.data().savings.len(), 4);
        assert_eq!(session.data().savings[3].label, "Nieuwe post");
    }

    #[test]
    fn test_custom_placeholder_label() {
        let settings = Settings {
            new_item_label: "New item".into(),
            ..Settings::default()
        };
        let mut session =
            BudgetSession::open(Box::new(MemoryStore::with_data(BudgetData::default())), settings);
        session.add_item(Category::Expense);

        assert_eq!(session.data().expenses[0].label, "New item");
    }

    #[test]
    fn test_totals_follow_every_mutation() {
        let mut session = empty_session();
        let a = session.add_item(Category::Expense);
        let b = session.add_item(Category::Expense);

        session.update_item(Category::Expense, &a, ItemUpdate::amount(99.5));
        assert_eq!(session.total(Category::Expense), 99.5);

        session.update_item(Category::Expense, &b, ItemUpdate::amount(0.5));
        assert_eq!(session.total(Category::Expense), 100.0);

        session.delete_item(Category::Expense, &a);
        assert_eq!(session.total(Category::Expense), 0.5);
        assert_eq!(
            session.net_result(),
            session.total(Category::Income) - session.total(Category::Expense)
        );
    }

    #[test]
    fn test_archive_does_not_touch_items() {
        let mut session = BudgetSession::open(Box::new(MemoryStore::new()), Settings::default());
        let before = session.data().clone();

        session.archive_current_month("mei 2024").unwrap();

        assert_eq!(session.data().income, before.income);
        assert_eq!(session.data().expenses, before.expenses);
        assert_eq!(session.data().savings, before.savings);
        assert_eq!(session.data().history.len(), 1);
    }

    #[test]
    fn test_deleting_unknown_ids_is_noop() {
        let mut session = BudgetSession::open(Box::new(MemoryStore::new()), Settings::default());
        session.archive_current_month("juni 2024").unwrap();
        let before = session.data().clone();

        assert!(!session.delete_item(Category::Income, &ItemId::from("ghost")));
        assert!(!session.delete_history_item(&HistoryId::from("ghost")));
        assert_eq!(session.data(), &before);
    }

    #[test]
    fn test_failed_import_leaves_data() {
        let mut session = BudgetSession::open(Box::new(MemoryStore::new()), Settings::default());
        let before = session.data().clone();

        assert!(session.import_csv("Type,Omschrijving,Bedrag").is_err());
        assert_eq!(session.data(), &before);
    }

    #[test]
    fn test_import_replaces_items_and_keeps_history() {
        let mut session = BudgetSession::open(Box::new(MemoryStore::new()), Settings::default());
        session.archive_current_month("juli 2024").unwrap();

        let summary = session
            .import_csv("Type,Omschrijving,Bedrag\n\"Inkomsten\",\"Salaris\",3000")
            .unwrap();

        assert_eq!(summary.income, 1);
        assert_eq!(summary.total(), 1);
        assert_eq!(session.data().income[0].label, "Salaris");
        assert!(session.data().expenses.is_empty());
        assert_eq!(session.data().history.len(), 1);
    }

    #[test]
    fn test_reset_restores_sample() {
        let mut session = empty_session();
        session.archive_current_month("aug 2024").unwrap();

        session.reset_to_defaults();

        assert_eq!(session.data().item_count(), 13);
        assert!(session.data().history.is_empty());
    }

    #[test]
    fn test_projection_uses_settings_periods() {
        let settings = Settings {
            projection_periods: 6,
            ..Settings::default()
        };
        let session = BudgetSession::open(Box::new(MemoryStore::new()), settings);

        let points: Vec<_> = session.projection().collect();
        assert_eq!(points.len(), 6);
        assert_eq!(points[5].cumulative_net, 2140.0 * 6.0);
        assert_eq!(session.projection_for(12).last().unwrap().cumulative_net, 2140.0 * 12.0);
    }

    #[test]
    fn test_history_in_period() {
        let mut session = empty_session();
        let dates = [(2024, 7, 1), (2024, 1, 15), (2024, 5, 1)];
        for (y, m, d) in dates {
            session
                .archive_at("maand", Utc.with_ymd_and_hms(y, m, d, 8, 0, 0).unwrap())
                .unwrap();
        }

        let filtered = session.history_in_period(Some("2024-01"), Some("2024-06"));
        assert_eq!(filtered.len(), 2);
        assert!(filtered[0].date < filtered[1].date);
    }

    #[test]
    fn test_childcare_accessors() {
        let mut data = BudgetData::default();
        data.income.push(BudgetItem::new("Kinderopvangtoeslag", 600.0));
        data.expenses.push(BudgetItem::new("BSO", 900.0));
        let session =
            BudgetSession::open(Box::new(MemoryStore::with_data(data)), Settings::default());

        assert_eq!(session.childcare_income(), 600.0);
        assert_eq!(session.childcare_expenses(), 900.0);
        assert_eq!(session.net_childcare_cost(), 300.0);
    }
}
