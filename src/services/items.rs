//! Item service
//!
//! Add, update and delete line items within one category list. Missing ids
//! are not errors: the operation simply changes nothing.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetData, BudgetItem, Category, ItemId, ItemUpdate};

/// Service for line item management
pub struct ItemService<'a> {
    data: &'a mut BudgetData,
}

impl<'a> ItemService<'a> {
    /// Create a new item service
    pub fn new(data: &'a mut BudgetData) -> Self {
        Self { data }
    }

    /// Append a new zero-amount item with the given placeholder label
    pub fn add(&mut self, category: Category, label: &str) -> ItemId {
        let item = BudgetItem::new(label, 0.0);
        let id = item.id.clone();
        self.data.items_mut(category).push(item);
        log::debug!("added {} item {}", category, id);
        id
    }

    /// Apply a partial update to the matching item
    ///
    /// Returns `false` (and changes nothing) when no item has this id.
    pub fn update(&mut self, category: Category, id: &ItemId, update: &ItemUpdate) -> bool {
        match self
            .data
            .items_mut(category)
            .iter_mut()
            .find(|item| &item.id == id)
        {
            Some(item) => {
                item.apply(update);
                log::debug!("updated {} item {}", category, id);
                true
            }
            None => false,
        }
    }

    /// Remove the matching item; returns whether anything was removed
    pub fn delete(&mut self, category: Category, id: &ItemId) -> bool {
        let items = self.data.items_mut(category);
        let before = items.len();
        items.retain(|item| &item.id != id);
        let removed = items.len() != before;
        if removed {
            log::debug!("deleted {} item {}", category, id);
        }
        removed
    }

    /// Replace a whole category list
    ///
    /// Items with a blank label or a non-finite amount are dropped. Returns
    /// the number of items kept.
    pub fn replace_category(&mut self, category: Category, items: Vec<BudgetItem>) -> usize {
        let incoming = items.len();
        let valid: Vec<BudgetItem> = items
            .into_iter()
            .filter(|item| !item.label.trim().is_empty() && item.amount.is_finite())
            .collect();

        if valid.len() != incoming {
            log::debug!(
                "dropped {} invalid {} item(s) during replace",
                incoming - valid.len(),
                category
            );
        }

        let kept = valid.len();
        *self.data.items_mut(category) = valid;
        kept
    }
}

/// Resolve a full id or a unique id prefix to an item id
pub fn resolve_item_id(data: &BudgetData, category: Category, needle: &str) -> BudgetResult<ItemId> {
    let items = data.items(category);

    if let Some(item) = items.iter().find(|item| item.id.as_str() == needle) {
        return Ok(item.id.clone());
    }

    let matches: Vec<&BudgetItem> = items
        .iter()
        .filter(|item| item.id.matches_prefix(needle))
        .collect();

    match matches.as_slice() {
        [] => Err(BudgetError::item_not_found(needle)),
        [single] => Ok(single.id.clone()),
        _ => Err(BudgetError::Validation(format!(
            "Id prefix '{}' matches {} {} items",
            needle,
            matches.len(),
            category
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(data: &BudgetData, category: Category) -> f64 {
        data.items(category).iter().map(|i| i.amount).sum()
    }

    #[test]
    fn test_add_appends_placeholder() {
        let mut data = BudgetData::sample();
        let id = ItemService::new(&mut data).add(Category::Expense, "Nieuwe post");

        let last = data.expenses.last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.label, "Nieuwe post");
        assert_eq!(last.amount, 0.0);
        assert_eq!(data.expenses.len(), 7);
    }

    #[test]
    fn test_update_touches_only_matching_item() {
        let mut data = BudgetData::sample();
        let target = data.income[1].id.clone();
        let before = data.income.clone();

        let found = ItemService::new(&mut data).update(
            Category::Income,
            &target,
            &ItemUpdate {
                label: Some("Salaris partner".into()),
                amount: Some(2300.0),
            },
        );

        assert!(found);
        assert_eq!(data.income[1].label, "Salaris partner");
        assert_eq!(data.income[1].amount, 2300.0);
        assert_eq!(data.income[0], before[0]);
        assert_eq!(data.income[2..], before[2..]);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut data = BudgetData::sample();
        let before = data.clone();

        let found = ItemService::new(&mut data).update(
            Category::Income,
            &ItemId::from("missing"),
            &ItemUpdate::amount(1.0),
        );

        assert!(!found);
        assert_eq!(data, before);
    }

    #[test]
    fn test_update_ignores_other_categories() {
        let mut data = BudgetData::sample();
        let income_id = data.income[0].id.clone();
        let before = data.clone();

        let found =
            ItemService::new(&mut data).update(Category::Expense, &income_id, &ItemUpdate::amount(1.0));

        assert!(!found);
        assert_eq!(data, before);
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut data = BudgetData::sample();
        let removed = data.expenses[2].id.clone();
        let labels_after: Vec<String> = data
            .expenses
            .iter()
            .filter(|i| i.id != removed)
            .map(|i| i.label.clone())
            .collect();

        assert!(ItemService::new(&mut data).delete(Category::Expense, &removed));

        let labels: Vec<String> = data.expenses.iter().map(|i| i.label.clone()).collect();
        assert_eq!(labels, labels_after);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut data = BudgetData::sample();
        let before = data.clone();

        assert!(!ItemService::new(&mut data).delete(Category::Savings, &ItemId::from("nope")));
        assert_eq!(data, before);
    }

    #[test]
    fn test_total_tracks_mutations() {
        let mut data = BudgetData::default();
        let mut service = ItemService::new(&mut data);

        let a = service.add(Category::Income, "A");
        let b = service.add(Category::Income, "B");
        service.update(Category::Income, &a, &ItemUpdate::amount(100.0));
        service.update(Category::Income, &b, &ItemUpdate::amount(-25.5));
        assert_eq!(total(&data, Category::Income), 74.5);

        ItemService::new(&mut data).delete(Category::Income, &a);
        assert_eq!(total(&data, Category::Income), -25.5);
    }

    #[test]
    fn test_replace_category_drops_invalid_items() {
        let mut data = BudgetData::sample();
        let kept = ItemService::new(&mut data).replace_category(
            Category::Savings,
            vec![
                BudgetItem::new("Buffer", 50.0),
                BudgetItem::new("   ", 10.0),
                BudgetItem::new("Kapot", f64::NAN),
            ],
        );

        assert_eq!(kept, 1);
        assert_eq!(data.savings.len(), 1);
        assert_eq!(data.savings[0].label, "Buffer");
        assert_eq!(data.income.len(), 4);
    }

    #[test]
    fn test_resolve_prefix() {
        let mut data = BudgetData::default();
        data.income.push(BudgetItem {
            id: "abc111".into(),
            label: "A".into(),
            amount: 1.0,
        });
        data.income.push(BudgetItem {
            id: "abc222".into(),
            label: "B".into(),
            amount: 2.0,
        });

        assert_eq!(
            resolve_item_id(&data, Category::Income, "abc2").unwrap().as_str(),
            "abc222"
        );
        assert!(resolve_item_id(&data, Category::Income, "abc")
            .unwrap_err()
            .is_validation());
        assert!(resolve_item_id(&data, Category::Income, "zzz")
            .unwrap_err()
            .is_not_found());
    }
}
