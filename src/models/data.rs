//! Root budget aggregate
//!
//! `BudgetData` is persisted wholesale: three independently keyed item lists
//! plus the archived history.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::history::BudgetHistoryItem;
use super::item::BudgetItem;

/// The single root aggregate of the application
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BudgetData {
    pub income: Vec<BudgetItem>,
    pub expenses: Vec<BudgetItem>,
    pub savings: Vec<BudgetItem>,

    /// Missing in files written before history existed
    #[serde(default)]
    pub history: Vec<BudgetHistoryItem>,
}

impl BudgetData {
    /// Items of one category, in insertion order
    pub fn items(&self, category: Category) -> &[BudgetItem] {
        match category {
            Category::Income => &self.income,
            Category::Expense => &self.expenses,
            Category::Savings => &self.savings,
        }
    }

    /// Mutable access to the list owned by a category
    pub fn items_mut(&mut self, category: Category) -> &mut Vec<BudgetItem> {
        match category {
            Category::Income => &mut self.income,
            Category::Expense => &mut self.expenses,
            Category::Savings => &mut self.savings,
        }
    }

    /// Number of line items across all categories
    pub fn item_count(&self) -> usize {
        Category::ALL.iter().map(|c| self.items(*c).len()).sum()
    }

    /// Built-in sample household used on first start and after a reset
    pub fn sample() -> Self {
        let items = |rows: &[(&str, f64)]| -> Vec<BudgetItem> {
            rows.iter()
                .map(|(label, amount)| BudgetItem::new(*label, *amount))
                .collect()
        };

        Self {
            income: items(&[
                ("Salaris 1 (Netto)", 2500.0),
                ("Salaris 2 (Netto)", 2200.0),
                ("Kinderopvangtoeslag", 800.0),
                ("Kindgebonden budget", 150.0),
            ]),
            expenses: items(&[
                ("Kinderopvang / BSO", 1200.0),
                ("Hypotheek / Huur", 1100.0),
                ("Boodschappen", 800.0),
                ("Gas, Water, Licht", 200.0),
                ("Verzekeringen", 150.0),
                ("Internet & TV", 60.0),
            ]),
            savings: items(&[
                ("Kinderbijslag (per kwartaal)", 300.0),
                ("Vakantiegeld (reservering)", 350.0),
                ("Eindejaarsuitkering", 100.0),
            ]),
            history: Vec::new(),
        }
    }
}
