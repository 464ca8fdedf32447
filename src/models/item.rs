//! Budget line items
//!
//! A line item is a labelled monthly amount. Amounts are plain floats and may
//! be zero or negative (refunds and corrections are allowed).

use serde::{Deserialize, Serialize};

use super::ids::ItemId;

/// A single labelled monetary amount within a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Unique identifier within the owning list
    pub id: ItemId,

    /// Description shown to the user
    pub label: String,

    /// Monthly amount
    pub amount: f64,
}

impl BudgetItem {
    /// Create a new item with a fresh id
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            id: ItemId::new(),
            label: label.into(),
            amount,
        }
    }

    /// Apply a partial update in place
    pub fn apply(&mut self, update: &ItemUpdate) {
        if let Some(label) = &update.label {
            self.label = label.clone();
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
    }
}

/// Partial update for a line item; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemUpdate {
    pub label: Option<String>,
    pub amount: Option<f64>,
}

impl ItemUpdate {
    /// Update only the label
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            amount: None,
        }
    }

    /// Update only the amount
    pub fn amount(amount: f64) -> Self {
        Self {
            label: None,
            amount: Some(amount),
        }
    }

    /// True when the update would change nothing
    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.amount.is_none()
    }
}
