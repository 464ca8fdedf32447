//! Core data models for GezinsBudget
//!
//! This module contains the data structures of the household budget: line
//! items grouped by category, archived monthly snapshots and the root
//! aggregate that is persisted as a whole.

pub mod category;
pub mod data;
pub mod history;
pub mod ids;
pub mod item;
pub mod money;

pub use category::Category;
pub use data::BudgetData;
pub use history::BudgetHistoryItem;
pub use ids::{HistoryId, ItemId};
pub use item::{BudgetItem, ItemUpdate};
pub use money::{format_currency, format_plain, parse_amount_input, parse_leading_float};
