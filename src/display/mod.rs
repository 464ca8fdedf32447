//! Display formatting for terminal output
//!
//! Provides utilities for formatting budget data for terminal display.

pub mod items;
pub mod report;

pub use items::format_item_list;
pub use report::{format_breakdown, format_history, format_projection, format_summary};
