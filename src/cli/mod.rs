//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the budget session.

pub mod export;
pub mod history;
pub mod import;
pub mod item;
pub mod report;

pub use export::handle_export_command;
pub use history::{handle_history_command, HistoryCommands};
pub use import::handle_import_command;
pub use item::{handle_item_command, ItemCommands};
pub use report::{handle_project_command, handle_summary_command};
