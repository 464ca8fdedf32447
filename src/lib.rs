//! GezinsBudget - household budget planner for the terminal
//!
//! This library provides the core of the GezinsBudget application: recurring
//! income, expense and savings items, the totals derived from them, archived
//! monthly snapshots, a linear yearly projection and CSV import/export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (items, categories, history, amounts)
//! - `storage`: JSON file storage behind a key-value store trait
//! - `services`: Business logic over a borrowed budget
//! - `export`: CSV export
//! - `session`: The command surface that owns state and persists changes
//! - `display` / `cli`: Terminal presentation
//!
//! # Example
//!
//! ```rust,ignore
//! use gezinsbudget::config::{BudgetPaths, Settings};
//! use gezinsbudget::models::Category;
//! use gezinsbudget::session::BudgetSession;
//! use gezinsbudget::storage::open_store;
//!
//! let paths = BudgetPaths::new()?;
//! let settings = Settings::load_or_default(&paths);
//! let mut session = BudgetSession::open(open_store(&paths), settings);
//! session.add_item(Category::Expense);
//! println!("{}", session.net_result());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
pub use session::BudgetSession;
