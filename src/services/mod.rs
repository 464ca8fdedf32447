//! Business logic layer for GezinsBudget
//!
//! Services operate on a borrowed [`BudgetData`](crate::models::BudgetData).
//! They never persist anything themselves; the session decides when the
//! changed state is saved.

pub mod history;
pub mod import;
pub mod items;
pub mod projection;
pub mod summary;

pub use history::{default_archive_label, filter_by_period, validate_month, HistoryService};
pub use import::{parse_budget_csv, ImportSummary, ParsedImport};
pub use items::ItemService;
pub use projection::{project, Projection, ProjectionPoint};
pub use summary::{BreakdownEntry, BudgetSummary, SummaryService};
