//! Export module for GezinsBudget
//!
//! Budget items are exchanged as CSV so they can be edited in a spreadsheet
//! and imported again.

pub mod csv;

pub use self::csv::{export_budget_csv, export_file_name, write_budget_csv, CSV_HEADER};
