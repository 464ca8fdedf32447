//! Storage layer for GezinsBudget
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, behind the [`BudgetStore`] key-value seam.

pub mod budget;
pub mod file_io;

pub use budget::{load_or_default, BudgetStore, JsonFileStore, MemoryStore};
pub use file_io::{read_json_optional, write_json_atomic};

use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;

/// Open the file store for the configured data directory
pub fn open_file_store(paths: &BudgetPaths) -> Result<JsonFileStore, BudgetError> {
    paths.ensure_directories()?;
    Ok(JsonFileStore::new(paths.budget_file()))
}

/// Open the file store, or a store that never persists when the data
/// directory is unusable
///
/// The session then starts from the sample budget and every save failure is
/// logged.
pub fn open_store(paths: &BudgetPaths) -> Box<dyn BudgetStore> {
    match open_file_store(paths) {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("budget storage unavailable, changes will not be saved: {}", e);
            Box::new(MemoryStore::failing())
        }
    }
}
