//! Budget persistence
//!
//! The budget is kept as one JSON record (`budget.json`). The [`BudgetStore`]
//! trait is the key-value seam: load the record, replace it, or clear it.

use std::path::PathBuf;

use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetData;

use super::file_io::{read_json_optional, remove_if_exists, write_json_atomic};

/// Key-value persistence for the single budget record
pub trait BudgetStore {
    /// Read the stored record; `Ok(None)` when nothing was ever saved
    fn load(&self) -> BudgetResult<Option<BudgetData>>;

    /// Replace the stored record
    fn save(&mut self, data: &BudgetData) -> BudgetResult<()>;

    /// Forget the stored record
    fn clear(&mut self) -> BudgetResult<()>;
}

/// Load the stored budget, falling back to the sample household
///
/// A missing record or one that fails to load is never fatal.
pub fn load_or_default(store: &dyn BudgetStore) -> BudgetData {
    match store.load() {
        Ok(Some(data)) => {
            log::debug!(
                "loaded budget with {} items and {} history entries",
                data.item_count(),
                data.history.len()
            );
            data
        }
        Ok(None) => {
            log::info!("no saved budget found, starting from the sample budget");
            BudgetData::sample()
        }
        Err(e) => {
            log::warn!("failed to load budget, starting from the sample budget: {}", e);
            BudgetData::sample()
        }
    }
}

/// Store backed by a JSON file written atomically
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl BudgetStore for JsonFileStore {
    fn load(&self) -> BudgetResult<Option<BudgetData>> {
        read_json_optional(&self.path)
    }

    fn save(&mut self, data: &BudgetData) -> BudgetResult<()> {
        write_json_atomic(&self.path, data)
    }

    fn clear(&mut self) -> BudgetResult<()> {
        remove_if_exists(&self.path)
    }
}

/// In-memory store, used when nothing should touch the disk
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Option<BudgetData>,
    fail_writes: bool,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a record
    pub fn with_data(data: BudgetData) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    /// Create a store whose saves always fail
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }
}

impl BudgetStore for MemoryStore {
    fn load(&self) -> BudgetResult<Option<BudgetData>> {
        Ok(self.data.clone())
    }

    fn save(&mut self, data: &BudgetData) -> BudgetResult<()> {
        if self.fail_writes {
            return Err(BudgetError::Storage("store is read-only".into()));
        }
        self.data = Some(data.clone());
        Ok(())
    }

    fn clear(&mut self) -> BudgetResult<()> {
        self.data = None;
        Ok(())
    }
}
