//! User settings for GezinsBudget
//!
//! Manages user preferences: currency symbol, projection horizon, the label
//! given to new line items and the keywords behind the childcare check.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;

/// Number of months projected when nothing else is configured
pub const DEFAULT_PROJECTION_PERIODS: u32 = 12;

/// Keyword sets used to pick childcare items out of the budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildcareKeywords {
    /// Income labels containing one of these count as childcare subsidy
    #[serde(default = "default_subsidy_keywords")]
    pub income: Vec<String>,

    /// Expense labels containing one of these count as childcare cost
    #[serde(default = "default_cost_keywords")]
    pub expenses: Vec<String>,
}

fn default_subsidy_keywords() -> Vec<String> {
    vec!["toeslag".to_string(), "kind".to_string()]
}

fn default_cost_keywords() -> Vec<String> {
    vec!["opvang".to_string(), "bso".to_string()]
}

impl Default for ChildcareKeywords {
    fn default() -> Self {
        Self {
            income: default_subsidy_keywords(),
            expenses: default_cost_keywords(),
        }
    }
}

/// User settings for GezinsBudget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Number of months covered by the projection
    #[serde(default = "default_projection_periods")]
    pub projection_periods: u32,

    /// Label given to freshly added line items
    #[serde(default = "default_new_item_label")]
    pub new_item_label: String,

    /// Childcare keyword configuration
    #[serde(default)]
    pub childcare: ChildcareKeywords,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_projection_periods() -> u32 {
    DEFAULT_PROJECTION_PERIODS
}

fn default_new_item_label() -> String {
    "Nieuwe post".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            projection_periods: default_projection_periods(),
            new_item_label: default_new_item_label(),
            childcare: ChildcareKeywords::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Load settings, using the defaults when the file can't be read
    pub fn load_or_default(paths: &BudgetPaths) -> Self {
        Self::load_or_create(paths).unwrap_or_else(|e| {
            log::warn!("ignoring settings file, using defaults: {}", e);
            Settings::default()
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
