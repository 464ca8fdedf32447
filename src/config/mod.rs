//! Configuration module for GezinsBudget
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::{ChildcareKeywords, Settings, DEFAULT_PROJECTION_PERIODS};
