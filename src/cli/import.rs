//! Import CLI commands
//!
//! Reads a budget CSV and, once confirmed with `--force`, replaces the
//! income, expense and savings lists. History is never touched.

use std::path::Path;

use crate::error::{BudgetError, BudgetResult};
use crate::services::parse_budget_csv;
use crate::session::BudgetSession;

/// Import a CSV file into the budget
pub fn handle_import_command(
    session: &mut BudgetSession,
    file: &Path,
    force: bool,
) -> BudgetResult<()> {
    let content = std::fs::read_to_string(file)
        .map_err(|e| BudgetError::Import(format!("Failed to read {}: {}", file.display(), e)))?;

    // Preview first so nothing is replaced without confirmation
    let preview = parse_budget_csv(&content)?.summary();

    println!("Found in {}:", file.display());
    println!("  {} income items", preview.income);
    println!("  {} expense items", preview.expenses);
    println!("  {} savings items", preview.savings);
    if preview.skipped > 0 {
        println!("  {} rows skipped", preview.skipped);
    }

    if !force {
        println!();
        println!("WARNING: This will overwrite your current items!");
        println!("To proceed, run again with --force flag:");
        println!("  gezinsbudget import {} --force", file.display());
        return Ok(());
    }

    let summary = session.import_csv(&content)?;
    println!("Imported {} items.", summary.total());

    Ok(())
}
