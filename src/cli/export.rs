//! Export CLI commands
//!
//! Writes the budget items as CSV to a file, to stdout, or to a date-stamped
//! file in the export directory.

use std::io::Write;
use std::path::PathBuf;

use chrono::Local;

use crate::config::paths::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_file_name, write_budget_csv};
use crate::session::BudgetSession;

/// Export the budget to `output` ("-" for stdout, default export dir when `None`)
pub fn handle_export_command(
    session: &BudgetSession,
    paths: &BudgetPaths,
    output: Option<PathBuf>,
) -> BudgetResult<()> {
    if output.as_deref() == Some(std::path::Path::new("-")) {
        let mut stdout = std::io::stdout().lock();
        write_budget_csv(session.data(), &mut stdout)?;
        writeln!(stdout).map_err(|e| BudgetError::Export(e.to_string()))?;
        return Ok(());
    }

    let path = match output {
        Some(path) => path,
        None => {
            let dir = paths.export_dir();
            std::fs::create_dir_all(&dir).map_err(|e| {
                BudgetError::Export(format!("Failed to create export directory: {}", e))
            })?;
            dir.join(export_file_name(Local::now().date_naive()))
        }
    };

    let mut file = std::fs::File::create(&path)
        .map_err(|e| BudgetError::Export(format!("Failed to write {}: {}", path.display(), e)))?;
    write_budget_csv(session.data(), &mut file)?;

    println!(
        "Exported {} items to {}",
        session.data().item_count(),
        path.display()
    );

    Ok(())
}
