//! History CLI commands
//!
//! Implements CLI commands for archiving the current month and browsing or
//! pruning the history log.

use chrono::Local;
use clap::Subcommand;

use crate::display::format_history;
use crate::error::{BudgetError, BudgetResult};
use crate::models::format_currency;
use crate::services::{default_archive_label, validate_month};
use crate::session::BudgetSession;

/// History subcommands
#[derive(Subcommand)]
pub enum HistoryCommands {
    /// Archive the current totals as a monthly snapshot
    Archive {
        /// Period name (defaults to the current month, e.g. "mei 2024")
        label: Option<String>,
    },

    /// List archived months, newest first
    List {
        /// First month to include (YYYY-MM)
        #[arg(long)]
        from: Option<String>,
        /// Last month to include (YYYY-MM)
        #[arg(long)]
        to: Option<String>,
    },

    /// Delete an archived month
    Delete {
        /// History entry ID (or unique prefix)
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a history command
pub fn handle_history_command(
    session: &mut BudgetSession,
    cmd: HistoryCommands,
) -> BudgetResult<()> {
    let symbol = session.settings().currency_symbol.clone();

    match cmd {
        HistoryCommands::Archive { label } => {
            let label = label.unwrap_or_else(|| default_archive_label(&Local::now()));
            if label.trim().is_empty() {
                return Err(BudgetError::Validation("Archive label cannot be empty".into()));
            }

            let id = session.archive_current_month(&label)?;
            let summary = session.summary();
            println!("Archived '{}'", label.trim());
            println!("  Income:   {}", format_currency(summary.total_income, &symbol));
            println!("  Expenses: {}", format_currency(summary.total_expenses, &symbol));
            println!("  Savings:  {}", format_currency(summary.total_savings, &symbol));
            println!("  ID: {}", id);
        }

        HistoryCommands::List { from, to } => {
            for bound in [&from, &to].into_iter().flatten() {
                validate_month(bound)?;
            }

            if session.data().history.is_empty() {
                println!("No months archived yet.");
                println!("Archive one with: gezinsbudget history archive");
                return Ok(());
            }

            let entries = session.history_in_period(from.as_deref(), to.as_deref());
            print!("{}", format_history(&entries, &symbol));
        }

        HistoryCommands::Delete { id, force } => {
            let id = session.resolve_history(&id)?;
            let label = session
                .data()
                .history
                .iter()
                .find(|e| e.id == id)
                .map(|e| e.label.clone())
                .unwrap_or_default();

            if !force {
                println!("This will delete the history entry '{}'.", label);
                println!("To proceed, run again with --force flag:");
                println!("  gezinsbudget history delete {} --force", id.short());
                return Ok(());
            }

            session.delete_history_item(&id);
            println!("Deleted history entry: {}", label);
        }
    }

    Ok(())
}
