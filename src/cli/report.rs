//! Report CLI commands
//!
//! Prints the dashboard overview and the yearly projection.

use crate::display::{format_breakdown, format_projection, format_summary};
use crate::error::{BudgetError, BudgetResult};
use crate::services::ProjectionPoint;
use crate::session::BudgetSession;

/// Print totals, childcare check and (optionally) the expense breakdown
pub fn handle_summary_command(session: &BudgetSession, breakdown: bool) -> BudgetResult<()> {
    let symbol = &session.settings().currency_symbol;

    print!("{}", format_summary(&session.summary(), symbol));
    if breakdown {
        println!();
        print!("{}", format_breakdown(&session.expense_breakdown(), symbol));
    }

    Ok(())
}

/// Print the projection over `periods` months (settings default when `None`)
pub fn handle_project_command(session: &BudgetSession, periods: Option<u32>) -> BudgetResult<()> {
    let periods = periods.unwrap_or(session.settings().projection_periods);
    if periods == 0 {
        return Err(BudgetError::Validation(
            "Number of periods must be at least 1".into(),
        ));
    }

    let points: Vec<ProjectionPoint> = session.projection_for(periods).collect();
    print!(
        "{}",
        format_projection(&points, &session.settings().currency_symbol)
    );

    Ok(())
}
