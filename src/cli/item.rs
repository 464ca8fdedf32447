//! Item CLI commands
//!
//! Implements CLI commands for adding, editing, deleting and listing line
//! items in the income, expense and savings categories.

use clap::Subcommand;

use crate::display::format_item_list;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{format_currency, parse_amount_input, Category, ItemUpdate};
use crate::session::BudgetSession;

/// Item subcommands
#[derive(Subcommand)]
pub enum ItemCommands {
    /// List items (all categories when none is given)
    List {
        /// income, expenses or savings
        category: Option<Category>,
    },

    /// Add a new item
    Add {
        /// income, expenses or savings
        category: Category,
        /// Label (defaults to the configured placeholder)
        #[arg(short, long)]
        label: Option<String>,
        /// Monthly amount (e.g. "1200" or "12,50")
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
    },

    /// Edit an item's label and/or amount
    Edit {
        /// income, expenses or savings
        category: Category,
        /// Item ID (or unique prefix)
        id: String,
        /// New label
        #[arg(short, long)]
        label: Option<String>,
        /// New amount; text that is not a number becomes 0
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
    },

    /// Delete an item
    Delete {
        /// income, expenses or savings
        category: Category,
        /// Item ID (or unique prefix)
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

fn build_update(label: Option<String>, amount: Option<String>) -> ItemUpdate {
    ItemUpdate {
        label,
        amount: amount.as_deref().map(parse_amount_input),
    }
}

/// Handle an item command
pub fn handle_item_command(session: &mut BudgetSession, cmd: ItemCommands) -> BudgetResult<()> {
    let symbol = session.settings().currency_symbol.clone();

    match cmd {
        ItemCommands::List { category } => {
            let categories = match category {
                Some(c) => vec![c],
                None => Category::ALL.to_vec(),
            };
            for (idx, category) in categories.into_iter().enumerate() {
                if idx > 0 {
                    println!();
                }
                print!(
                    "{}",
                    format_item_list(category, session.data().items(category), &symbol)
                );
            }
        }

        ItemCommands::Add {
            category,
            label,
            amount,
        } => {
            if label.as_deref().is_some_and(|l| l.trim().is_empty()) {
                return Err(BudgetError::Validation("Label cannot be empty".into()));
            }

            let id = session.add_item(category);
            let update = build_update(label, amount);
            if !update.is_empty() {
                session.update_item(category, &id, update);
            }

            if let Some(item) = session.data().items(category).iter().find(|i| i.id == id) {
                println!("Added {} item: {}", category, item.label);
                println!("  Amount: {}", format_currency(item.amount, &symbol));
                println!("  ID: {}", item.id);
            }
        }

        ItemCommands::Edit {
            category,
            id,
            label,
            amount,
        } => {
            let update = build_update(label, amount);
            if update.is_empty() {
                println!("No changes specified. Use --label or --amount.");
                return Ok(());
            }
            if update.label.as_deref().is_some_and(|l| l.trim().is_empty()) {
                return Err(BudgetError::Validation("Label cannot be empty".into()));
            }

            let id = session.resolve_item(category, &id)?;
            session.update_item(category, &id, update);

            if let Some(item) = session.data().items(category).iter().find(|i| i.id == id) {
                println!(
                    "Updated {} item: {} ({})",
                    category,
                    item.label,
                    format_currency(item.amount, &symbol)
                );
            }
        }

        ItemCommands::Delete {
            category,
            id,
            force,
        } => {
            let id = session.resolve_item(category, &id)?;
            let label = session
                .data()
                .items(category)
                .iter()
                .find(|i| i.id == id)
                .map(|i| i.label.clone())
                .unwrap_or_default();

            if !force {
                println!("This will delete the {} item '{}'.", category, label);
                println!("To proceed, run again with --force flag:");
                println!("  gezinsbudget item delete {} {} --force", category, id.short());
                return Ok(());
            }

            session.delete_item(category, &id);
            println!("Deleted {} item: {}", category, label);
        }
    }

    Ok(())
}
