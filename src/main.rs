use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use gezinsbudget::cli::{
    handle_export_command, handle_history_command, handle_import_command, handle_item_command,
    handle_project_command, handle_summary_command, HistoryCommands, ItemCommands,
};
use gezinsbudget::config::{BudgetPaths, Settings};
use gezinsbudget::session::BudgetSession;
use gezinsbudget::storage::open_store;

#[derive(Parser)]
#[command(
    name = "gezinsbudget",
    version,
    about = "Household budget planner for the terminal",
    long_about = "GezinsBudget keeps track of your monthly income, expenses and \
                  savings reservations, archives monthly snapshots and projects \
                  where a year of the same budget takes you."
)]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Line item management commands
    #[command(subcommand)]
    Item(ItemCommands),

    /// Show totals and the childcare check
    Summary {
        /// Also show how expenses are divided
        #[arg(short, long)]
        breakdown: bool,
    },

    /// Monthly history commands
    #[command(subcommand)]
    History(HistoryCommands),

    /// Project the current budget forward
    Project {
        /// Number of months (defaults to the configured value)
        #[arg(short, long)]
        periods: Option<u32>,
    },

    /// Export all items to CSV
    Export {
        /// Output file, or "-" for stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace all items with the contents of a CSV file
    Import {
        /// Path to CSV file
        file: PathBuf,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Reset everything to the sample budget
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration and paths
    Config {
        /// Write the active settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_default(&paths);
    let mut session = BudgetSession::open(open_store(&paths), settings);

    match cli.command {
        Some(Commands::Item(cmd)) => handle_item_command(&mut session, cmd)?,
        Some(Commands::Summary { breakdown }) => handle_summary_command(&session, breakdown)?,
        Some(Commands::History(cmd)) => handle_history_command(&mut session, cmd)?,
        Some(Commands::Project { periods }) => handle_project_command(&session, periods)?,
        Some(Commands::Export { output }) => handle_export_command(&session, &paths, output)?,
        Some(Commands::Import { file, force }) => {
            handle_import_command(&mut session, &file, force)?
        }
        Some(Commands::Reset { force }) => {
            if !force {
                println!("WARNING: This will replace ALL items and history with the sample budget!");
                println!("To proceed, run again with --force flag:");
                println!("  gezinsbudget reset --force");
                return Ok(());
            }
            session.reset_to_defaults();
            println!("Budget reset to the sample budget.");
        }
        Some(Commands::Config { init }) => {
            let settings = session.settings();
            if init {
                settings.save(&paths)?;
                println!("Settings written to {}", paths.settings_file().display());
                println!();
            }
            println!("GezinsBudget Configuration");
            println!("==========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Budget file:      {}", paths.budget_file().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Projection periods: {}", settings.projection_periods);
            println!("  New item label:     {}", settings.new_item_label);
            println!(
                "  Childcare income keywords:  {}",
                settings.childcare.income.join(", ")
            );
            println!(
                "  Childcare expense keywords: {}",
                settings.childcare.expenses.join(", ")
            );
        }
        None => {
            println!("GezinsBudget - household budget planner");
            println!();
            handle_summary_command(&session, false)?;
            println!();
            println!("Run 'gezinsbudget --help' for usage information.");
        }
    }

    Ok(())
}
