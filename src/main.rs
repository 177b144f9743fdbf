use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::cli::{
    handle_budget_command, handle_chart_command, handle_expense_command, handle_export_command,
    handle_summary_command, BudgetCommands, ChartCommands, ExpenseCommands,
};
use spendlog::config::{paths::TrackerPaths, settings::Settings};
use spendlog::models::ExpenseCategory;
use spendlog::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "spendlog",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Spendlog records day-to-day expenses in a plain text file, \
                  tracks per-category budgets, and renders totals and trends \
                  as text charts in the terminal."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "e")]
    Expense(ExpenseCommands),

    /// Chart rendering commands
    #[command(subcommand)]
    Chart(ChartCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show summary statistics
    Summary,

    /// Export all expenses to a CSV file
    Export {
        /// Destination file
        file: PathBuf,
    },

    /// Show current configuration, paths, and categories
    Config,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let mut store = ExpenseStore::open(paths)?;

    match cli.command {
        Commands::Expense(cmd) => handle_expense_command(&mut store, &settings, cmd)?,
        Commands::Chart(cmd) => handle_chart_command(&store, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&mut store, cmd)?,
        Commands::Summary => handle_summary_command(&store)?,
        Commands::Export { file } => handle_export_command(&store, &file)?,
        Commands::Config => {
            println!("Data directory: {}", store.paths().base_dir().display());
            println!("Expense file:   {}", store.paths().expenses_file().display());
            println!("Backup file:    {}", store.paths().backup_file().display());
            println!("Budget file:    {}", store.paths().budgets_file().display());
            println!("Currency:       {}", settings.currency_symbol);
            println!();
            println!("Categories:");
            for label in ExpenseCategory::all_labels() {
                println!("  {}", label);
            }
        }
    }

    Ok(())
}
