//! Budget CLI commands
//!
//! Set per-category budget limits and review spending against them.

use clap::Subcommand;

use crate::cli::expense::normalize_category;
use crate::display::format::{format_bar, format_money_colored, format_percentage};
use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;
use crate::storage::ExpenseStore;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the budget limit for a category
    Set {
        /// Category name
        category: String,
        /// Limit (e.g., "250" or "250.00"); zero clears the limit
        amount: String,
    },

    /// List configured budgets
    List,

    /// Show spending against every configured budget
    Status,
}

/// Handle a budget command
pub fn handle_budget_command(store: &mut ExpenseStore, cmd: BudgetCommands) -> TrackerResult<()> {
    match cmd {
        BudgetCommands::Set { category, amount } => {
            let category = normalize_category(&category);
            let amount = Money::parse(&amount)
                .map_err(|_| TrackerError::validation(format!("Invalid amount: {}", amount)))?;

            store.set_budget(&category, amount)?;
            println!("Budget for {} set to {}", category, amount);
        }

        BudgetCommands::List => {
            let budgets = store.budgets();
            if budgets.is_empty() {
                println!("No budgets configured.");
                return Ok(());
            }

            for (category, amount) in budgets {
                println!("{:<20} {}", category, amount);
            }
        }

        BudgetCommands::Status => {
            let status = store.budget_status();
            if status.is_empty() {
                println!("No budgets configured.");
                return Ok(());
            }

            for (category, entry) in status {
                let over = store.is_over_budget(&category);
                let marker = if over { " OVER BUDGET" } else { "" };

                println!(
                    "{:<20} [{}] {:>7}  spent {} of {}, {} remaining{}",
                    category,
                    format_bar(entry.spent.cents() as f64, entry.budget.cents() as f64, 20),
                    format_percentage(entry.percentage),
                    entry.spent,
                    entry.budget,
                    format_money_colored(entry.remaining),
                    marker,
                );
            }
        }
    }

    Ok(())
}
