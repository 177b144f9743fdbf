//! Expense CLI commands
//!
//! Add, list, inspect, edit, and search expense records.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::expense::{format_detail, format_table};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpenseCategory, ExpenseId, Money};
use crate::storage::ExpenseStore;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount (e.g., "12.50")
        amount: String,
        /// Category name (see `spendlog config` for the list)
        #[arg(short, long, default_value = "Other")]
        category: String,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Payment method (defaults to Cash)
        #[arg(short, long)]
        payment: Option<String>,
        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// List expenses
    List {
        /// Only the current month
        #[arg(long, conflicts_with_all = ["last_month", "week"])]
        month: bool,
        /// Only the previous month
        #[arg(long)]
        last_month: bool,
        /// Only the current week (Monday through today)
        #[arg(long)]
        week: bool,
        /// Filter by category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,
        /// Range start (YYYY-MM-DD)
        #[arg(long, requires = "to")]
        from: Option<String>,
        /// Range end (YYYY-MM-DD)
        #[arg(long, requires = "from")]
        to: Option<String>,
    },

    /// Show one expense in full
    Show {
        /// Expense id
        id: String,
    },

    /// Replace fields of an expense
    Update {
        /// Expense id
        id: String,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New amount
        #[arg(long)]
        amount: Option<String>,
        /// New category
        #[arg(long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// New payment method
        #[arg(long)]
        payment: Option<String>,
        /// New notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense id
        id: String,
    },

    /// Search descriptions, categories, and notes
    Search {
        /// Case-insensitive substring
        query: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &mut ExpenseStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
            date,
            payment,
            notes,
        } => {
            let expense = Expense::new(
                &description,
                parse_amount(&amount)?,
                &normalize_category(&category),
                parse_date_or_today(date.as_deref())?,
                payment.as_deref().unwrap_or(""),
                notes.as_deref().unwrap_or(""),
            )?;

            let detail = format_detail(&expense);
            store.add(expense)?;
            println!("Added expense:\n{}", detail);
        }

        ExpenseCommands::List {
            month,
            last_month,
            week,
            category,
            from,
            to,
        } => {
            let expenses = if month {
                store.current_month()
            } else if last_month {
                store.last_month()
            } else if week {
                store.current_week()
            } else if let Some(category) = category {
                store.by_category(&category)
            } else if let (Some(from), Some(to)) = (from, to) {
                store.by_date_range(parse_date(&from)?, parse_date(&to)?)
            } else {
                store.all()
            };

            println!("{}", format_table(&expenses, settings));
        }

        ExpenseCommands::Show { id } => {
            let id = resolve_id(store, &id)?;
            let expense = store
                .find_by_id(id)
                .ok_or_else(|| TrackerError::expense_not_found(id.to_string()))?;
            println!("{}", format_detail(&expense));
        }

        ExpenseCommands::Update {
            id,
            description,
            amount,
            category,
            date,
            payment,
            notes,
        } => {
            let id = resolve_id(store, &id)?;
            let existing = store
                .find_by_id(id)
                .ok_or_else(|| TrackerError::expense_not_found(id.to_string()))?;

            let amount = match amount {
                Some(raw) => parse_amount(&raw)?,
                None => existing.amount(),
            };
            let date = match date {
                Some(raw) => parse_date(&raw)?,
                None => existing.date(),
            };

            let category = match category {
                Some(raw) => normalize_category(&raw),
                None => existing.category().to_string(),
            };
            let replacement = Expense::new(
                description.as_deref().unwrap_or(existing.description()),
                amount,
                &category,
                date,
                payment.as_deref().unwrap_or(existing.payment_method()),
                notes.as_deref().unwrap_or(existing.notes()),
            )?;

            let detail = format_detail(&replacement);
            if store.update(id, replacement)? {
                println!("Updated expense:\n{}", detail);
            } else {
                return Err(TrackerError::expense_not_found(id.to_string()));
            }
        }

        ExpenseCommands::Delete { id } => {
            let id = resolve_id(store, &id)?;
            if store.delete(id)? {
                println!("Deleted expense {}", id);
            } else {
                return Err(TrackerError::expense_not_found(id.to_string()));
            }
        }

        ExpenseCommands::Search { query } => {
            let matches = store.search(&query);
            println!("{}", format_table(&matches, settings));
        }
    }

    Ok(())
}

fn parse_amount(raw: &str) -> TrackerResult<Money> {
    Money::parse(raw)
        .map_err(|_| TrackerError::validation(format!("Invalid amount: {}", raw)))
}

fn parse_date(raw: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| TrackerError::validation(format!("Invalid date (expected YYYY-MM-DD): {}", raw)))
}

fn parse_date_or_today(raw: Option<&str>) -> TrackerResult<NaiveDate> {
    match raw {
        Some(raw) => parse_date(raw),
        None => Ok(Local::now().date_naive()),
    }
}

/// Accept either a bare category name or an icon-prefixed catalog label
/// (as printed by `spendlog config`)
pub fn normalize_category(raw: &str) -> String {
    let raw = raw.trim();
    if ExpenseCategory::all_labels().iter().any(|label| label == raw) {
        ExpenseCategory::name_from_label(raw)
    } else {
        raw.to_string()
    }
}

/// Resolve a full or unambiguous prefix of an expense id
fn resolve_id(store: &ExpenseStore, raw: &str) -> TrackerResult<ExpenseId> {
    let raw = raw.trim().to_lowercase();

    if let Ok(id) = ExpenseId::parse(&raw) {
        return Ok(id);
    }

    let matches: Vec<ExpenseId> = store
        .all()
        .iter()
        .map(|e| e.id())
        .filter(|id| id.to_string().starts_with(&raw))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(TrackerError::expense_not_found(raw)),
        _ => Err(TrackerError::validation(format!(
            "Ambiguous expense id prefix: {}",
            raw
        ))),
    }
}
