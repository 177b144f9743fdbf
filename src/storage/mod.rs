//! Storage layer for Spendlog
//!
//! The `ExpenseStore` is the single authoritative owner of the in-memory
//! expense collection and the category budget mapping. It handles flat-file
//! persistence with backup-before-write, CRUD, queries, aggregation, and
//! budget tracking. Query results are always fresh collections; internal
//! state is never handed out mutably.

pub mod budgets;
pub mod expenses;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::{Datelike, Local, NaiveDate};

use crate::config::paths::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};
use crate::export::csv::export_expenses_csv;
use crate::models::{Expense, ExpenseId, Money};

/// Summary statistics over the whole store
#[derive(Debug, Clone)]
pub struct Statistics {
    /// Sum of all amounts
    pub total: Money,
    /// Number of records
    pub count: usize,
    /// total / count, in whole cents
    pub average: Money,
    /// Largest single amount
    pub max: Money,
    /// Smallest single amount
    pub min: Money,
    /// Category with the highest total; "N/A" when empty. Ties go to the
    /// lexicographically smallest category name.
    pub top_category: String,
    /// Calendar day (YYYY-MM-DD) with the highest summed amount; "N/A" when
    /// empty. Ties go to the earliest day.
    pub max_day: String,
}

impl Statistics {
    fn empty() -> Self {
        Self {
            total: Money::zero(),
            count: 0,
            average: Money::zero(),
            max: Money::zero(),
            min: Money::zero(),
            top_category: "N/A".to_string(),
            max_day: "N/A".to_string(),
        }
    }
}

/// Budget-vs-spend status for one category
#[derive(Debug, Clone)]
pub struct BudgetStatus {
    /// The configured limit
    pub budget: Money,
    /// Total spent in the category, over all records
    pub spent: Money,
    /// budget - spent (negative when over)
    pub remaining: Money,
    /// spent / budget * 100; 0.0 for a zero-budget entry
    pub percentage: f64,
}

/// The expense store: in-memory collection plus durable persistence
pub struct ExpenseStore {
    paths: TrackerPaths,
    expenses: Vec<Expense>,
    budgets: BTreeMap<String, Money>,
}

impl ExpenseStore {
    /// Open the store, loading persisted data leniently
    ///
    /// A missing expense file means an empty store; an unreadable one is
    /// logged and treated the same. A missing or corrupt budget file resets
    /// the mapping to empty. Only directory creation can fail here.
    pub fn open(paths: TrackerPaths) -> TrackerResult<Self> {
        paths.ensure_directories()?;

        let expense_path = paths.expenses_file();
        let expenses = if expense_path.exists() {
            match expenses::read_expenses(&expense_path) {
                Ok(loaded) => {
                    log::info!("Loaded {} expenses", loaded.len());
                    loaded
                }
                Err(e) => {
                    log::warn!("Could not read expense file, starting empty: {}", e);
                    Vec::new()
                }
            }
        } else {
            log::info!("No expense file found. Starting fresh.");
            Vec::new()
        };

        let budget_path = paths.budgets_file();
        let budgets = if budget_path.exists() {
            match budgets::read_budgets(&budget_path) {
                Ok(loaded) => loaded,
                Err(e) => {
                    log::warn!("Could not read budget file, resetting budgets: {}", e);
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            paths,
            expenses,
            budgets,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    // --- CRUD -----------------------------------------------------------

    /// Add a new expense and persist
    ///
    /// On a save failure the record is still in memory; the error tells the
    /// caller the data is not on disk yet.
    pub fn add(&mut self, expense: Expense) -> TrackerResult<()> {
        self.expenses.push(expense);
        self.save_expenses()
    }

    /// Replace the first expense whose id matches, wholesale
    ///
    /// Returns `Ok(false)` without saving when no record matches.
    pub fn update(&mut self, id: ExpenseId, updated: Expense) -> TrackerResult<bool> {
        match self.expenses.iter().position(|e| e.id() == id) {
            Some(index) => {
                self.expenses[index] = updated;
                self.save_expenses()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove all expenses matching the id (at most one, given uniqueness)
    ///
    /// Persists only if something was removed.
    pub fn delete(&mut self, id: ExpenseId) -> TrackerResult<bool> {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id() != id);

        if self.expenses.len() < before {
            self.save_expenses()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Find an expense by id
    pub fn find_by_id(&self, id: ExpenseId) -> Option<Expense> {
        self.expenses.iter().find(|e| e.id() == id).cloned()
    }

    /// Number of stored expenses
    pub fn count(&self) -> usize {
        self.expenses.len()
    }

    // --- Queries --------------------------------------------------------

    /// All expenses in natural order (date descending, then amount descending)
    pub fn all(&self) -> Vec<Expense> {
        let mut sorted = self.expenses.clone();
        sort_naturally(&mut sorted);
        sorted
    }

    /// Expenses within a date range, inclusive on both ends, sorted
    pub fn by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Expense> {
        let mut matched: Vec<_> = self
            .expenses
            .iter()
            .filter(|e| e.date() >= start && e.date() <= end)
            .cloned()
            .collect();
        sort_naturally(&mut matched);
        matched
    }

    /// Expenses whose category matches exactly, case-insensitively, sorted
    pub fn by_category(&self, category: &str) -> Vec<Expense> {
        let mut matched: Vec<_> = self
            .expenses
            .iter()
            .filter(|e| e.category().eq_ignore_ascii_case(category))
            .cloned()
            .collect();
        sort_naturally(&mut matched);
        matched
    }

    /// Expenses in the current calendar month
    pub fn current_month(&self) -> Vec<Expense> {
        let (start, end) = month_bounds(Local::now().date_naive());
        self.by_date_range(start, end)
    }

    /// Expenses in the previous calendar month
    pub fn last_month(&self) -> Vec<Expense> {
        let (start, end) = last_month_bounds(Local::now().date_naive());
        self.by_date_range(start, end)
    }

    /// Expenses from the most recent Monday (inclusive) through today
    pub fn current_week(&self) -> Vec<Expense> {
        let today = Local::now().date_naive();
        let days_since_monday = today.weekday().num_days_from_monday() as i64;
        let start = today - chrono::Duration::days(days_since_monday);
        self.by_date_range(start, today)
    }

    /// Case-insensitive substring search over description, category, and notes
    ///
    /// A blank query returns everything.
    pub fn search(&self, query: &str) -> Vec<Expense> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.all();
        }

        let mut matched: Vec<_> = self
            .expenses
            .iter()
            .filter(|e| {
                e.description().to_lowercase().contains(&query)
                    || e.category().to_lowercase().contains(&query)
                    || e.notes().to_lowercase().contains(&query)
            })
            .cloned()
            .collect();
        sort_naturally(&mut matched);
        matched
    }

    // --- Aggregation ----------------------------------------------------

    /// Total amount per category, over all records
    pub fn total_by_category(&self) -> BTreeMap<String, Money> {
        let mut totals = BTreeMap::new();
        for expense in &self.expenses {
            *totals
                .entry(expense.category().to_string())
                .or_insert_with(Money::zero) += expense.amount();
        }
        totals
    }

    /// Total amount per year-month key ("2025-08"), over all records
    pub fn total_by_month(&self) -> BTreeMap<String, Money> {
        let mut totals = BTreeMap::new();
        for expense in &self.expenses {
            *totals
                .entry(expense.year_month())
                .or_insert_with(Money::zero) += expense.amount();
        }
        totals
    }

    /// Total amount per week-of-year bucket (`day_of_year / 7 + 1`)
    pub fn total_by_week(&self) -> BTreeMap<u32, Money> {
        let mut totals = BTreeMap::new();
        for expense in &self.expenses {
            *totals
                .entry(expense.week_of_year())
                .or_insert_with(Money::zero) += expense.amount();
        }
        totals
    }

    /// Sum of all amounts
    pub fn total(&self) -> Money {
        self.expenses.iter().map(|e| e.amount()).sum()
    }

    /// Sum of amounts in the current calendar month
    pub fn current_month_total(&self) -> Money {
        self.current_month().iter().map(|e| e.amount()).sum()
    }

    /// Sum of amounts in the previous calendar month
    pub fn last_month_total(&self) -> Money {
        self.last_month().iter().map(|e| e.amount()).sum()
    }

    /// Summary statistics; a well-defined zero/"N/A" result when empty
    pub fn statistics(&self) -> Statistics {
        if self.expenses.is_empty() {
            return Statistics::empty();
        }

        let total = self.total();
        let count = self.expenses.len();
        let average = Money::from_cents(total.cents() / count as i64);

        let max = self
            .expenses
            .iter()
            .map(|e| e.amount())
            .max()
            .unwrap_or_else(Money::zero);
        let min = self
            .expenses
            .iter()
            .map(|e| e.amount())
            .min()
            .unwrap_or_else(Money::zero);

        // First strict maximum wins, so ties resolve to the smallest key
        let mut top_category = "N/A".to_string();
        let mut top_total = Money::zero();
        for (category, category_total) in self.total_by_category() {
            if category_total > top_total {
                top_total = category_total;
                top_category = category;
            }
        }

        let mut daily_totals: BTreeMap<NaiveDate, Money> = BTreeMap::new();
        for expense in &self.expenses {
            *daily_totals
                .entry(expense.date())
                .or_insert_with(Money::zero) += expense.amount();
        }

        let mut max_day = "N/A".to_string();
        let mut max_day_total = Money::zero();
        for (date, day_total) in daily_totals {
            if day_total > max_day_total {
                max_day_total = day_total;
                max_day = date.format("%Y-%m-%d").to_string();
            }
        }

        Statistics {
            total,
            count,
            average,
            max,
            min,
            top_category,
            max_day,
        }
    }

    // --- Budgets --------------------------------------------------------

    /// Set the budget limit for a category and persist the mapping
    pub fn set_budget(&mut self, category: &str, amount: Money) -> TrackerResult<()> {
        if amount.is_negative() {
            return Err(TrackerError::Budget(
                "Budget amount cannot be negative".to_string(),
            ));
        }

        self.budgets.insert(category.trim().to_string(), amount);
        budgets::write_budgets(&self.paths.budgets_file(), &self.budgets)
    }

    /// Get the budget for a category; zero when unset
    pub fn budget(&self, category: &str) -> Money {
        self.budgets
            .get(category)
            .copied()
            .unwrap_or_else(Money::zero)
    }

    /// Copy of the whole budget mapping
    pub fn budgets(&self) -> BTreeMap<String, Money> {
        self.budgets.clone()
    }

    /// Whether spending in a category strictly exceeds its budget
    ///
    /// A zero budget (unset or explicit) is never over budget.
    pub fn is_over_budget(&self, category: &str) -> bool {
        let budget = self.budget(category);
        if budget.is_zero() {
            return false;
        }

        let spent = self
            .total_by_category()
            .get(category)
            .copied()
            .unwrap_or_else(Money::zero);
        spent > budget
    }

    /// Budget-vs-spend status for every category with an explicit entry
    pub fn budget_status(&self) -> BTreeMap<String, BudgetStatus> {
        let category_totals = self.total_by_category();
        let mut status = BTreeMap::new();

        for (category, &budget) in &self.budgets {
            let spent = category_totals
                .get(category)
                .copied()
                .unwrap_or_else(Money::zero);
            let percentage = if budget.is_zero() {
                0.0
            } else {
                (spent.cents() as f64 / budget.cents() as f64) * 100.0
            };

            status.insert(
                category.clone(),
                BudgetStatus {
                    budget,
                    spent,
                    remaining: budget - spent,
                    percentage,
                },
            );
        }

        status
    }

    // --- Export ---------------------------------------------------------

    /// Export all expenses, in natural order, as CSV
    pub fn export_csv(&self, path: &Path) -> TrackerResult<()> {
        let file = File::create(path)
            .map_err(|e| TrackerError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
        let mut writer = BufWriter::new(file);
        export_expenses_csv(&mut writer, &self.all())
    }

    fn save_expenses(&self) -> TrackerResult<()> {
        expenses::write_expenses(
            &self.paths.expenses_file(),
            &self.paths.backup_file(),
            &self.expenses,
        )
    }
}

/// Natural order: date descending, then amount descending
///
/// The sort is stable, so records with equal date and amount keep their
/// in-memory relative order.
fn sort_naturally(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| {
        b.date()
            .cmp(&a.date())
            .then(b.amount().cmp(&a.amount()))
    });
}

fn month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today.with_day(1).unwrap_or(today);
    let end = if today.month() == 12 {
        NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
    }
    .and_then(|first_of_next| first_of_next.pred_opt())
    .unwrap_or(today);

    (start, end)
}

fn last_month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first_of_month = today.with_day(1).unwrap_or(today);
    let end = first_of_month.pred_opt().unwrap_or(today);
    let start = end.with_day(1).unwrap_or(end);

    (start, end)
}
