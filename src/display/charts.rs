//! Text-based chart generators
//!
//! Turns the store's aggregate maps into horizontal bar and distribution
//! charts for the terminal. All functions are pure string builders.

use std::collections::BTreeMap;

use crate::models::{ExpenseCategory, Money};
use crate::storage::Statistics;

use super::format::{format_percentage, solid_bar};

/// Maximum bar span in columns
const MAX_BAR_LENGTH: usize = 50;

/// Width of the category label column
const CATEGORY_WIDTH: usize = 18;

/// Message returned for empty inputs
const NO_DATA: &str = "No data available for chart.";

/// Horizontal bar chart of totals by category, largest first
pub fn category_chart(totals: &BTreeMap<String, Money>) -> String {
    if totals.is_empty() {
        return NO_DATA.to_string();
    }

    let mut chart = boxed_title("EXPENSES BY CATEGORY");
    let max_amount = max_value(totals.values());

    let mut entries: Vec<_> = totals.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1));

    for (category, amount) in entries {
        let label = ExpenseCategory::resolve(category).icon().to_string() + " " + category;
        chart.push_str(&format!(
            "{:<width$} | {} {}\n",
            label,
            solid_bar(amount.cents() as f64, max_amount, MAX_BAR_LENGTH),
            amount,
            width = CATEGORY_WIDTH
        ));
    }

    chart
}

/// Bar chart of totals by month, chronological
pub fn monthly_chart(totals: &BTreeMap<String, Money>) -> String {
    if totals.is_empty() {
        return NO_DATA.to_string();
    }

    let mut chart = boxed_title("MONTHLY EXPENSE TREND");
    let max_amount = max_value(totals.values());

    // BTreeMap keys are "YYYY-MM", so iteration order is chronological
    for (month, amount) in totals {
        chart.push_str(&format!(
            "{:<12} | {} {}\n",
            month_label(month),
            solid_bar(amount.cents() as f64, max_amount, MAX_BAR_LENGTH),
            amount,
        ));
    }

    chart
}

/// Bar chart of totals by week-of-year bucket
pub fn weekly_chart(totals: &BTreeMap<u32, Money>) -> String {
    if totals.is_empty() {
        return NO_DATA.to_string();
    }

    let mut chart = boxed_title("WEEKLY EXPENSE TREND");
    let max_amount = max_value(totals.values());

    for (week, amount) in totals {
        chart.push_str(&format!(
            "Week {:<7} | {} {}\n",
            week,
            solid_bar(amount.cents() as f64, max_amount, MAX_BAR_LENGTH),
            amount,
        ));
    }

    chart
}

/// Percentage distribution chart by category, largest first
pub fn pie_chart(totals: &BTreeMap<String, Money>) -> String {
    if totals.is_empty() {
        return NO_DATA.to_string();
    }

    let mut chart = boxed_title("EXPENSE DISTRIBUTION (%)");
    let total: Money = totals.values().copied().sum();

    let mut entries: Vec<_> = totals.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1));

    for (category, amount) in entries {
        let percentage = if total.is_zero() {
            0.0
        } else {
            (amount.cents() as f64 / total.cents() as f64) * 100.0
        };

        let label = ExpenseCategory::resolve(category).icon().to_string() + " " + category;
        chart.push_str(&format!(
            "{:<width$} | {} {:>6} ({})\n",
            label,
            solid_bar(percentage, 100.0, MAX_BAR_LENGTH),
            format_percentage(percentage),
            amount,
            width = CATEGORY_WIDTH
        ));
    }

    chart.push_str(&format!("\nTotal: {}\n", total));
    chart
}

/// Two-bar comparison of the current and previous month, with delta line
pub fn comparison_chart(this_month: Money, last_month: Money) -> String {
    let mut chart = boxed_title("MONTH-TO-MONTH COMPARISON");
    let max_amount = this_month.max(last_month).cents() as f64;

    chart.push_str(&format!(
        "This Month   | {} {}\n",
        solid_bar(this_month.cents() as f64, max_amount, MAX_BAR_LENGTH),
        this_month,
    ));
    chart.push_str(&format!(
        "Last Month   | {} {}\n",
        solid_bar(last_month.cents() as f64, max_amount, MAX_BAR_LENGTH),
        last_month,
    ));

    let difference = this_month - last_month;
    let percent_change = if last_month.is_positive() {
        (difference.cents() as f64 / last_month.cents() as f64) * 100.0
    } else {
        0.0
    };

    chart.push('\n');
    if difference.is_positive() {
        chart.push_str(&format!(
            "↑ Increase: {} ({:.1}%)\n",
            difference,
            percent_change
        ));
    } else if difference.is_negative() {
        chart.push_str(&format!(
            "↓ Decrease: {} ({:.1}%)\n",
            difference.abs(),
            percent_change.abs()
        ));
    } else {
        chart.push_str("→ No change\n");
    }

    chart
}

/// Summary statistics box
pub fn summary_box(stats: &Statistics) -> String {
    let mut box_out = boxed_title("EXPENSE SUMMARY");

    box_out.push_str(&format!("  Total Expenses:        {}\n", stats.total));
    box_out.push_str(&format!("  Number of Entries:     {}\n", stats.count));
    box_out.push_str(&format!("  Average Expense:       {}\n", stats.average));
    box_out.push_str(&format!("  Highest Expense:       {}\n", stats.max));
    box_out.push_str(&format!("  Lowest Expense:        {}\n", stats.min));
    box_out.push_str(&format!("  Most Used Category:    {}\n", stats.top_category));
    box_out.push_str(&format!("  Most Expensive Day:    {}\n", stats.max_day));

    box_out
}

fn boxed_title(title: &str) -> String {
    let inner_width = 70;
    format!(
        "╔{}╗\n║{:^width$}║\n╚{}╝\n\n",
        "═".repeat(inner_width),
        title,
        "═".repeat(inner_width),
        width = inner_width
    )
}

/// Largest cents value in an amount iterator, as f64 for bar scaling
fn max_value<'a, I: Iterator<Item = &'a Money>>(values: I) -> f64 {
    values.map(|m| m.cents()).max().unwrap_or(1) as f64
}

/// Month label for a "YYYY-MM" key ("Jan 2025"); falls back to the raw key
fn month_label(year_month: &str) -> String {
    const MONTH_NAMES: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    let parsed = year_month
        .split_once('-')
        .and_then(|(year, month)| {
            let month: usize = month.parse().ok()?;
            MONTH_NAMES
                .get(month.checked_sub(1)?)
                .map(|name| format!("{} {}", name, year))
        });

    parsed.unwrap_or_else(|| year_month.to_string())
}
