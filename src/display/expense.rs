//! Expense table and detail formatting

use crate::config::settings::Settings;
use crate::models::{Expense, Money};

use super::format::{separator, truncate};

/// One table row for an expense
pub fn format_row(expense: &Expense, settings: &Settings) -> String {
    format!(
        "{:<10} {:<14} {:<22} {:>10}  {:<15} {}",
        expense.id().short(),
        expense.date().format(&settings.date_format),
        truncate(expense.description(), 20),
        expense.amount().format_with_symbol(&settings.currency_symbol),
        truncate(expense.category(), 15),
        expense.payment_method(),
    )
}

/// A full table of expenses with header and totals footer
pub fn format_table(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let mut table = format!(
        "{:<10} {:<14} {:<22} {:>10}  {:<15} {}\n{}\n",
        "ID",
        "Date",
        "Description",
        "Amount",
        "Category",
        "Payment",
        separator(90)
    );

    for expense in expenses {
        table.push_str(&format_row(expense, settings));
        table.push('\n');
    }

    let total: Money = expenses.iter().map(|e| e.amount()).sum();
    table.push_str(&separator(90));
    table.push_str(&format!(
        "\n{} expenses, total {}\n",
        expenses.len(),
        total.format_with_symbol(&settings.currency_symbol)
    ));

    table
}

/// Multi-line detail view of a single expense
pub fn format_detail(expense: &Expense) -> String {
    let notes = if expense.notes().is_empty() {
        "None"
    } else {
        expense.notes()
    };

    format!(
        "ID: {}\n\
         Description: {}\n\
         Amount: {}\n\
         Category: {}\n\
         Date: {}\n\
         Payment Method: {}\n\
         Notes: {}",
        expense.id(),
        expense.description(),
        expense.amount(),
        expense.category(),
        expense.date().format("%A, %B %d, %Y"),
        expense.payment_method(),
        notes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_expense() -> Expense {
        Expense::new(
            "Lunch at cafe",
            Money::from_cents(1250),
            "Food",
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            "Cash",
            "",
        )
        .unwrap()
    }

    #[test]
    fn test_row_contains_fields() {
        let row = format_row(&sample_expense(), &Settings::default());
        assert!(row.contains("Lunch at cafe"));
        assert!(row.contains("$12.50"));
        assert!(row.contains("Jun 15, 2025"));
    }

    #[test]
    fn test_table_footer() {
        let expenses = vec![sample_expense(), sample_expense()];
        let table = format_table(&expenses, &Settings::default());
        assert!(table.starts_with("ID"));
        assert!(table.contains("2 expenses, total $25.00"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_table(&[], &Settings::default()), "No expenses found.");
    }

    #[test]
    fn test_detail_view() {
        let detail = format_detail(&sample_expense());
        assert!(detail.contains("Description: Lunch at cafe"));
        assert!(detail.contains("Amount: $12.50"));
        assert!(detail.contains("Date: Sunday, June 15, 2025"));
        assert!(detail.contains("Notes: None"));
    }
}
