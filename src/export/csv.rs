//! CSV Export functionality
//!
//! Writes expense records as comma-separated rows with a fixed header.
//! Description and Notes are always quoted; the remaining text fields are
//! quoted only when they contain a delimiter, quote, or newline.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;

/// Export expenses to CSV, one row per record in the order given
pub fn export_expenses_csv<W: Write>(writer: &mut W, expenses: &[Expense]) -> TrackerResult<()> {
    writeln!(writer, "Date,Description,Amount,Category,Payment Method,Notes")
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    for expense in expenses {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            expense.date().format("%Y-%m-%d"),
            quote_csv(expense.description()),
            expense.amount().plain(),
            escape_csv(expense.category()),
            escape_csv(expense.payment_method()),
            quote_csv(expense.notes()),
        )
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Always wrap in quotes, doubling any embedded quote characters
fn quote_csv(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Quote only when the value needs it
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        quote_csv(s)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn sample_expense(description: &str, notes: &str) -> Expense {
        Expense::new(
            description,
            Money::from_cents(1250),
            "Food",
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            "Cash",
            notes,
        )
        .unwrap()
    }

    #[test]
    fn test_header_and_row() {
        let mut output = Vec::new();
        export_expenses_csv(&mut output, &[sample_expense("Lunch at cafe", "")]).unwrap();

        let csv = String::from_utf8(output).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Date,Description,Amount,Category,Payment Method,Notes"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2025-06-15,\"Lunch at cafe\",12.50,Food,Cash,\"\""
        );
    }

    #[test]
    fn test_quotes_doubled() {
        let mut output = Vec::new();
        export_expenses_csv(
            &mut output,
            &[sample_expense("The \"usual\" order", "a, b")],
        )
        .unwrap();

        let csv = String::from_utf8(output).unwrap();
        assert!(csv.contains("\"The \"\"usual\"\" order\""));
        assert!(csv.contains("\"a, b\""));
    }

    #[test]
    fn test_empty_export_has_header_only() {
        let mut output = Vec::new();
        export_expenses_csv(&mut output, &[]).unwrap();

        let csv = String::from_utf8(output).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
