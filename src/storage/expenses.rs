//! Expense data file persistence
//!
//! The primary file is pipe-delimited text, one record per line, preceded by
//! a three-line `#` header. Every save first copies the existing file to a
//! fixed backup path (single generation), then rewrites the primary from
//! scratch. Loading is lenient: malformed lines are skipped with a warning,
//! never fatal.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use chrono::Local;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;

/// Comment marker for header and ignored lines
const COMMENT_MARKER: char = '#';

/// Read all expense records from the data file
///
/// Blank lines and `#` comments are skipped silently; lines that fail to
/// parse are skipped with a warning naming the line number.
pub fn read_expenses(path: &Path) -> TrackerResult<Vec<Expense>> {
    let file = File::open(path)
        .map_err(|e| TrackerError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    let mut expenses = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line
            .map_err(|e| TrackerError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let line = line.trim();

        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        match Expense::from_line(line) {
            Ok(expense) => expenses.push(expense),
            Err(e) => log::warn!("Skipping line {}: {}", line_number, e),
        }
    }

    Ok(expenses)
}

/// Write all expense records to the data file, backing up the previous file
///
/// If the primary file exists it is first copied byte-for-byte to the backup
/// path, overwriting any prior backup. The primary is then rewritten with the
/// header block and one line per record, in the order given.
pub fn write_expenses(path: &Path, backup_path: &Path, expenses: &[Expense]) -> TrackerResult<()> {
    if path.exists() {
        fs::copy(path, backup_path).map_err(|e| {
            TrackerError::Io(format!(
                "Failed to back up {}: {}",
                path.display(),
                e
            ))
        })?;
    }

    let file = File::create(path)
        .map_err(|e| TrackerError::Io(format!("Failed to create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "# Spendlog expense data")
        .and_then(|_| {
            writeln!(
                writer,
                "# Format: ID|Description|Amount|Category|Date|PaymentMethod|Notes"
            )
        })
        .and_then(|_| {
            writeln!(
                writer,
                "# Last updated: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S")
            )
        })
        .map_err(|e| TrackerError::Io(format!("Failed to write header: {}", e)))?;

    for expense in expenses {
        writeln!(writer, "{}", expense.to_line())
            .map_err(|e| TrackerError::Io(format!("Failed to write record: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| TrackerError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_expense(description: &str, cents: i64) -> Expense {
        Expense::new(
            description,
            Money::from_cents(cents),
            "Food",
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            "Cash",
            "",
        )
        .unwrap()
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");
        let backup = temp_dir.path().join("expenses_backup.txt");

        let expenses = vec![sample_expense("Lunch at cafe", 1250), sample_expense("Groceries", 4500)];
        write_expenses(&path, &backup, &expenses).unwrap();

        let loaded = read_expenses(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id(), expenses[0].id());
        assert_eq!(loaded[1].amount(), Money::from_cents(4500));
    }

    #[test]
    fn test_header_written() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");
        let backup = temp_dir.path().join("expenses_backup.txt");

        write_expenses(&path, &backup, &[sample_expense("Lunch at cafe", 1250)]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let header_lines: Vec<_> = contents.lines().take_while(|l| l.starts_with('#')).collect();
        assert_eq!(header_lines.len(), 3);
        assert!(header_lines[1].contains("ID|Description|Amount"));
        assert!(header_lines[2].starts_with("# Last updated:"));
    }

    #[test]
    fn test_no_backup_on_first_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");
        let backup = temp_dir.path().join("expenses_backup.txt");

        write_expenses(&path, &backup, &[sample_expense("Lunch at cafe", 1250)]).unwrap();
        assert!(!backup.exists());
    }

    #[test]
    fn test_backup_is_pre_save_copy() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");
        let backup = temp_dir.path().join("expenses_backup.txt");

        write_expenses(&path, &backup, &[sample_expense("Lunch at cafe", 1250)]).unwrap();
        let first_generation = fs::read(&path).unwrap();

        write_expenses(
            &path,
            &backup,
            &[
                sample_expense("Lunch at cafe", 1250),
                sample_expense("Groceries", 4500),
            ],
        )
        .unwrap();

        assert_eq!(fs::read(&backup).unwrap(), first_generation);
    }

    #[test]
    fn test_malformed_line_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");

        let good = sample_expense("Lunch at cafe", 1250);
        let contents = format!(
            "# header\n\n{}\nonly|six|fields|in|this|line\n{}\n",
            good.to_line(),
            sample_expense("Groceries", 4500).to_line()
        );
        fs::write(&path, contents).unwrap();

        let loaded = read_expenses(&path).unwrap();
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn test_comments_and_blanks_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");

        fs::write(&path, "# just a header\n\n   \n# another comment\n").unwrap();

        let loaded = read_expenses(&path).unwrap();
        assert!(loaded.is_empty());
    }
}
