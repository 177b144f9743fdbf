//! Budget mapping persistence
//!
//! Budgets are stored in their own versioned text file, one
//! `category=amount` pair per line under a header line. The file is
//! rewritten wholesale on every budget change. Reading is strict: any
//! malformed content is an error, and the store responds by resetting to an
//! empty mapping rather than propagating the failure.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;

/// Version header; a file not starting with this is rejected
const BUDGETS_HEADER: &str = "# spendlog budgets v1";

/// Read the category -> budget mapping from disk
pub fn read_budgets(path: &Path) -> TrackerResult<BTreeMap<String, Money>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| TrackerError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    let mut lines = contents.lines();
    match lines.next() {
        Some(header) if header.trim() == BUDGETS_HEADER => {}
        _ => return Err(TrackerError::parse("missing budgets header")),
    }

    let mut budgets = BTreeMap::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Split from the right so '=' in category names survives
        let (category, amount) = line
            .rsplit_once('=')
            .ok_or_else(|| TrackerError::parse(format!("malformed budget line: {}", line)))?;

        let amount = Money::parse(amount)
            .map_err(|_| TrackerError::parse(format!("invalid budget amount: {}", amount)))?;

        if amount.is_negative() {
            return Err(TrackerError::parse(format!(
                "negative budget amount: {}",
                amount
            )));
        }

        budgets.insert(category.to_string(), amount);
    }

    Ok(budgets)
}

/// Write the category -> budget mapping to disk
pub fn write_budgets(path: &Path, budgets: &BTreeMap<String, Money>) -> TrackerResult<()> {
    let file = File::create(path)
        .map_err(|e| TrackerError::Io(format!("Failed to create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", BUDGETS_HEADER)
        .map_err(|e| TrackerError::Io(format!("Failed to write header: {}", e)))?;

    for (category, amount) in budgets {
        writeln!(writer, "{}={}", category, amount.plain())
            .map_err(|e| TrackerError::Io(format!("Failed to write budget: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| TrackerError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.txt");

        let mut budgets = BTreeMap::new();
        budgets.insert("Food".to_string(), Money::from_cents(25000));
        budgets.insert("Transport".to_string(), Money::from_cents(8000));

        write_budgets(&path, &budgets).unwrap();
        let loaded = read_budgets(&path).unwrap();

        assert_eq!(loaded, budgets);
    }

    #[test]
    fn test_category_with_equals_sign() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.txt");

        let mut budgets = BTreeMap::new();
        budgets.insert("Food=Snacks".to_string(), Money::from_cents(1000));

        write_budgets(&path, &budgets).unwrap();
        let loaded = read_budgets(&path).unwrap();

        assert_eq!(loaded.get("Food=Snacks"), Some(&Money::from_cents(1000)));
    }

    #[test]
    fn test_missing_header_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.txt");

        fs::write(&path, "Food=250.00\n").unwrap();
        assert!(read_budgets(&path).unwrap_err().is_parse());
    }

    #[test]
    fn test_malformed_line_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.txt");

        fs::write(&path, format!("{}\nFood\n", BUDGETS_HEADER)).unwrap();
        assert!(read_budgets(&path).unwrap_err().is_parse());
    }

    #[test]
    fn test_bad_amount_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.txt");

        fs::write(&path, format!("{}\nFood=lots\n", BUDGETS_HEADER)).unwrap();
        assert!(read_budgets(&path).unwrap_err().is_parse());
    }

    #[test]
    fn test_empty_file_after_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.txt");

        write_budgets(&path, &BTreeMap::new()).unwrap();
        assert!(read_budgets(&path).unwrap().is_empty());
    }
}
