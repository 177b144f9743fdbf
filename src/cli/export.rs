//! Export CLI command

use std::path::Path;

use crate::error::TrackerResult;
use crate::storage::ExpenseStore;

/// Export all expenses as CSV to the given path
pub fn handle_export_command(store: &ExpenseStore, file: &Path) -> TrackerResult<()> {
    store.export_csv(file)?;
    println!("Exported {} expenses to {}", store.count(), file.display());
    Ok(())
}
