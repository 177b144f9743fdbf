//! Path management for Spendlog
//!
//! Provides platform-aware path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDLOG_DATA_DIR` environment variable (if set)
//! 2. The platform data directory via `directories::ProjectDirs`
//!    (e.g. `~/.local/share/spendlog` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TrackerError;

/// Manages all paths used by Spendlog
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Base directory for all Spendlog data
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Create a new TrackerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, TrackerError> {
        let base_dir = if let Ok(custom) = std::env::var("SPENDLOG_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let proj_dirs = ProjectDirs::from("com", "spendlog", "Spendlog").ok_or_else(|| {
                TrackerError::Config("Could not determine a data directory".into())
            })?;
            proj_dirs.data_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create TrackerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the primary expense data file
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join("expenses.txt")
    }

    /// Get the path to the single-generation backup of the expense file
    pub fn backup_file(&self) -> PathBuf {
        self.base_dir.join("expenses_backup.txt")
    }

    /// Get the path to the budget mapping file
    pub fn budgets_file(&self) -> PathBuf {
        self.base_dir.join("budgets.txt")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(
            paths.expenses_file(),
            temp_dir.path().join("expenses.txt")
        );
        assert_eq!(
            paths.backup_file(),
            temp_dir.path().join("expenses_backup.txt")
        );
        assert_eq!(paths.budgets_file(), temp_dir.path().join("budgets.txt"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("spendlog");
        let paths = TrackerPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();

        assert!(base.exists());
    }

    #[test]
    fn test_settings_file_path() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }
}
