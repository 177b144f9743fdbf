//! Configuration management for Spendlog
//!
//! Handles path resolution and user settings.

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
