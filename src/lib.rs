//! Spendlog - Terminal-based personal expense tracker
//!
//! This library provides the core functionality for the Spendlog expense
//! tracking application: validated expense records, a flat-file store with
//! backup-before-write persistence, per-category budgets, and text-based
//! chart rendering.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, money, ids)
//! - `storage`: The expense store (flat-file persistence, queries, aggregates)
//! - `display`: Terminal chart and table rendering
//! - `export`: CSV export
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use spendlog::config::paths::TrackerPaths;
//! use spendlog::storage::ExpenseStore;
//!
//! let paths = TrackerPaths::new()?;
//! let store = ExpenseStore::open(paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
