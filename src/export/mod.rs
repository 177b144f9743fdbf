//! Export functionality
//!
//! CSV export of the expense collection for use in spreadsheets.

pub mod csv;

pub use csv::export_expenses_csv;
