//! Expense record model
//!
//! A single validated expense entry. Records are immutable once stored;
//! edits are modeled as whole-record replacement in the store.

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

use crate::error::{TrackerError, TrackerResult};

use super::ids::ExpenseId;
use super::money::Money;

/// Maximum accepted amount (inclusive)
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000);

/// Minimum description length after trimming
pub const MIN_DESCRIPTION_LEN: usize = 3;

/// Field delimiter in the data file
const FIELD_SEPARATOR: char = '|';

/// Substitute written in place of a literal `|` inside text fields
const SEPARATOR_SUBSTITUTE: char = '⎮';

/// Number of fields in a data line
const FIELD_COUNT: usize = 7;

/// A single expense entry
///
/// Equality is identity: two expenses are equal iff their ids are equal.
#[derive(Debug, Clone)]
pub struct Expense {
    id: ExpenseId,
    description: String,
    amount: Money,
    category: String,
    date: NaiveDate,
    payment_method: String,
    notes: String,
}

impl Expense {
    /// Create a new expense from user input, validating every field
    ///
    /// A blank payment method defaults to "Cash"; notes are trimmed and may
    /// be empty. Any violation returns a `Validation` error with a reason
    /// suitable for showing to the user.
    pub fn new(
        description: &str,
        amount: Money,
        category: &str,
        date: NaiveDate,
        payment_method: &str,
        notes: &str,
    ) -> TrackerResult<Self> {
        Ok(Self {
            id: ExpenseId::new(),
            description: validate_description(description)?,
            amount: validate_amount(amount)?,
            category: validate_category(category)?,
            date: validate_date(date)?,
            payment_method: normalize_payment_method(payment_method),
            notes: notes.trim().to_string(),
        })
    }

    /// Reconstruct an expense from a persisted data line
    ///
    /// Reuses the stored id and does not re-run the future-date or
    /// description-length checks. Fails with a `Parse` error on wrong field
    /// count, a non-numeric amount, or an unparseable date.
    pub fn from_line(line: &str) -> TrackerResult<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Err(TrackerError::parse("empty data line"));
        }

        let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if parts.len() != FIELD_COUNT {
            return Err(TrackerError::parse(format!(
                "expected {} fields, got {}",
                FIELD_COUNT,
                parts.len()
            )));
        }

        let id = ExpenseId::parse(parts[0])
            .map_err(|_| TrackerError::parse(format!("invalid id: {}", parts[0])))?;

        let amount = Money::parse(parts[2])
            .map_err(|_| TrackerError::parse(format!("invalid amount: {}", parts[2])))?;

        let date = NaiveDate::parse_from_str(parts[4], "%Y-%m-%d")
            .map_err(|_| TrackerError::parse(format!("invalid date: {}", parts[4])))?;

        Ok(Self {
            id,
            description: unescape_field(parts[1]),
            amount,
            category: unescape_field(parts[3]),
            date,
            payment_method: unescape_field(parts[5]),
            notes: unescape_field(parts[6]),
        })
    }

    /// Serialize to the pipe-delimited data line form
    ///
    /// `ID|Description|Amount|Category|Date|PaymentMethod|Notes`, amount with
    /// exactly two decimals, date as `YYYY-MM-DD`. Literal `|` characters in
    /// text fields are substituted so the delimiter never appears inside a
    /// field value.
    pub fn to_line(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}|{}",
            self.id,
            escape_field(&self.description),
            self.amount.plain(),
            escape_field(&self.category),
            self.date.format("%Y-%m-%d"),
            escape_field(&self.payment_method),
            escape_field(&self.notes),
        )
    }

    pub fn id(&self) -> ExpenseId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Year-month grouping key ("2025-08")
    pub fn year_month(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// Week-of-year bucket: `day_of_year / 7 + 1` with integer division
    ///
    /// Not ISO-8601 week numbering; day-of-year 7 lands in week 2.
    pub fn week_of_year(&self) -> u32 {
        self.date.ordinal() / 7 + 1
    }
}

impl PartialEq for Expense {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Expense {}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({})",
            self.amount, self.description, self.category
        )
    }
}

fn validate_description(description: &str) -> TrackerResult<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::validation("Description cannot be empty"));
    }
    if trimmed.chars().count() < MIN_DESCRIPTION_LEN {
        return Err(TrackerError::validation(format!(
            "Description must be at least {} characters",
            MIN_DESCRIPTION_LEN
        )));
    }
    Ok(trimmed.to_string())
}

fn validate_amount(amount: Money) -> TrackerResult<Money> {
    if !amount.is_positive() {
        return Err(TrackerError::validation(
            "Amount must be greater than zero",
        ));
    }
    if amount > MAX_AMOUNT {
        return Err(TrackerError::validation(
            "Amount exceeds maximum limit (1,000,000)",
        ));
    }
    Ok(amount)
}

fn validate_category(category: &str) -> TrackerResult<String> {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::validation("Category cannot be empty"));
    }
    Ok(trimmed.to_string())
}

fn validate_date(date: NaiveDate) -> TrackerResult<NaiveDate> {
    if date > Local::now().date_naive() {
        return Err(TrackerError::validation("Date cannot be in the future"));
    }
    Ok(date)
}

fn normalize_payment_method(payment_method: &str) -> String {
    let trimmed = payment_method.trim();
    if trimmed.is_empty() {
        "Cash".to_string()
    } else {
        trimmed.to_string()
    }
}

fn escape_field(field: &str) -> String {
    field.replace(FIELD_SEPARATOR, &SEPARATOR_SUBSTITUTE.to_string())
}

fn unescape_field(field: &str) -> String {
    field.replace(SEPARATOR_SUBSTITUTE, &FIELD_SEPARATOR.to_string())
}
