//! Typed errors for the record, storage, and export layers.
//!
//! Uses `thiserror` for library errors (commands wrap them in `anyhow`)
//! so callers and tests can match on the exact failure kind.

use thiserror::Error;

/// Errors surfaced by the student register.
///
/// Every operation recovers these at the command boundary into a single
/// status line; none of them terminate the process.
#[derive(Debug, Error)]
pub enum AppError {
    /// The database file could not be opened or brought up to date
    #[error("cannot open the student database: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A required form field was left blank; carries the field label
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Roll number or phone number did not parse as an integer
    #[error("{0} must be numeric")]
    NotNumeric(&'static str),

    /// Insert with a roll number that already exists
    #[error("roll number {0} already exists")]
    DuplicateRoll(i64),

    /// Delete was invoked without a roll number
    #[error("roll number is required to delete")]
    MissingRoll,

    /// Update or delete addressed a roll number with no stored record
    #[error("no student found with roll number {0}")]
    NotFound(i64),

    /// Unexpected store fault
    #[error("database operation failed: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Export file could not be written; the store is unaffected
    #[error("failed to write export file: {0}")]
    Export(String),
}
