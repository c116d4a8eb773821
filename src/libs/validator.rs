//! Form field validation.
//!
//! Checks run before any storage call: a form that fails here never reaches
//! the database.

use crate::libs::error::AppError;
use crate::libs::student::StudentForm;

/// Checks that all 15 fields are filled in.
///
/// Fields are checked in declared order and only the first blank one is
/// reported, so the user always sees one deterministic message at a time.
/// Whitespace-only input counts as blank, matching what would otherwise be
/// stored after trimming.
pub fn require_all(form: &StudentForm) -> Result<(), AppError> {
    for (label, value) in form.fields() {
        if value.trim().is_empty() {
            return Err(AppError::MissingField(label));
        }
    }
    Ok(())
}

/// Parses a numeric field as an integer.
///
/// Empty, decimal, and alphabetic input all fail; the label names the
/// offending field in the error.
pub fn parse_numeric(label: &'static str, value: &str) -> Result<i64, AppError> {
    value.trim().parse::<i64>().map_err(|_| AppError::NotNumeric(label))
}
