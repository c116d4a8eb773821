//! The record service: add, view, update, and delete over the repository.
//!
//! Pure functions over explicit values — a [`StudentForm`] (or raw roll
//! number) in, a typed result out. No operation here owns interactive
//! state; the commands layer collects input and renders outcomes.

use crate::db::students::Students;
use crate::libs::error::AppError;
use crate::libs::student::{Student, StudentForm, PHONE_LABEL, ROLL_LABEL};
use crate::libs::validator;

/// Result of a view-all read. An empty table is a normal outcome, not an
/// error, and callers must be able to tell it apart from a failure.
#[derive(Debug)]
pub enum ListOutcome {
    Rows(Vec<Student>),
    Empty,
}

/// Validates the form and inserts a new record.
///
/// Fails with `DuplicateRoll` when the roll number is already taken; the
/// returned record is the success signal the presentation layer refreshes
/// on.
pub fn add(store: &mut Students, form: &StudentForm) -> Result<Student, AppError> {
    let student = student_from_form(form)?;
    store.insert(&student)?;

    Ok(student)
}

/// Snapshot of all records, ordered by roll number ascending.
pub fn view_all(store: &mut Students) -> Result<ListOutcome, AppError> {
    let students = store.fetch_all()?;
    if students.is_empty() {
        return Ok(ListOutcome::Empty);
    }

    Ok(ListOutcome::Rows(students))
}

/// Validates the form and overwrites the record with its roll number.
///
/// All 14 non-key fields are replaced unconditionally; there is no
/// partial-field update. Addressing a roll number with no stored record
/// fails with `NotFound` rather than silently succeeding.
pub fn update(store: &mut Students, form: &StudentForm) -> Result<Student, AppError> {
    let student = student_from_form(form)?;
    let affected = store.update(&student)?;
    if affected == 0 {
        return Err(AppError::NotFound(student.roll_no));
    }

    Ok(student)
}

/// Deletes the record with the given roll number.
///
/// The roll number must be present (`MissingRoll`) and integer-parseable
/// (`NotNumeric`); deleting a roll number with no stored record fails with
/// `NotFound`. The delete is immediate and irreversible.
pub fn delete(store: &mut Students, roll_no: Option<&str>) -> Result<i64, AppError> {
    let raw = match roll_no {
        Some(value) if !value.trim().is_empty() => value,
        _ => return Err(AppError::MissingRoll),
    };
    let roll_no = validator::parse_numeric(ROLL_LABEL, raw)?;

    let affected = store.delete(roll_no)?;
    if affected == 0 {
        return Err(AppError::NotFound(roll_no));
    }

    Ok(roll_no)
}

/// Runs the full validation pipeline and produces the typed record.
///
/// Required-field check first (first missing field in declared order wins),
/// then integer parsing for roll and phone. Text fields are stored trimmed.
fn student_from_form(form: &StudentForm) -> Result<Student, AppError> {
    validator::require_all(form)?;
    let roll_no = validator::parse_numeric(ROLL_LABEL, &form.roll_no)?;
    let phone = validator::parse_numeric(PHONE_LABEL, &form.phone)?;

    Ok(Student {
        name: form.name.trim().to_string(),
        roll_no,
        branch: form.branch.trim().to_string(),
        phone,
        father: form.father.trim().to_string(),
        address: form.address.trim().to_string(),
        blood_group: form.blood_group.trim().to_string(),
        mother_name: form.mother_name.trim().to_string(),
        community: form.community.trim().to_string(),
        email: form.email.trim().to_string(),
        aadhar: form.aadhar.trim().to_string(),
        hostel_status: form.hostel_status.trim().to_string(),
        bank_account: form.bank_account.trim().to_string(),
        dob: form.dob.trim().to_string(),
        medium: form.medium.trim().to_string(),
    })
}
