//! List all student records, ordered by roll number.

use crate::db::students::Students;
use crate::libs::messages::Message;
use crate::libs::service::{self, ListOutcome};
use crate::libs::view::View;
use crate::{msg_error, msg_success, msg_warning};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    match Students::new().and_then(|mut store| service::view_all(&mut store)) {
        Ok(ListOutcome::Rows(students)) => {
            View::students(&students);
            msg_success!(Message::StudentsDisplayed(students.len()));
        }
        Ok(ListOutcome::Empty) => msg_warning!(Message::NoStudentsFound),
        Err(e) => msg_error!(e),
    }

    Ok(())
}
