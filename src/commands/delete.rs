//! Delete a student record by roll number.
//!
//! The delete is immediate and irreversible, so a confirmation prompt
//! guards it unless `--yes` is given. A missing or non-numeric roll number
//! skips the prompt and lets the service report the proper error.

use crate::db::students::Students;
use crate::libs::messages::Message;
use crate::libs::service;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Roll number of the record to delete
    roll: Option<String>,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(delete_args: DeleteArgs) -> Result<()> {
    if !delete_args.yes {
        if let Some(Ok(roll_no)) = delete_args.roll.as_deref().map(|raw| raw.trim().parse::<i64>()) {
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::ConfirmDeleteStudent(roll_no).to_string())
                .default(false)
                .interact()?;
            if !confirmed {
                msg_info!(Message::DeleteCancelled);
                return Ok(());
            }
        }
    }

    match Students::new().and_then(|mut store| service::delete(&mut store, delete_args.roll.as_deref())) {
        Ok(roll_no) => msg_success!(Message::StudentDeleted(roll_no)),
        Err(e) => msg_error!(e),
    }

    Ok(())
}
