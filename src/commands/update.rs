//! Update a student record, keyed by roll number.
//!
//! The stored record pre-fills whatever is not supplied: with field flags
//! the merge is silent, without any flags each field is offered for editing
//! with its current value as the prompt default. Either way the service
//! receives a complete 15-field form and overwrites the record wholesale.

use crate::db::students::Students;
use crate::libs::error::AppError;
use crate::libs::messages::Message;
use crate::libs::service;
use crate::libs::student::{Student, StudentForm, PHONE_LABEL, ROLL_LABEL};
use crate::libs::validator;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Roll number of the record to update
    #[arg(required = true)]
    roll: String,
    /// Student name
    #[arg(long)]
    name: Option<String>,
    /// Branch
    #[arg(long)]
    branch: Option<String>,
    /// Phone number
    #[arg(long)]
    phone: Option<String>,
    /// Father name
    #[arg(long)]
    father: Option<String>,
    /// Address
    #[arg(long)]
    address: Option<String>,
    /// Blood group
    #[arg(long)]
    blood_group: Option<String>,
    /// Mother name
    #[arg(long)]
    mother: Option<String>,
    /// Community
    #[arg(long)]
    community: Option<String>,
    /// Email address
    #[arg(long)]
    email: Option<String>,
    /// Aadhar card number
    #[arg(long)]
    aadhar: Option<String>,
    /// Hostel or day scholar
    #[arg(long)]
    hostel: Option<String>,
    /// Bank account number
    #[arg(long)]
    bank: Option<String>,
    /// Date of birth
    #[arg(long)]
    dob: Option<String>,
    /// Medium of instruction
    #[arg(long)]
    medium: Option<String>,
}

impl UpdateArgs {
    fn has_field_flags(&self) -> bool {
        self.name.is_some()
            || self.branch.is_some()
            || self.phone.is_some()
            || self.father.is_some()
            || self.address.is_some()
            || self.blood_group.is_some()
            || self.mother.is_some()
            || self.community.is_some()
            || self.email.is_some()
            || self.aadhar.is_some()
            || self.hostel.is_some()
            || self.bank.is_some()
            || self.dob.is_some()
            || self.medium.is_some()
    }
}

pub fn cmd(update_args: UpdateArgs) -> Result<()> {
    let mut store = match Students::new() {
        Ok(store) => store,
        Err(e) => {
            msg_error!(e);
            return Ok(());
        }
    };

    let current = match fetch_current(&mut store, &update_args.roll) {
        Ok(student) => student,
        Err(e) => {
            msg_error!(e);
            return Ok(());
        }
    };

    let form = merge_form(update_args, &current)?;

    match service::update(&mut store, &form) {
        Ok(student) => msg_success!(Message::StudentUpdated(student.roll_no)),
        Err(e) => msg_error!(e),
    }

    Ok(())
}

fn fetch_current(store: &mut Students, roll: &str) -> Result<Student, AppError> {
    let roll_no = validator::parse_numeric(ROLL_LABEL, roll)?;
    store.fetch(roll_no)?.ok_or(AppError::NotFound(roll_no))
}

/// Produces the complete form the service will apply.
///
/// Starts from the stored record (the form round-trips exactly the 15
/// values on display), keeps the key from the command line, then either
/// overlays the given flags or walks the 14 editable fields interactively.
fn merge_form(update_args: UpdateArgs, current: &Student) -> Result<StudentForm> {
    let mut form = current.to_form();
    form.roll_no = update_args.roll.clone();

    if update_args.has_field_flags() {
        let UpdateArgs {
            roll: _,
            name,
            branch,
            phone,
            father,
            address,
            blood_group,
            mother,
            community,
            email,
            aadhar,
            hostel,
            bank,
            dob,
            medium,
        } = update_args;

        if let Some(value) = name {
            form.name = value;
        }
        if let Some(value) = branch {
            form.branch = value;
        }
        if let Some(value) = phone {
            form.phone = value;
        }
        if let Some(value) = father {
            form.father = value;
        }
        if let Some(value) = address {
            form.address = value;
        }
        if let Some(value) = blood_group {
            form.blood_group = value;
        }
        if let Some(value) = mother {
            form.mother_name = value;
        }
        if let Some(value) = community {
            form.community = value;
        }
        if let Some(value) = email {
            form.email = value;
        }
        if let Some(value) = aadhar {
            form.aadhar = value;
        }
        if let Some(value) = hostel {
            form.hostel_status = value;
        }
        if let Some(value) = bank {
            form.bank_account = value;
        }
        if let Some(value) = dob {
            form.dob = value;
        }
        if let Some(value) = medium {
            form.medium = value;
        }
    } else {
        form.name = prompt_with_current("Student name", &form.name)?;
        form.branch = prompt_with_current("Branch", &form.branch)?;
        form.phone = prompt_with_current(PHONE_LABEL, &form.phone)?;
        form.father = prompt_with_current("Father name", &form.father)?;
        form.address = prompt_with_current("Address", &form.address)?;
        form.blood_group = prompt_with_current("Blood Group", &form.blood_group)?;
        form.mother_name = prompt_with_current("Mother Name", &form.mother_name)?;
        form.community = prompt_with_current("Community", &form.community)?;
        form.email = prompt_with_current("Email", &form.email)?;
        form.aadhar = prompt_with_current("Aadhar Card", &form.aadhar)?;
        form.hostel_status = prompt_with_current("Hostel/Day Scholar", &form.hostel_status)?;
        form.bank_account = prompt_with_current("Bank Account Number", &form.bank_account)?;
        form.dob = prompt_with_current("Date of Birth", &form.dob)?;
        form.medium = prompt_with_current("Medium", &form.medium)?;
    }

    Ok(form)
}

/// Prompts for one field with the stored value as the default, so pressing
/// enter keeps the record unchanged.
fn prompt_with_current(label: &str, current: &str) -> Result<String> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .default(current.to_string())
        .interact_text()?)
}
