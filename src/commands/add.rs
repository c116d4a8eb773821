//! Add a student record.
//!
//! Every field can be given as a flag; anything not supplied is collected
//! with an interactive prompt. Empty answers are allowed here on purpose —
//! the validator owns the required-field message, so the user gets the same
//! feedback no matter how the value arrived.

use crate::db::students::Students;
use crate::libs::messages::Message;
use crate::libs::service;
use crate::libs::student::{StudentForm, PHONE_LABEL, ROLL_LABEL};
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Student name
    #[arg(long)]
    name: Option<String>,
    /// Roll number (the record key)
    #[arg(long)]
    roll: Option<String>,
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

pub fn cmd(add_args: AddArgs) -> Result<()> {
    let form = collect_form(add_args)?;

    match Students::new().and_then(|mut store| service::add(&mut store, &form)) {
        Ok(student) => msg_success!(Message::StudentAdded(student.roll_no)),
        Err(e) => msg_error!(e),
    }

    Ok(())
}

/// Builds the form from flags, prompting for anything missing. Prompts run
/// in declared field order.
fn collect_form(add_args: AddArgs) -> Result<StudentForm> {
    Ok(StudentForm {
        name: field_value(add_args.name, "Student name")?,
        roll_no: field_value(add_args.roll, ROLL_LABEL)?,
        branch: field_value(add_args.branch, "Branch")?,
        phone: field_value(add_args.phone, PHONE_LABEL)?,
        father: field_value(add_args.father, "Father name")?,
        address: field_value(add_args.address, "Address")?,
        blood_group: field_value(add_args.blood_group, "Blood Group")?,
        mother_name: field_value(add_args.mother, "Mother Name")?,
        community: field_value(add_args.community, "Community")?,
        email: field_value(add_args.email, "Email")?,
        aadhar: field_value(add_args.aadhar, "Aadhar Card")?,
        hostel_status: field_value(add_args.hostel, "Hostel/Day Scholar")?,
        bank_account: field_value(add_args.bank, "Bank Account Number")?,
        dob: field_value(add_args.dob, "Date of Birth")?,
        medium: field_value(add_args.medium, "Medium")?,
    })
}

fn field_value(flag: Option<String>, label: &str) -> Result<String> {
    match flag {
        Some(value) => Ok(value),
        None => Ok(Input::with_theme(&ColorfulTheme::default())
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?),
    }
}
