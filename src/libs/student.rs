//! Student record types and the declared field order.
//!
//! Two shapes exist on purpose: [`StudentForm`] holds the 15 raw strings as
//! the user entered them and is what the service validates, while [`Student`]
//! is the typed record that reaches the database. Field order is declared
//! once here and everything else (validation messages, table headers, export
//! columns) follows it.

/// Column headers for display and export, in declared order.
pub const COLUMNS: [&str; 15] = [
    "NAME",
    "ROLL_NO",
    "BRANCH",
    "PHONE_NO",
    "FATHER",
    "ADDRESS",
    "BLOOD_GROUP",
    "MOTHER_NAME",
    "COMMUNITY",
    "EMAIL",
    "AADHAR",
    "HOSTEL_STATUS",
    "BANK_ACCOUNT",
    "DOB",
    "MEDIUM",
];

/// A validated student record as stored in the register.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub name: String,
    pub roll_no: i64,
    pub branch: String,
    pub phone: i64,
    pub father: String,
    pub address: String,
    pub blood_group: String,
    pub mother_name: String,
    pub community: String,
    pub email: String,
    pub aadhar: String,
    pub hostel_status: String,
    pub bank_account: String,
    pub dob: String,
    pub medium: String,
}

impl Student {
    /// The record's 15 values as display/export strings, in [`COLUMNS`] order.
    pub fn columns(&self) -> [String; 15] {
        [
            self.name.clone(),
            self.roll_no.to_string(),
            self.branch.clone(),
            self.phone.to_string(),
            self.father.clone(),
            self.address.clone(),
            self.blood_group.clone(),
            self.mother_name.clone(),
            self.community.clone(),
            self.email.clone(),
            self.aadhar.clone(),
            self.hostel_status.clone(),
            self.bank_account.clone(),
            self.dob.clone(),
            self.medium.clone(),
        ]
    }

    /// Converts the record back into a form.
    ///
    /// Used to pre-fill edit prompts: the form reproduces exactly the 15
    /// values shown for this record, so an edit started from a stored row
    /// and saved unchanged is a no-op.
    pub fn to_form(&self) -> StudentForm {
        StudentForm {
            name: self.name.clone(),
            roll_no: self.roll_no.to_string(),
            branch: self.branch.clone(),
            phone: self.phone.to_string(),
            father: self.father.clone(),
            address: self.address.clone(),
            blood_group: self.blood_group.clone(),
            mother_name: self.mother_name.clone(),
            community: self.community.clone(),
            email: self.email.clone(),
            aadhar: self.aadhar.clone(),
            hostel_status: self.hostel_status.clone(),
            bank_account: self.bank_account.clone(),
            dob: self.dob.clone(),
            medium: self.medium.clone(),
        }
    }
}

/// Raw form input: the 15 fields as entered, before validation.
#[derive(Debug, Default, Clone)]
pub struct StudentForm {
    pub name: String,
    pub roll_no: String,
    pub branch: String,
    pub phone: String,
    pub father: String,
    pub address: String,
    pub blood_group: String,
    pub mother_name: String,
    pub community: String,
    pub email: String,
    pub aadhar: String,
    pub hostel_status: String,
    pub bank_account: String,
    pub dob: String,
    pub medium: String,
}

/// User-facing label of the roll number field.
pub const ROLL_LABEL: &str = "Roll no";
/// User-facing label of the phone number field.
pub const PHONE_LABEL: &str = "Phone number";

impl StudentForm {
    /// Labelled field values in declared order.
    ///
    /// The validator walks this array front to back, so the order here is
    /// what decides which missing field gets reported first.
    pub fn fields(&self) -> [(&'static str, &str); 15] {
        [
            ("Student name", &self.name),
            (ROLL_LABEL, &self.roll_no),
            ("Branch", &self.branch),
            (PHONE_LABEL, &self.phone),
            ("Father name", &self.father),
            ("Address", &self.address),
            ("Blood Group", &self.blood_group),
            ("Mother Name", &self.mother_name),
            ("Community", &self.community),
            ("Email", &self.email),
            ("Aadhar Card", &self.aadhar),
            ("Hostel/Day Scholar", &self.hostel_status),
            ("Bank Account Number", &self.bank_account),
            ("Date of Birth", &self.dob),
            ("Medium", &self.medium),
        ]
    }
}
