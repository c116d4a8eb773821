//! Display implementation for application messages.
//!
//! Single source of truth for all user-facing text. Messages with dynamic
//! content interpolate their typed parameters here, so call sites never
//! build display strings by hand.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === STUDENT MESSAGES ===
            Message::StudentAdded(roll) => format!("Student {} added successfully", roll),
            Message::StudentUpdated(roll) => format!("Student {} updated successfully", roll),
            Message::StudentDeleted(roll) => format!("Student {} deleted successfully", roll),
            Message::StudentsDisplayed(count) => format!("{} record(s) displayed", count),
            Message::NoStudentsFound => "No records found".to_string(),
            Message::ConfirmDeleteStudent(roll) => format!("Delete student with roll number {}?", roll),
            Message::DeleteCancelled => "Delete cancelled".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path, count) => format!("{} record(s) exported to {}", count, path),
            Message::NothingToExport => "No student records found to export".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigInitHeader => "Roster configuration".to_string(),
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::DatabaseReady(path) => format!("Student database ready at {}", path),
            Message::PromptConfigureExport => "Configure export defaults?".to_string(),
            Message::PromptExportDir => "Export directory".to_string(),
            Message::PromptExportFormat => "Default export format".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration {} ({})", version, name),
            Message::MigrationCompleted(version) => format!("Migration {} completed", version),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::MigrationFailed(version, error) => format!("Migration {} failed: {}", version, error),
        };
        write!(f, "{}", text)
    }
}
