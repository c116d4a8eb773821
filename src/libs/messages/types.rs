/// Every user-facing message the application can emit.
///
/// Text lives in one place (the `Display` impl in `display.rs`); the rest of
/// the crate refers to messages by variant so wording changes never touch
/// call sites.
#[derive(Debug, Clone)]
pub enum Message {
    // === STUDENT MESSAGES ===
    StudentAdded(i64),
    StudentUpdated(i64),
    StudentDeleted(i64),
    StudentsDisplayed(usize),
    NoStudentsFound,
    ConfirmDeleteStudent(i64),
    DeleteCancelled,

    // === EXPORT MESSAGES ===
    ExportCompleted(String, usize), // path, record count
    NothingToExport,

    // === CONFIGURATION MESSAGES ===
    ConfigInitHeader,
    ConfigSaved,
    DatabaseReady(String), // path
    PromptConfigureExport,
    PromptExportDir,
    PromptExportFormat,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    AllMigrationsCompleted,
    MigrationFailed(u32, String),
}
