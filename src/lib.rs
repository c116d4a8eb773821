//! # Roster - Local Student Records Manager
//!
//! A command-line utility for keeping a register of student records in a
//! local SQLite database, with validated create/read/update/delete
//! operations and spreadsheet export.
//!
//! ## Features
//!
//! - **Validated records**: all 15 fields required, numeric keys checked
//!   before any storage operation
//! - **CRUD operations**: add, list, update, and delete keyed by roll number
//! - **Data export**: CSV and Excel output with a fixed column order
//! - **Interactive forms**: field prompts, with edits pre-filled from the
//!   stored record
//!
//! ## Usage
//!
//! ```rust,no_run
//! use roster::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
