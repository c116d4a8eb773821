//! Database layer for the student register.
//!
//! Built on SQLite through `rusqlite`: a connection/initialization module,
//! a versioned migration system, and the students repository that executes
//! the parameterized statements. Every operation is a single synchronous
//! round trip; connections are opened per operation scope and there is no
//! cross-call transaction.

/// Core database connection and initialization.
pub mod db;

/// Database schema migration system.
pub mod migrations;

/// Student record storage operations.
pub mod students;
