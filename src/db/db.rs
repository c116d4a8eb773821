use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::AppError;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "roster.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the register database and brings the schema up to date.
    ///
    /// The file lives in the platform data directory. Pending migrations run
    /// once per open, inside a transaction, so the schema exists before any
    /// statement touches it. A connection that cannot be established aborts
    /// the operation with no partial state.
    pub fn new() -> Result<Db, AppError> {
        let db_file_path = DataStorage::new()
            .get_path(DB_FILE_NAME)
            .map_err(|e| AppError::Connection(Box::new(e)))?;
        let mut conn = Connection::open(db_file_path).map_err(|e| AppError::Connection(Box::new(e)))?;
        migrations::init_with_migrations(&mut conn).map_err(|e| AppError::Connection(e.into()))?;

        Ok(Db { conn })
    }
}
