//! First-time setup command.
//!
//! Runs the interactive configuration wizard and opens the database once so
//! the schema exists before the first record operation.

use crate::db::db::{Db, DB_FILE_NAME};
use crate::libs::{config::Config, data_storage::DataStorage, messages::Message};
use crate::{msg_error, msg_success};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    Config::init()?.save()?;
    msg_success!(Message::ConfigSaved);

    match Db::new() {
        Ok(_) => {
            let db_path = DataStorage::new().get_path(DB_FILE_NAME)?;
            msg_success!(Message::DatabaseReady(db_path.display().to_string()));
        }
        Err(e) => msg_error!(e),
    }

    Ok(())
}
