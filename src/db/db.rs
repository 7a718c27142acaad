use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "taskdash.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the default database in the application data directory.
    pub fn new() -> Result<Db> {
        Self::with_file_name(DB_FILE_NAME)
    }

    pub fn with_file_name(file_name: &str) -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(file_name)?;
        Self::open(db_file_path)
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db> {
        let conn = Connection::open(path)?;
        Ok(Db { conn })
    }

    pub fn in_memory() -> Result<Db> {
        let conn = Connection::open_in_memory()?;
        Ok(Db { conn })
    }
}
