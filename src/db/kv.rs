use super::db::Db;
use crate::libs::error::StorageError;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;

const SCHEMA_KV: &str = "CREATE TABLE IF NOT EXISTS kv (
    key TEXT NOT NULL PRIMARY KEY,
    value TEXT NOT NULL
);";
const SELECT_VALUE: &str = "SELECT value FROM kv WHERE key = ?";
const UPSERT_VALUE: &str = "INSERT INTO kv (key, value) VALUES (?, ?) ON CONFLICT(key) DO UPDATE SET value = excluded.value";
const DELETE_VALUE: &str = "DELETE FROM kv WHERE key = ?";

/// A durable string-to-string store addressed by fixed keys.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Key-value table inside the application's SQLite database.
pub struct SqliteStore {
    pub conn: Connection,
}

impl SqliteStore {
    pub fn new(db: Db) -> anyhow::Result<SqliteStore> {
        db.conn.execute(SCHEMA_KV, [])?;

        Ok(SqliteStore { conn: db.conn })
    }

    /// Opens the store in the default database file of the data directory.
    pub fn open_default(file_name: &str) -> anyhow::Result<SqliteStore> {
        Self::new(Db::with_file_name(file_name)?)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.conn
            .query_row(SELECT_VALUE, params![key], |row| row.get(0))
            .optional()
            .map_err(|e| StorageError::Read(e.to_string()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn
            .execute(UPSERT_VALUE, params![key, value])
            .map_err(|e| StorageError::Write(e.to_string()))?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute(DELETE_VALUE, params![key])
            .map_err(|e| StorageError::Write(e.to_string()))?;

        Ok(())
    }
}

/// Process-local store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}
