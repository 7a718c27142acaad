//! Storage adapter between the task collection and a [`KeyValueStore`].
//!
//! The whole collection lives as one JSON array under a single key
//! ([`DEFAULT_STORAGE_KEY`] unless configured otherwise). Neither loading
//! nor saving ever fails towards the caller; problems become warnings
//! printed through `msg_warning!`.
//!
//! ## Load Outcomes
//!
//! | Stored record                  | Result          | Written back |
//! |--------------------------------|-----------------|--------------|
//! | valid JSON array of tasks      | stored tasks    | no           |
//! | absent                         | sample tasks    | yes          |
//! | not a JSON array of tasks      | sample tasks    | yes          |
//! | backend read error             | sample tasks    | no           |
//!
//! A failed read says nothing about what is stored, so the adapter goes
//! read-only until a later load succeeds: saves are skipped and the user's
//! record survives a locked or unreachable database.
//!
//! Records without a usable `createdAt` get the current time on load.
//!
//! ## Usage
//!
//! ```rust
//! use taskdash::db::kv::MemoryStore;
//! use taskdash::libs::storage::TaskStorage;
//!
//! let mut storage = TaskStorage::new(MemoryStore::new());
//! let mut tasks = storage.load(); // seeds five sample tasks
//! tasks.truncate(2);
//! storage.save(&tasks);
//! assert_eq!(storage.load().len(), 2);
//! ```

use super::error::StorageError;
use super::messages::Message;
use super::seed::sample_tasks;
use super::task::{now_millis, Task};
use crate::db::kv::KeyValueStore;
use crate::msg_warning;
use tracing::{debug, info};

pub const DEFAULT_STORAGE_KEY: &str = "task_dashboard_tasks_v1";

pub struct TaskStorage<S: KeyValueStore> {
    backend: S,
    key: String,
    writable: bool,
}

impl<S: KeyValueStore> TaskStorage<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            writable: true,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    pub fn into_inner(self) -> S {
        self.backend
    }

    /// False after a load could not read the backend.
    pub fn is_writable(&self) -> bool {
        self.writable
    }

    /// Loads the stored collection, reseeding on absence or corruption.
    pub fn load(&mut self) -> Vec<Task> {
        let result = self.read();
        self.writable = !matches!(result, Err(StorageError::Read(_)));

        match result {
            Ok(Some(tasks)) => {
                debug!(key = %self.key, count = tasks.len(), "Loaded stored tasks");
                tasks
            }
            Ok(None) => {
                info!(key = %self.key, "No stored tasks, seeding sample tasks");
                self.reseed()
            }
            Err(err @ StorageError::Corruption(_)) => {
                msg_warning!(Message::StoredTasksCorrupted(err.to_string()));
                self.reseed()
            }
            Err(err) => {
                msg_warning!(Message::StorageReadFailed(err.to_string()));
                sample_tasks()
            }
        }
    }

    /// Overwrites the stored record with `tasks`. Skipped while the
    /// adapter is read-only.
    pub fn save(&mut self, tasks: &[Task]) {
        if !self.writable {
            debug!(key = %self.key, "Stored tasks were never read, skipping save");
            return;
        }
        if let Err(err) = self.write(tasks) {
            msg_warning!(Message::StorageWriteFailed(err.to_string()));
        }
    }

    /// Drops the stored record and loads again, which yields a fresh seed.
    pub fn reset(&mut self) -> Vec<Task> {
        if let Err(err) = self.backend.remove(&self.key) {
            msg_warning!(Message::StorageWriteFailed(err.to_string()));
        }
        self.load()
    }

    fn read(&self) -> Result<Option<Vec<Task>>, StorageError> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(None);
        };

        let mut tasks: Vec<Task> = serde_json::from_str(&raw)?;
        backfill_created_at(&mut tasks);
        Ok(Some(tasks))
    }

    fn write(&mut self, tasks: &[Task]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(tasks).map_err(|e| StorageError::Write(e.to_string()))?;
        self.backend.set(&self.key, &raw)?;
        debug!(key = %self.key, count = tasks.len(), "Saved tasks");
        Ok(())
    }

    fn reseed(&mut self) -> Vec<Task> {
        let tasks = sample_tasks();
        self.save(&tasks);
        tasks
    }
}

/// Legacy records may lack a creation time; they get the current one.
fn backfill_created_at(tasks: &mut [Task]) {
    let now = now_millis();
    for task in tasks.iter_mut().filter(|task| task.created_at == 0) {
        task.created_at = now;
    }
}
