//! Canonical in-memory task collection.
//!
//! [`TaskStore`] is the only writer of the collection. Each successful
//! mutation re-persists the whole collection through its [`TaskStorage`]
//! and then notifies every subscribed listener with a [`StoreEvent`].
//! Operations on an unknown id do nothing: no write, no notification.
//!
//! ## Operations and Events
//!
//! | Operation                     | Validation        | Event                 |
//! |-------------------------------|-------------------|-----------------------|
//! | [`TaskStore::create`]         | trimmed, nonempty | `Created(id)`         |
//! | [`TaskStore::update`]         | none              | `Updated(id)`         |
//! | [`TaskStore::delete`]         | none              | `Deleted(id)`         |
//! | [`TaskStore::toggle_status`]  | none              | `Toggled { id, .. }`  |
//! | [`TaskStore::reset`]          | none              | `Reset`               |
//!
//! Every operation also has a [`Command`] form for [`TaskStore::apply`], so
//! a front-end can queue or replay mutations without calling methods
//! directly.
//!
//! ## Id Assignment
//!
//! New ids are one past the highest id currently in the collection, or 1
//! for an empty collection. Gaps left by deletions are never refilled.
//!
//! ## Usage
//!
//! ```rust
//! use taskdash::db::kv::MemoryStore;
//! use taskdash::libs::storage::TaskStorage;
//! use taskdash::libs::store::TaskStore;
//!
//! let mut store = TaskStore::open(TaskStorage::new(MemoryStore::new()));
//! let task = store.create("  Water plants ", None).unwrap();
//! assert_eq!(task.name, "Water plants");
//! assert_eq!(task.id, 6); // after the five sample tasks
//! ```

use super::error::ValidationError;
use super::storage::TaskStorage;
use super::task::{Task, TaskId, TaskPatch, TaskStatus};
use crate::db::kv::KeyValueStore;
use chrono::NaiveDate;
use tracing::{debug, info};

/// A mutation request, decoupled from whichever UI produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create { name: String, due_date: Option<NaiveDate> },
    Update { id: TaskId, patch: TaskPatch },
    Delete { id: TaskId },
    Toggle { id: TaskId },
}

/// Emitted after a mutation has been applied and persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Created(TaskId),
    Updated(TaskId),
    Deleted(TaskId),
    Toggled { id: TaskId, status: TaskStatus },
    Reset,
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

pub struct TaskStore<S: KeyValueStore> {
    tasks: Vec<Task>,
    storage: TaskStorage<S>,
    listeners: Vec<Listener>,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Loads the collection from `storage` (seeding it if needed).
    pub fn open(mut storage: TaskStorage<S>) -> Self {
        let tasks = storage.load();
        debug!(count = tasks.len(), "Task store opened");

        Self {
            tasks,
            storage,
            listeners: Vec::new(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn storage(&self) -> &TaskStorage<S> {
        &self.storage
    }

    pub fn into_storage(self) -> TaskStorage<S> {
        self.storage
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// One past the highest id in the collection, or 1 when it is empty.
    pub fn next_id(&self) -> TaskId {
        self.tasks.iter().map(|task| task.id).max().map_or(1, |max| max + 1)
    }

    /// Adds a pending task. The name is trimmed and must not end up empty.
    pub fn create(&mut self, name: &str, due_date: Option<NaiveDate>) -> Result<Task, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let task = Task::new(self.next_id(), name, due_date);
        self.tasks.push(task.clone());
        self.commit(StoreEvent::Created(task.id));

        Ok(task)
    }

    /// Merges `patch` into the task as given.
    ///
    /// Unlike [`create`](Self::create) the name is neither trimmed nor
    /// checked here; callers must reject empty names themselves. Returns
    /// whether a task was updated.
    pub fn update(&mut self, id: TaskId, patch: TaskPatch) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };

        if let Some(name) = patch.name {
            task.name = name;
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = due_date;
        }
        self.commit(StoreEvent::Updated(id));

        true
    }

    /// Removes the task. Confirmation is up to the caller.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        let removed = self.tasks.remove(index);
        self.commit(StoreEvent::Deleted(id));

        Some(removed)
    }

    /// Flips pending and completed, returning the new status.
    pub fn toggle_status(&mut self, id: TaskId) -> Option<TaskStatus> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.status = task.status.toggled();
        let status = task.status;
        self.commit(StoreEvent::Toggled { id, status });

        Some(status)
    }

    /// Clears durable storage and replaces the collection with fresh samples.
    pub fn reset(&mut self) {
        self.tasks = self.storage.reset();
        info!(count = self.tasks.len(), "Task store reset to sample tasks");
        self.notify(&StoreEvent::Reset);
    }

    /// Runs a command, returning the event it produced, if any.
    pub fn apply(&mut self, command: Command) -> Result<Option<StoreEvent>, ValidationError> {
        let event = match command {
            Command::Create { name, due_date } => Some(StoreEvent::Created(self.create(&name, due_date)?.id)),
            Command::Update { id, patch } => self.update(id, patch).then_some(StoreEvent::Updated(id)),
            Command::Delete { id } => self.delete(id).map(|_| StoreEvent::Deleted(id)),
            Command::Toggle { id } => self.toggle_status(id).map(|status| StoreEvent::Toggled { id, status }),
        };

        Ok(event)
    }

    fn commit(&mut self, event: StoreEvent) {
        self.storage.save(&self.tasks);
        debug!(?event, "Task store changed");
        self.notify(&event);
    }

    fn notify(&mut self, event: &StoreEvent) {
        for listener in self.listeners.iter_mut() {
            listener(event);
        }
    }
}
