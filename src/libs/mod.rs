//! Core library modules for taskdash.
//!
//! ## Layers
//!
//! - **Model**: [`task`], [`seed`], [`error`]
//! - **Persistence**: [`storage`] on top of [`crate::db::kv`]
//! - **State**: [`store`], the single writer of the task collection
//! - **View**: [`projection`] (pure filter + sort) and [`dashboard`]
//!   (render coordinator), drawn by [`view`] in the terminal
//! - **Infrastructure**: [`config`], [`data_storage`], [`messages`]
//!
//! ## Usage
//!
//! ```rust
//! use taskdash::db::kv::MemoryStore;
//! use taskdash::libs::projection::project;
//! use taskdash::libs::storage::TaskStorage;
//! use taskdash::libs::store::TaskStore;
//! use taskdash::libs::task::TaskFilter;
//!
//! let mut store = TaskStore::open(TaskStorage::new(MemoryStore::new()));
//! store.toggle_status(1);
//! let done = project(store.tasks(), TaskFilter::Completed, true);
//! assert_eq!(done.len(), 2);
//! ```

pub mod config;
pub mod dashboard;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod projection;
pub mod seed;
pub mod storage;
pub mod store;
pub mod task;
pub mod view;
