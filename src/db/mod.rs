//! Durable key-value storage for the task collection.
//!
//! The task collection is kept as one JSON document under a fixed key. Two
//! backends implement [`kv::KeyValueStore`]:
//!
//! - **[`kv::SqliteStore`]**: a `kv` table in the application SQLite database
//! - **[`kv::MemoryStore`]**: an in-process map for tests and throwaway sessions
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdash::db::{db::Db, kv::{KeyValueStore, SqliteStore}};
//!
//! let mut store = SqliteStore::new(Db::new()?)?;
//! store.set("greeting", "hello")?;
//! assert_eq!(store.get("greeting")?.as_deref(), Some("hello"));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod db;
pub mod kv;
