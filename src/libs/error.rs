//! Error types for the task core.
//!
//! Only [`ValidationError`] ever reaches callers of the task store. The
//! [`StorageError`] variants are produced by the key-value backends and the
//! storage adapter, which absorbs them as warnings so a broken durable store
//! never interrupts the render cycle.

use thiserror::Error;

/// Rejection of user input before any state is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("task name cannot be empty")]
    EmptyName,
}

#[derive(Debug, Error)]
pub enum StorageError {
    /// The stored record exists but is not a JSON array of task objects.
    #[error("stored tasks are corrupted: {0}")]
    Corruption(#[from] serde_json::Error),

    #[error("failed to read from the task store: {0}")]
    Read(String),

    #[error("failed to write to the task store: {0}")]
    Write(String),
}
