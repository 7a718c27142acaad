//! # taskdash - Task Dashboard
//!
//! A small task list manager: create, edit, complete, delete, filter and
//! sort tasks, persisted across sessions in a local key-value store.
//!
//! ## Features
//!
//! - **Task Store**: single owner of the task collection, persisting after every change
//! - **Self-healing Storage**: corrupt or missing data falls back to sample tasks
//! - **Projection**: pure filter + due-date sort with stable tie-breaks
//! - **Dashboard**: render coordinator with filter, sort and edit-flow state
//! - **Terminal Front-end**: one-shot subcommands and an interactive session
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdash::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
