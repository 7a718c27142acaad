pub mod add;
pub mod dash;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod reset;
pub mod toggle;

use crate::db::kv::SqliteStore;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::storage::TaskStorage;
use crate::libs::store::TaskStore;
use crate::libs::task::parse_due_date;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "Show tasks, filtered and sorted by due date")]
    List(list::ListArgs),
    #[command(about = "Edit a task's name or due date")]
    Edit(edit::EditArgs),
    #[command(about = "Mark a task completed, or pending again")]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Remove all saved tasks and restore the sample tasks")]
    Reset(reset::ResetArgs),
    #[command(about = "Interactive task dashboard")]
    Dash,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Toggle(args) => toggle::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Reset(args) => reset::cmd(args),
            Commands::Dash => dash::cmd(),
        }
    }
}

/// Opens the task store configured in `config`.
pub fn open_store(config: &Config) -> Result<TaskStore<SqliteStore>> {
    let backend = SqliteStore::open_default(&config.database)?;
    Ok(TaskStore::open(TaskStorage::with_key(backend, config.storage_key.as_str())))
}

/// Parses an optional `--due` argument.
pub fn parse_due(input: Option<&str>) -> Result<Option<NaiveDate>> {
    match input {
        Some(input) => parse_due_date(input).map_err(|_| msg_error_anyhow!(Message::InvalidDueDate(input.to_string()))),
        None => Ok(None),
    }
}
