use crate::libs::{config::Config, messages::Message};
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(required = true)]
    name: String,
    /// Due date (YYYY-MM-DD)
    #[arg(short, long)]
    due: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let config = Config::read()?;
    let due_date = super::parse_due(args.due.as_deref())?;
    let mut store = super::open_store(&config)?;

    match store.create(&args.name, due_date) {
        Ok(task) => msg_success!(Message::TaskCreated(task.name)),
        Err(_) => msg_error!(Message::TaskNameEmpty),
    }

    Ok(())
}
