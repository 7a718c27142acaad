use crate::libs::{config::Config, messages::Message, task::TaskId};
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    id: TaskId,
}

pub fn cmd(args: ToggleArgs) -> Result<()> {
    let config = Config::read()?;
    let mut store = super::open_store(&config)?;

    let Some(status) = store.toggle_status(args.id) else {
        msg_error!(Message::TaskNotFound(args.id));
        return Ok(());
    };

    let name = store.get(args.id).map(|task| task.name.clone()).unwrap_or_default();
    if status.is_completed() {
        msg_success!(Message::TaskCompleted(name));
    } else {
        msg_success!(Message::TaskReopened(name));
    }

    Ok(())
}
