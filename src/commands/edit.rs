use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::{parse_due_date, TaskId, TaskPatch, ISO_DATE};
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    id: TaskId,
    /// New task name
    #[arg(short, long)]
    name: Option<String>,
    /// New due date (YYYY-MM-DD)
    #[arg(short, long, conflicts_with = "clear_due")]
    due: Option<String>,
    /// Remove the due date
    #[arg(long)]
    clear_due: bool,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let config = Config::read()?;
    let mut store = super::open_store(&config)?;

    let Some(task) = store.get(args.id).cloned() else {
        msg_error!(Message::TaskNotFound(args.id));
        return Ok(());
    };

    let (name, due_date) = if args.name.is_none() && args.due.is_none() && !args.clear_due {
        msg_print!(Message::EditingTask(task.name.clone()), true);
        let theme = ColorfulTheme::default();

        let name: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptTaskName.to_string())
            .default(task.name.clone())
            .interact_text()?;
        let due: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptDueDate.to_string())
            .default(task.due_date.map(|date| date.format(ISO_DATE).to_string()).unwrap_or_default())
            .allow_empty(true)
            .validate_with(|input: &String| parse_due_date(input).map(|_| ()))
            .interact_text()?;

        (name, parse_due_date(&due)?)
    } else {
        let name = args.name.unwrap_or_else(|| task.name.clone());
        let due_date = if args.clear_due {
            None
        } else {
            super::parse_due(args.due.as_deref())?.or(task.due_date)
        };
        (name, due_date)
    };

    // The store applies names verbatim, so the empty check happens here.
    let name = name.trim().to_string();
    if name.is_empty() {
        msg_error!(Message::TaskNameEmpty);
        return Ok(());
    }

    let patch = TaskPatch {
        name: (name != task.name).then(|| name.clone()),
        due_date: (due_date != task.due_date).then_some(due_date),
    };
    if patch.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    store.update(task.id, patch);
    msg_success!(Message::TaskUpdated(name));

    Ok(())
}
