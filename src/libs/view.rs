use super::dashboard::{RenderFrame, Surface};
use super::messages::Message;
use super::task::{Task, TaskFilter};
use crate::{msg_error, msg_info, msg_print};
use dialoguer::{theme::ColorfulTheme, Confirm};
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints a frame: filter bar, sort label and the task table, or the
    /// empty-state line when nothing is visible.
    pub fn frame(frame: &RenderFrame<'_>, date_format: &str) {
        msg_print!(
            format!("{}    {}", Self::filter_bar(frame), frame.sort_label()),
            true
        );

        if frame.is_empty() {
            msg_info!(Message::NoTasksToShow);
        } else {
            Self::tasks(&frame.tasks, date_format);
        }

        if let Some(draft) = frame.edit {
            msg_print!(Message::EditingTask(draft.name.clone()), true);
        }
    }

    pub fn tasks(tasks: &[&Task], date_format: &str) {
        let mut table = Table::new();

        table.add_row(row!["ID", "DONE", "NAME", "DUE"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                if task.is_completed() { "[x]" } else { "[ ]" },
                task.name,
                Self::due_label(task, date_format)
            ]);
        }
        table.printstd();
    }

    /// `[All]  Pending  Completed` with the active filter bracketed.
    pub fn filter_bar(frame: &RenderFrame<'_>) -> String {
        TaskFilter::ALL
            .iter()
            .map(|&filter| {
                if frame.is_active(filter) {
                    format!("[{}]", filter.label())
                } else {
                    format!(" {} ", filter.label())
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn due_label(task: &Task, date_format: &str) -> String {
        match task.due_date {
            Some(date) => Message::DueOn(date.format(date_format).to_string()).to_string(),
            None => Message::NoDueDate.to_string(),
        }
    }
}

/// Surface drawing to the terminal and asking questions with `dialoguer`.
pub struct TerminalSurface {
    date_format: String,
    assume_yes: bool,
}

impl TerminalSurface {
    pub fn new(date_format: &str) -> Self {
        Self {
            date_format: date_format.to_string(),
            assume_yes: false,
        }
    }

    /// Answers every confirmation with "yes" (for `--yes` flags).
    pub fn assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }
}

impl Surface for TerminalSurface {
    fn render(&mut self, frame: &RenderFrame<'_>) {
        View::frame(frame, &self.date_format);
    }

    fn alert(&mut self, message: &Message) {
        msg_error!(message);
    }

    fn confirm(&mut self, message: &Message) -> bool {
        if self.assume_yes {
            return true;
        }

        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(message.to_string())
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}
