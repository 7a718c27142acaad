use crate::db::kv::SqliteStore;
use crate::libs::config::Config;
use crate::libs::dashboard::Dashboard;
use crate::libs::messages::Message;
use crate::libs::task::{parse_due_date, TaskFilter, TaskId, ISO_DATE};
use crate::libs::view::TerminalSurface;
use crate::{msg_info, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

type TerminalDashboard = Dashboard<SqliteStore, TerminalSurface>;

#[derive(Debug, Clone, Copy)]
enum Action {
    Add,
    Toggle,
    Edit,
    Delete,
    Filter,
    Sort,
    Reset,
    Quit,
}

impl Action {
    const MENU: [Action; 8] = [
        Action::Add,
        Action::Toggle,
        Action::Edit,
        Action::Delete,
        Action::Filter,
        Action::Sort,
        Action::Reset,
        Action::Quit,
    ];

    fn label(self) -> Message {
        match self {
            Action::Add => Message::DashActionAdd,
            Action::Toggle => Message::DashActionToggle,
            Action::Edit => Message::DashActionEdit,
            Action::Delete => Message::DashActionDelete,
            Action::Filter => Message::DashActionFilter,
            Action::Sort => Message::DashActionSort,
            Action::Reset => Message::DashActionReset,
            Action::Quit => Message::DashActionQuit,
        }
    }
}

/// Event loop of the interactive dashboard. Escape closes the menu.
pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let store = super::open_store(&config)?;
    let mut dashboard = Dashboard::with_view(store, TerminalSurface::new(config.date_format()), config.view_state());
    let theme = ColorfulTheme::default();

    loop {
        let labels: Vec<String> = Action::MENU.iter().map(|action| action.label().to_string()).collect();
        let Some(choice) = Select::with_theme(&theme)
            .with_prompt(Message::DashChooseAction.to_string())
            .items(&labels)
            .default(0)
            .interact_opt()?
        else {
            break;
        };

        match Action::MENU[choice] {
            Action::Add => add(&mut dashboard, &theme)?,
            Action::Toggle => {
                if let Some(id) = select_task(&dashboard, &theme)? {
                    dashboard.toggle(id);
                }
            }
            Action::Edit => {
                if let Some(id) = select_task(&dashboard, &theme)? {
                    edit(&mut dashboard, &theme, id)?;
                }
            }
            Action::Delete => {
                if let Some(id) = select_task(&dashboard, &theme)? {
                    dashboard.request_delete(id);
                }
            }
            Action::Filter => select_filter(&mut dashboard, &theme)?,
            Action::Sort => dashboard.toggle_sort(),
            Action::Reset => {
                dashboard.reset_storage();
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

fn add(dashboard: &mut TerminalDashboard, theme: &ColorfulTheme) -> Result<()> {
    let name: String = Input::with_theme(theme)
        .with_prompt(Message::PromptTaskName.to_string())
        .allow_empty(true)
        .interact_text()?;
    let due = prompt_due(theme, String::new())?;

    // Empty names are reported by the dashboard's alert.
    if let Ok(task) = dashboard.create(&name, parse_due_date(&due)?) {
        msg_success!(Message::TaskCreated(task.name));
    }
    Ok(())
}

/// Keeps the editor open until it is saved with a valid name, cancelled,
/// or dismissed with Escape.
fn edit(dashboard: &mut TerminalDashboard, theme: &ColorfulTheme, id: TaskId) -> Result<()> {
    if !dashboard.open_edit(id) {
        return Ok(());
    }

    while let Some(draft) = dashboard.edit_flow().draft().cloned() {
        let name: String = Input::with_theme(theme)
            .with_prompt(Message::PromptTaskName.to_string())
            .default(draft.name)
            .allow_empty(true)
            .interact_text()?;
        let due = prompt_due(theme, draft.due_date.map(|date| date.format(ISO_DATE).to_string()).unwrap_or_default())?;

        let buttons = [Message::DashEditSave.to_string(), Message::DashEditCancel.to_string()];
        match Select::with_theme(theme).items(&buttons).default(0).interact_opt()? {
            Some(0) => {
                if let Ok(true) = dashboard.save_edit(&name, parse_due_date(&due)?) {
                    msg_success!(Message::TaskUpdated(name.trim().to_string()));
                }
            }
            Some(_) => {
                dashboard.cancel_edit();
                msg_info!(Message::EditCancelled);
            }
            None => dashboard.dismiss_edit(),
        }
    }

    Ok(())
}

fn prompt_due(theme: &ColorfulTheme, initial: String) -> Result<String> {
    let due = Input::with_theme(theme)
        .with_prompt(Message::PromptDueDate.to_string())
        .default(initial)
        .allow_empty(true)
        .validate_with(|input: &String| parse_due_date(input).map(|_| ()))
        .interact_text()?;

    Ok(due)
}

fn select_task(dashboard: &TerminalDashboard, theme: &ColorfulTheme) -> Result<Option<TaskId>> {
    let visible = dashboard.visible();
    if visible.is_empty() {
        msg_info!(Message::NoTasksToShow);
        return Ok(None);
    }

    let labels: Vec<String> = visible.iter().map(|task| format!("#{} {}", task.id, task.name)).collect();
    let choice = Select::with_theme(theme)
        .with_prompt(Message::PromptSelectTask.to_string())
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(choice.map(|index| visible[index].id))
}

fn select_filter(dashboard: &mut TerminalDashboard, theme: &ColorfulTheme) -> Result<()> {
    let labels: Vec<&str> = TaskFilter::ALL.iter().map(|filter| filter.label()).collect();
    let current = TaskFilter::ALL
        .iter()
        .position(|&filter| filter == dashboard.view().filter)
        .unwrap_or(0);

    if let Some(index) = Select::with_theme(theme)
        .with_prompt(Message::PromptSelectFilter.to_string())
        .items(&labels)
        .default(current)
        .interact_opt()?
    {
        dashboard.set_filter(TaskFilter::ALL[index]);
        msg_info!(Message::FilterChanged(TaskFilter::ALL[index].to_string()));
    }

    Ok(())
}
