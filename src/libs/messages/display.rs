//! Human-readable text for every [`Message`] variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(name) => format!("Task '{}' created", name),
            Message::TaskUpdated(name) => format!("Task '{}' updated", name),
            Message::TaskDeleted(name) => format!("Task '{}' deleted", name),
            Message::TaskCompleted(name) => format!("Task '{}' marked as completed", name),
            Message::TaskReopened(name) => format!("Task '{}' marked as pending", name),
            Message::TaskNotFound(id) => format!("Task with ID {} not found", id),
            Message::TaskNameEmpty => "Task name cannot be empty.".to_string(),
            Message::InvalidDueDate(input) => format!("Invalid due date '{}', expected YYYY-MM-DD", input),
            Message::NoChangesDetected => "No changes detected".to_string(),
            Message::ConfirmDeleteTask(name) => format!("Delete task '{}'?", name),
            Message::NoTasksToShow => "No tasks to show".to_string(),
            Message::NoDueDate => "No due date".to_string(),
            Message::DueOn(date) => format!("Due: {}", date),

            // === VIEW MESSAGES ===
            Message::SortLabel(ascending) => format!("Sort: Date {}", if *ascending { "▲" } else { "▼" }),
            Message::FilterChanged(filter) => format!("Showing {} tasks", filter),

            // === EDIT MESSAGES ===
            Message::EditingTask(name) => format!("Editing task '{}'", name),
            Message::EditCancelled => "Edit cancelled, changes discarded".to_string(),

            // === STORAGE MESSAGES ===
            Message::StoredTasksCorrupted(err) => format!("Failed to parse saved tasks, loading samples: {}", err),
            Message::StorageReadFailed(err) => format!("Failed to read saved tasks, showing samples without saving changes: {}", err),
            Message::StorageWriteFailed(err) => format!("Failed to save tasks: {}", err),
            Message::SampleTasksRestored => "Saved tasks removed, sample tasks restored".to_string(),
            Message::ConfirmResetStorage => "This will remove all saved tasks and reset to sample tasks. Continue?".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::PromptStorageKey => "Storage key for the task collection".to_string(),
            Message::PromptDatabaseFile => "Database file name".to_string(),
            Message::PromptDefaultFilter => "Default filter".to_string(),
            Message::PromptSortAscending => "Sort by earliest due date first?".to_string(),
            Message::PromptDateFormat => "Due date display format (chrono syntax)".to_string(),

            // === DASHBOARD MESSAGES ===
            Message::DashChooseAction => "Choose an action".to_string(),
            Message::DashActionAdd => "Add task".to_string(),
            Message::DashActionToggle => "Toggle completed".to_string(),
            Message::DashActionEdit => "Edit task".to_string(),
            Message::DashActionDelete => "Delete task".to_string(),
            Message::DashActionFilter => "Change filter".to_string(),
            Message::DashActionSort => "Flip sort direction".to_string(),
            Message::DashActionReset => "Clear storage".to_string(),
            Message::DashActionQuit => "Quit".to_string(),
            Message::DashEditSave => "Save".to_string(),
            Message::DashEditCancel => "Cancel".to_string(),
            Message::PromptTaskName => "Task name".to_string(),
            Message::PromptDueDate => "Due date (YYYY-MM-DD, empty for none)".to_string(),
            Message::PromptSelectTask => "Select a task".to_string(),
            Message::PromptSelectFilter => "Show tasks".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", s)
    }
}
