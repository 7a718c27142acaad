use crate::libs::task::TaskId;

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TaskCompleted(String),
    TaskReopened(String),
    TaskNotFound(TaskId),
    TaskNameEmpty,
    InvalidDueDate(String),
    NoChangesDetected,
    ConfirmDeleteTask(String),
    NoTasksToShow,
    NoDueDate,
    DueOn(String),

    // === VIEW MESSAGES ===
    SortLabel(bool),     // ascending
    FilterChanged(String),

    // === EDIT MESSAGES ===
    EditingTask(String),
    EditCancelled,

    // === STORAGE MESSAGES ===
    StoredTasksCorrupted(String),
    StorageReadFailed(String),
    StorageWriteFailed(String),
    SampleTasksRestored,
    ConfirmResetStorage,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    PromptStorageKey,
    PromptDatabaseFile,
    PromptDefaultFilter,
    PromptSortAscending,
    PromptDateFormat,

    // === DASHBOARD MESSAGES ===
    DashChooseAction,
    DashActionAdd,
    DashActionToggle,
    DashActionEdit,
    DashActionDelete,
    DashActionFilter,
    DashActionSort,
    DashActionReset,
    DashActionQuit,
    DashEditSave,
    DashEditCancel,
    PromptTaskName,
    PromptDueDate,
    PromptSelectTask,
    PromptSelectFilter,
    OperationCancelled,
}
