//! Render coordinator.
//!
//! [`Dashboard`] owns the [`TaskStore`], the transient view state (filter,
//! sort direction) and the edit flow. After every store notification and
//! every view-state change it re-projects the collection and hands a
//! complete [`RenderFrame`] to its [`Surface`], so the surface never has to
//! patch a previous frame.
//!
//! Edit flow:
//!
//! ```text
//!            open_edit(id)                 save_edit(empty name)
//!  Closed ─────────────────▶ Editing(id) ◀──────────────────────┐
//!    ▲                          │  └────────────────────────────┘
//!    └──────────────────────────┘
//!     save_edit(valid) / cancel_edit / dismiss_edit
//! ```

use super::error::ValidationError;
use super::messages::Message;
use super::projection::project;
use super::store::{Command, StoreEvent, TaskStore};
use super::task::{Task, TaskFilter, TaskId, TaskPatch, TaskStatus};
use crate::db::kv::KeyValueStore;
use chrono::NaiveDate;
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

/// The UI collaborator: draws frames and talks to the user.
pub trait Surface {
    fn render(&mut self, frame: &RenderFrame<'_>);

    /// Shows a blocking notice, e.g. a rejected task name.
    fn alert(&mut self, message: &Message);

    /// Asks a yes/no question before a destructive action.
    fn confirm(&mut self, message: &Message) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub filter: TaskFilter,
    pub sort_ascending: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            filter: TaskFilter::All,
            sort_ascending: true,
        }
    }
}

/// Field values of the task being edited, captured when the editor opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: TaskId,
    pub name: String,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditFlow {
    #[default]
    Closed,
    Editing(EditDraft),
}

impl EditFlow {
    pub fn draft(&self) -> Option<&EditDraft> {
        match self {
            EditFlow::Closed => None,
            EditFlow::Editing(draft) => Some(draft),
        }
    }

    pub fn target(&self) -> Option<TaskId> {
        self.draft().map(|draft| draft.id)
    }
}

/// Everything a surface needs to draw the current state.
#[derive(Debug)]
pub struct RenderFrame<'a> {
    pub tasks: Vec<&'a Task>,
    pub filter: TaskFilter,
    pub sort_ascending: bool,
    pub edit: Option<&'a EditDraft>,
}

impl RenderFrame<'_> {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn is_active(&self, filter: TaskFilter) -> bool {
        self.filter == filter
    }

    pub fn sort_label(&self) -> Message {
        Message::SortLabel(self.sort_ascending)
    }
}

pub struct Dashboard<S: KeyValueStore, U: Surface> {
    store: TaskStore<S>,
    view: ViewState,
    edit: EditFlow,
    surface: U,
    dirty: Rc<Cell<bool>>,
}

impl<S: KeyValueStore, U: Surface> Dashboard<S, U> {
    pub fn new(store: TaskStore<S>, surface: U) -> Self {
        Self::with_view(store, surface, ViewState::default())
    }

    /// Builds the dashboard and draws the first frame.
    pub fn with_view(mut store: TaskStore<S>, surface: U, view: ViewState) -> Self {
        let dirty = Rc::new(Cell::new(false));
        let flag = Rc::clone(&dirty);
        store.subscribe(move |_| flag.set(true));

        let mut dashboard = Self {
            store,
            view,
            edit: EditFlow::Closed,
            surface,
            dirty,
        };
        dashboard.render();
        dashboard
    }

    pub fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn edit_flow(&self) -> &EditFlow {
        &self.edit
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut U {
        &mut self.surface
    }

    pub fn into_parts(self) -> (TaskStore<S>, U) {
        (self.store, self.surface)
    }

    /// The list as currently displayed.
    pub fn visible(&self) -> Vec<&Task> {
        project(self.store.tasks(), self.view.filter, self.view.sort_ascending)
    }

    /// Redraws unconditionally.
    pub fn refresh(&mut self) {
        self.render();
    }

    /// Runs a store command and redraws if it changed anything.
    pub fn dispatch(&mut self, command: Command) -> Result<Option<StoreEvent>, ValidationError> {
        let result = self.store.apply(command);
        if let Err(err) = &result {
            self.surface.alert(&reject_message(*err));
        }
        self.sync();
        result
    }

    pub fn create(&mut self, name: &str, due_date: Option<NaiveDate>) -> Result<Task, ValidationError> {
        let result = self.store.create(name, due_date);
        if let Err(err) = &result {
            self.surface.alert(&reject_message(*err));
        }
        self.sync();
        result
    }

    pub fn toggle(&mut self, id: TaskId) -> Option<TaskStatus> {
        let status = self.store.toggle_status(id);
        self.sync();
        status
    }

    /// Deletes after the surface confirms. Returns the removed task.
    pub fn request_delete(&mut self, id: TaskId) -> Option<Task> {
        let name = self.store.get(id)?.name.clone();
        if !self.surface.confirm(&Message::ConfirmDeleteTask(name)) {
            return None;
        }

        let removed = self.store.delete(id);
        if self.edit.target() == Some(id) {
            self.edit = EditFlow::Closed;
        }
        self.sync();
        removed
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.view.filter = filter;
        self.render();
    }

    pub fn toggle_sort(&mut self) {
        self.view.sort_ascending = !self.view.sort_ascending;
        self.render();
    }

    /// Opens the editor for an existing task. Returns false for unknown ids.
    pub fn open_edit(&mut self, id: TaskId) -> bool {
        let Some(task) = self.store.get(id) else {
            return false;
        };

        self.edit = EditFlow::Editing(EditDraft {
            id,
            name: task.name.clone(),
            due_date: task.due_date,
        });
        self.render();
        true
    }

    /// Saves the open editor.
    ///
    /// An empty name raises an alert and leaves the editor open with the
    /// rejected input. Returns `Ok(false)` when no editor is open.
    pub fn save_edit(&mut self, name: &str, due_date: Option<NaiveDate>) -> Result<bool, ValidationError> {
        let EditFlow::Editing(draft) = &mut self.edit else {
            return Ok(false);
        };

        let trimmed = name.trim();
        if trimmed.is_empty() {
            draft.name = name.to_string();
            draft.due_date = due_date;
            self.surface.alert(&Message::TaskNameEmpty);
            self.render();
            return Err(ValidationError::EmptyName);
        }

        let id = draft.id;
        let patch = TaskPatch {
            name: Some(trimmed.to_string()),
            due_date: Some(due_date),
        };
        self.edit = EditFlow::Closed;
        self.store.update(id, patch);
        // Closing the editor needs a redraw even if the task vanished meanwhile.
        self.dirty.set(false);
        self.render();

        Ok(true)
    }

    /// Closes the editor from its cancel button, discarding changes.
    pub fn cancel_edit(&mut self) {
        self.close_edit("cancel");
    }

    /// Closes the editor after a click outside of it, discarding changes.
    pub fn dismiss_edit(&mut self) {
        self.close_edit("dismiss");
    }

    /// Wipes stored tasks after confirmation and restores the samples.
    pub fn reset_storage(&mut self) -> bool {
        if !self.surface.confirm(&Message::ConfirmResetStorage) {
            return false;
        }

        self.store.reset();
        self.edit = EditFlow::Closed;
        self.sync();
        true
    }

    fn close_edit(&mut self, reason: &str) {
        if self.edit == EditFlow::Closed {
            return;
        }

        debug!(target_id = ?self.edit.target(), reason, "Edit discarded");
        self.edit = EditFlow::Closed;
        self.render();
    }

    fn sync(&mut self) {
        if self.dirty.replace(false) {
            self.render();
        }
    }

    fn render(&mut self) {
        let frame = RenderFrame {
            tasks: project(self.store.tasks(), self.view.filter, self.view.sort_ascending),
            filter: self.view.filter,
            sort_ascending: self.view.sort_ascending,
            edit: self.edit.draft(),
        };
        self.surface.render(&frame);
    }
}

fn reject_message(err: ValidationError) -> Message {
    match err {
        ValidationError::EmptyName => Message::TaskNameEmpty,
    }
}
