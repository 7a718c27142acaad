#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taskdash::db::kv::{KeyValueStore, MemoryStore};
    use taskdash::libs::dashboard::{Dashboard, EditFlow, RenderFrame, Surface, ViewState};
    use taskdash::libs::error::ValidationError;
    use taskdash::libs::messages::Message;
    use taskdash::libs::storage::{TaskStorage, DEFAULT_STORAGE_KEY};
    use taskdash::libs::store::{Command, StoreEvent, TaskStore};
    use taskdash::libs::task::{Task, TaskFilter, TaskId, TaskStatus};

    #[derive(Debug, Clone, PartialEq)]
    struct Snapshot {
        ids: Vec<TaskId>,
        filter: TaskFilter,
        sort_ascending: bool,
        empty: bool,
        editing: Option<TaskId>,
    }

    #[derive(Default)]
    struct RecordingSurface {
        frames: Vec<Snapshot>,
        alerts: Vec<String>,
        questions: Vec<String>,
        answer: bool,
    }

    impl RecordingSurface {
        fn answering(answer: bool) -> Self {
            Self { answer, ..Self::default() }
        }

        fn last(&self) -> &Snapshot {
            self.frames.last().expect("at least one frame")
        }
    }

    impl Surface for RecordingSurface {
        fn render(&mut self, frame: &RenderFrame<'_>) {
            self.frames.push(Snapshot {
                ids: frame.tasks.iter().map(|task| task.id).collect(),
                filter: frame.filter,
                sort_ascending: frame.sort_ascending,
                empty: frame.is_empty(),
                editing: frame.edit.map(|draft| draft.id),
            });
        }

        fn alert(&mut self, message: &Message) {
            self.alerts.push(message.to_string());
        }

        fn confirm(&mut self, message: &Message) -> bool {
            self.questions.push(message.to_string());
            self.answer
        }
    }

    fn task(id: TaskId, due: Option<NaiveDate>, status: TaskStatus, created_at: i64) -> Task {
        Task {
            id,
            name: format!("Task {}", id),
            due_date: due,
            status,
            created_at,
        }
    }

    fn collection() -> Vec<Task> {
        vec![
            task(1, NaiveDate::from_ymd_opt(2024, 1, 2), TaskStatus::Pending, 10),
            task(2, NaiveDate::from_ymd_opt(2024, 1, 1), TaskStatus::Pending, 20),
            task(3, None, TaskStatus::Pending, 100),
            task(4, None, TaskStatus::Pending, 50),
        ]
    }

    fn dashboard(tasks: &[Task], surface: RecordingSurface) -> Dashboard<MemoryStore, RecordingSurface> {
        let mut backend = MemoryStore::new();
        backend.set(DEFAULT_STORAGE_KEY, &serde_json::to_string(tasks).unwrap()).unwrap();
        Dashboard::new(TaskStore::open(TaskStorage::new(backend)), surface)
    }

    #[test]
    fn test_initial_frame() {
        let dash = dashboard(&collection(), RecordingSurface::default());

        assert_eq!(dash.surface().frames.len(), 1);
        assert_eq!(
            dash.surface().last(),
            &Snapshot {
                ids: vec![2, 1, 4, 3],
                filter: TaskFilter::All,
                sort_ascending: true,
                empty: false,
                editing: None,
            }
        );
    }

    #[test]
    fn test_custom_initial_view() {
        let mut backend = MemoryStore::new();
        backend.set(DEFAULT_STORAGE_KEY, &serde_json::to_string(&collection()).unwrap()).unwrap();
        let view = ViewState {
            filter: TaskFilter::Pending,
            sort_ascending: false,
        };

        let dash = Dashboard::with_view(TaskStore::open(TaskStorage::new(backend)), RecordingSurface::default(), view);

        assert_eq!(dash.view(), view);
        assert_eq!(dash.surface().last().ids, vec![1, 2, 4, 3]);
    }

    #[test]
    fn test_create_redraws_with_new_task() {
        let mut dash = dashboard(&collection(), RecordingSurface::default());

        let created = dash.create("Dentist", NaiveDate::from_ymd_opt(2023, 12, 31)).unwrap();

        assert_eq!(created.id, 5);
        assert_eq!(dash.surface().frames.len(), 2);
        assert_eq!(dash.surface().last().ids, vec![5, 2, 1, 4, 3]);
    }

    #[test]
    fn test_create_with_blank_name_alerts_without_redraw() {
        let mut dash = dashboard(&collection(), RecordingSurface::default());

        assert_eq!(dash.create("   ", None), Err(ValidationError::EmptyName));

        assert_eq!(dash.surface().alerts, vec![Message::TaskNameEmpty.to_string()]);
        assert_eq!(dash.surface().frames.len(), 1);
        assert_eq!(dash.store().len(), 4);
    }

    #[test]
    fn test_filter_switch_and_empty_state() {
        let mut dash = dashboard(&collection(), RecordingSurface::default());

        dash.set_filter(TaskFilter::Completed);
        assert!(dash.surface().last().empty);
        assert_eq!(dash.surface().last().filter, TaskFilter::Completed);

        dash.toggle(3);
        assert!(!dash.surface().last().empty);
        assert_eq!(dash.surface().last().ids, vec![3]);

        dash.toggle(3);
        assert!(dash.surface().last().empty);

        dash.set_filter(TaskFilter::Pending);
        assert_eq!(dash.surface().last().ids, vec![2, 1, 4, 3]);
    }

    #[test]
    fn test_toggle_sort_flips_direction() {
        let mut dash = dashboard(&collection(), RecordingSurface::default());

        dash.toggle_sort();
        assert!(!dash.surface().last().sort_ascending);
        assert_eq!(dash.surface().last().ids, vec![1, 2, 4, 3]);

        dash.toggle_sort();
        assert!(dash.surface().last().sort_ascending);
        assert_eq!(dash.surface().last().ids, vec![2, 1, 4, 3]);
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let mut dash = dashboard(&collection(), RecordingSurface::default());

        dash.refresh();
        dash.refresh();

        let frames = &dash.surface().frames;
        assert_eq!(frames.len(), 3);
        assert!(frames.iter().all(|frame| frame == &frames[0]));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut dash = dashboard(&collection(), RecordingSurface::answering(false));

        assert_eq!(dash.request_delete(2), None);
        assert_eq!(dash.store().len(), 4);
        assert_eq!(dash.surface().questions, vec![Message::ConfirmDeleteTask("Task 2".to_string()).to_string()]);
        assert_eq!(dash.surface().frames.len(), 1);

        dash.surface_mut().answer = true;
        let removed = dash.request_delete(2).unwrap();
        assert_eq!(removed.id, 2);
        assert_eq!(dash.surface().last().ids, vec![1, 4, 3]);
    }

    #[test]
    fn test_delete_unknown_id_asks_nothing() {
        let mut dash = dashboard(&collection(), RecordingSurface::answering(true));

        assert_eq!(dash.request_delete(99), None);
        assert!(dash.surface().questions.is_empty());
        assert_eq!(dash.surface().frames.len(), 1);
    }

    #[test]
    fn test_open_edit_captures_current_values() {
        let mut dash = dashboard(&collection(), RecordingSurface::default());

        assert!(!dash.open_edit(99));
        assert_eq!(dash.edit_flow(), &EditFlow::Closed);

        assert!(dash.open_edit(1));
        let draft = dash.edit_flow().draft().unwrap();
        assert_eq!(draft.id, 1);
        assert_eq!(draft.name, "Task 1");
        assert_eq!(draft.due_date, NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(dash.surface().last().editing, Some(1));
    }

    #[test]
    fn test_save_edit_with_blank_name_stays_open() {
        let mut dash = dashboard(&collection(), RecordingSurface::default());
        dash.open_edit(1);

        assert_eq!(dash.save_edit("  ", None), Err(ValidationError::EmptyName));

        assert_eq!(dash.edit_flow().target(), Some(1));
        assert_eq!(dash.surface().alerts, vec![Message::TaskNameEmpty.to_string()]);
        assert_eq!(dash.store().get(1).unwrap().name, "Task 1");
        assert_eq!(dash.store().get(1).unwrap().due_date, NaiveDate::from_ymd_opt(2024, 1, 2));
    }

    #[test]
    fn test_save_edit_updates_and_closes() {
        let mut dash = dashboard(&collection(), RecordingSurface::default());
        dash.open_edit(3);

        assert_eq!(dash.save_edit("  Renamed  ", NaiveDate::from_ymd_opt(2023, 6, 1)), Ok(true));

        assert_eq!(dash.edit_flow(), &EditFlow::Closed);
        let updated = dash.store().get(3).unwrap();
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.due_date, NaiveDate::from_ymd_opt(2023, 6, 1));
        assert_eq!(updated.created_at, 100);
        assert_eq!(dash.surface().last().editing, None);
        assert_eq!(dash.surface().last().ids, vec![3, 2, 1, 4]);
    }

    #[test]
    fn test_save_edit_without_open_editor() {
        let mut dash = dashboard(&collection(), RecordingSurface::default());

        assert_eq!(dash.save_edit("Anything", None), Ok(false));
        assert_eq!(dash.store().get(1).unwrap().name, "Task 1");
    }

    #[test]
    fn test_cancel_and_dismiss_discard_changes() {
        let mut dash = dashboard(&collection(), RecordingSurface::default());
        let before = dash.store().tasks().to_vec();

        dash.open_edit(1);
        dash.cancel_edit();
        assert_eq!(dash.edit_flow(), &EditFlow::Closed);

        dash.open_edit(2);
        dash.dismiss_edit();
        assert_eq!(dash.edit_flow(), &EditFlow::Closed);

        assert_eq!(dash.store().tasks(), before.as_slice());
        assert_eq!(dash.surface().last().editing, None);
    }

    #[test]
    fn test_deleting_edit_target_closes_editor() {
        let mut dash = dashboard(&collection(), RecordingSurface::answering(true));
        dash.open_edit(4);

        dash.request_delete(4);

        assert_eq!(dash.edit_flow(), &EditFlow::Closed);
        assert_eq!(dash.surface().last().editing, None);
    }

    #[test]
    fn test_dispatch_commands() {
        let mut dash = dashboard(&collection(), RecordingSurface::default());

        let event = dash.dispatch(Command::Toggle { id: 1 }).unwrap();
        assert_eq!(event, Some(StoreEvent::Toggled { id: 1, status: TaskStatus::Completed }));
        assert_eq!(dash.surface().frames.len(), 2);

        assert_eq!(dash.dispatch(Command::Toggle { id: 77 }).unwrap(), None);
        assert_eq!(dash.surface().frames.len(), 2);

        let rejected = dash.dispatch(Command::Create { name: String::new(), due_date: None });
        assert_eq!(rejected, Err(ValidationError::EmptyName));
        assert_eq!(dash.surface().alerts.len(), 1);
    }

    #[test]
    fn test_reset_storage() {
        let mut dash = dashboard(&collection(), RecordingSurface::answering(false));

        assert!(!dash.reset_storage());
        assert_eq!(dash.store().len(), 4);

        dash.surface_mut().answer = true;
        assert!(dash.reset_storage());
        assert_eq!(dash.store().len(), 5);
        assert_eq!(dash.surface().last().ids.len(), 5);
        assert_eq!(dash.surface().questions.len(), 2);
    }
}
