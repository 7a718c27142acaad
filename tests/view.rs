#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taskdash::libs::dashboard::RenderFrame;
    use taskdash::libs::messages::Message;
    use taskdash::libs::task::{parse_due_date, Task, TaskFilter, TaskStatus};
    use taskdash::libs::view::View;

    fn frame(filter: TaskFilter, sort_ascending: bool) -> RenderFrame<'static> {
        RenderFrame {
            tasks: Vec::new(),
            filter,
            sort_ascending,
            edit: None,
        }
    }

    #[test]
    fn test_filter_bar_marks_active_filter() {
        assert_eq!(View::filter_bar(&frame(TaskFilter::All, true)), "[All]  Pending   Completed ");
        assert_eq!(View::filter_bar(&frame(TaskFilter::Completed, true)), " All   Pending  [Completed]");
    }

    #[test]
    fn test_sort_label() {
        assert_eq!(frame(TaskFilter::All, true).sort_label().to_string(), "Sort: Date ▲");
        assert_eq!(frame(TaskFilter::All, false).sort_label().to_string(), "Sort: Date ▼");
    }

    #[test]
    fn test_empty_frame() {
        let frame = frame(TaskFilter::Pending, true);
        assert!(frame.is_empty());
        assert!(frame.is_active(TaskFilter::Pending));
        assert!(!frame.is_active(TaskFilter::All));
    }

    #[test]
    fn test_due_label() {
        let mut task = Task {
            id: 1,
            name: "Pay rent".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 3, 9),
            status: TaskStatus::Pending,
            created_at: 1,
        };
        assert_eq!(View::due_label(&task, "%d.%m.%Y"), "Due: 09.03.2024");

        task.due_date = None;
        assert_eq!(View::due_label(&task, "%d.%m.%Y"), Message::NoDueDate.to_string());
    }

    #[test]
    fn test_parse_due_date() {
        assert_eq!(parse_due_date("2024-02-29").unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(parse_due_date("   ").unwrap(), None);
        assert!(parse_due_date("2023-02-29").is_err());
        assert!(parse_due_date("next week").is_err());
    }

    #[test]
    fn test_status_and_filter_names() {
        assert_eq!(TaskStatus::Pending.toggled(), TaskStatus::Completed);
        assert_eq!(TaskStatus::Completed.to_string(), "completed");
        assert_eq!(TaskFilter::Pending.to_string(), "pending");
        assert_eq!(TaskFilter::default(), TaskFilter::All);
    }
}
