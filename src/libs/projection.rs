//! Filtered, sorted view of the task collection.
//!
//! Ordering rules:
//!
//! 1. tasks are ordered by due date in the requested direction;
//! 2. tasks without a due date always come last, in either direction;
//! 3. equal due dates (including "none") fall back to creation time,
//!    earliest first, whatever the direction.
//!
//! Undated tasks are given a sentinel date, [`NaiveDate::MAX`] when sorting
//! ascending and [`NaiveDate::MIN`] when descending, which puts them after
//! every real date either way.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use taskdash::libs::projection::project;
//! use taskdash::libs::task::{Task, TaskFilter};
//!
//! let mut undated = Task::new(1, "Someday", None);
//! undated.created_at = 1;
//! let mut dated = Task::new(2, "Dentist", NaiveDate::from_ymd_opt(2024, 5, 2));
//! dated.created_at = 2;
//! let tasks = vec![undated, dated];
//!
//! let names = |visible: Vec<&Task>| visible.iter().map(|t| t.name.clone()).collect::<Vec<_>>();
//! assert_eq!(names(project(&tasks, TaskFilter::All, true)), ["Dentist", "Someday"]);
//! assert_eq!(names(project(&tasks, TaskFilter::All, false)), ["Dentist", "Someday"]);
//! assert!(project(&tasks, TaskFilter::Completed, true).is_empty());
//! ```

use super::task::{Task, TaskFilter};
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Computes the displayable list. Never touches `tasks`.
pub fn project(tasks: &[Task], filter: TaskFilter, sort_ascending: bool) -> Vec<&Task> {
    let mut visible: Vec<&Task> = tasks.iter().filter(|task| filter.matches(task)).collect();
    visible.sort_by(|a, b| compare(a, b, sort_ascending));
    visible
}

fn compare(a: &Task, b: &Task, sort_ascending: bool) -> Ordering {
    let by_due = sort_key(a, sort_ascending).cmp(&sort_key(b, sort_ascending));
    let by_due = if sort_ascending { by_due } else { by_due.reverse() };

    by_due.then_with(|| a.created_at.cmp(&b.created_at))
}

/// Undated tasks take the date that sorts last in the current direction.
fn sort_key(task: &Task, sort_ascending: bool) -> NaiveDate {
    task.due_date
        .unwrap_or(if sort_ascending { NaiveDate::MAX } else { NaiveDate::MIN })
}
