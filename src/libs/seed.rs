//! Sample tasks used whenever no valid collection is stored.

use super::task::{now_millis, Task, TaskStatus};
use chrono::{Days, Local, NaiveDate};

const MINUTE_MS: i64 = 60 * 1000;

/// `(name, due in days from today, status, minutes before now it was created)`
const SAMPLES: [(&str, Option<u64>, TaskStatus, i64); 5] = [
    ("Finish project report", Some(3), TaskStatus::Pending, 60),
    ("Buy groceries", Some(1), TaskStatus::Pending, 50),
    ("Read a chapter of book", None, TaskStatus::Completed, 40),
    ("Plan weekend trip", Some(7), TaskStatus::Pending, 30),
    ("Call Mom", Some(2), TaskStatus::Pending, 10),
];

/// Builds a fresh copy of the seed collection with dates relative to today.
pub fn sample_tasks() -> Vec<Task> {
    let today = Local::now().date_naive();
    let now = now_millis();

    SAMPLES
        .iter()
        .zip(1..)
        .map(|(&(name, due_in, status, age_minutes), id)| Task {
            id,
            name: name.to_string(),
            due_date: due_in.and_then(|days| days_from(today, days)),
            status,
            created_at: now - age_minutes * MINUTE_MS,
        })
        .collect()
}

fn days_from(date: NaiveDate, days: u64) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(days))
}
