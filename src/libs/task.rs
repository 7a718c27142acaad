//! Task data model.
//!
//! A [`Task`] is the only persisted entity. Its JSON form uses the field
//! names `id`, `name`, `dueDate`, `status` and `createdAt`; a missing due
//! date is stored as an empty string, and a stored date that does not parse
//! is read back as no due date rather than rejecting the task.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub type TaskId = u64;

/// ISO calendar date format used for `dueDate` values.
pub const ISO_DATE: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }

    pub fn is_completed(self) -> bool {
        self == TaskStatus::Completed
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "pending"),
            TaskStatus::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    #[serde(default, with = "due_date")]
    pub due_date: Option<NaiveDate>,
    pub status: TaskStatus,
    /// Milliseconds since the Unix epoch. Zero marks a legacy record that
    /// still needs a creation time.
    #[serde(default, deserialize_with = "created_at")]
    pub created_at: i64,
}

impl Task {
    pub fn new(id: TaskId, name: &str, due_date: Option<NaiveDate>) -> Self {
        Task {
            id,
            name: name.to_string(),
            due_date,
            status: TaskStatus::Pending,
            created_at: now_millis(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }
}

/// Which tasks a projection keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Pending, TaskFilter::Completed];

    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Pending => task.status == TaskStatus::Pending,
            TaskFilter::Completed => task.status == TaskStatus::Completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Pending => "Pending",
            TaskFilter::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}

/// Fields to merge into an existing task. `None` leaves a field untouched;
/// `due_date: Some(None)` clears the due date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.due_date.is_none()
    }
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Parses user input for a due date. Blank input means "no due date".
pub fn parse_due_date(input: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input, ISO_DATE).map(Some)
}

mod due_date {
    use super::ISO_DATE;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};
    use tracing::warn;

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_str(&date.format(ISO_DATE).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        let date = match raw.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => match NaiveDate::parse_from_str(value, ISO_DATE) {
                Ok(date) => Some(date),
                Err(err) => {
                    warn!(value, %err, "Ignoring unparsable due date");
                    None
                }
            },
        };
        Ok(date)
    }
}

fn created_at<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}
