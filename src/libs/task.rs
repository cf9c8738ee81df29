//! Task data model and input validation.
//!
//! Everything that crosses from user input into the store passes through
//! this module first. Raw strings are trimmed, parsed into the closed
//! [`Priority`] and [`Status`] enums, and checked against the length and
//! date rules before any SQL is prepared.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskman::libs::task::{NewTask, Priority, TaskFilter};
//!
//! let task = NewTask::from_raw("Write report", Some("monthly"), Some("High"), None, Some("2024-06-12"))?;
//! assert_eq!(task.priority, Priority::High);
//!
//! let filter = TaskFilter::from_raw(Some("report"), Some(""), None)?;
//! assert!(filter.status.is_none());
//! # Ok::<(), taskman::libs::error::TaskError>(())
//! ```

use super::error::{TaskError, TaskResult, ValidationError};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use std::fmt;
use std::str::FromStr;

pub const TITLE_MAX_CHARS: usize = 255;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// Storage and input format for due dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Legacy "no date" value some stores write instead of NULL.
pub const ZERO_DATE: &str = "0000-00-00";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(ValidationError::InvalidPriority(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Pending,
    InProgress,
    Completed,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Pending, Status::InProgress, Status::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Pending
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            // CLI users cannot easily type the space
            "in progress" | "in-progress" | "in_progress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            _ => Err(ValidationError::InvalidStatus(s.to_string())),
        }
    }
}

impl ToSql for Priority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.label()))
    }
}

impl FromSql for Priority {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

impl ToSql for Status {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.label()))
    }
}

impl FromSql for Status {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

/// A stored task as read back from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    pub due_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Task {
    /// True once the task has been edited after creation.
    pub fn was_updated(&self) -> bool {
        self.updated_at != self.created_at
    }
}

/// Input for the create operation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    pub fn new(title: &str, priority: Priority) -> Self {
        NewTask {
            title: title.trim().to_string(),
            description: String::new(),
            priority,
            status: Status::default(),
            due_date: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.trim().to_string();
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Parses untrusted form-style input, reporting every invalid field.
    ///
    /// Priority is required; a missing or empty status falls back to
    /// `Pending`; an empty due date means no due date.
    pub fn from_raw(
        title: &str,
        description: Option<&str>,
        priority: Option<&str>,
        status: Option<&str>,
        due_date: Option<&str>,
    ) -> TaskResult<Self> {
        let mut errors = Vec::new();

        let title = title.trim().to_string();
        check_title(&title, &mut errors);

        let description = description.map(str::trim).unwrap_or_default().to_string();
        check_description(&description, &mut errors);

        let priority = match priority.unwrap_or_default().parse::<Priority>() {
            Ok(priority) => Some(priority),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        let status = match non_empty(status) {
            None => Some(Status::default()),
            Some(raw) => match raw.parse::<Status>() {
                Ok(status) => Some(status),
                Err(e) => {
                    errors.push(e);
                    None
                }
            },
        };

        let due_date = match parse_due_date(due_date.unwrap_or_default()) {
            Ok(date) => date,
            Err(e) => {
                errors.push(e);
                None
            }
        };

        match (priority, status) {
            (Some(priority), Some(status)) if errors.is_empty() => Ok(NewTask {
                title,
                description,
                priority,
                status,
                due_date,
            }),
            _ => Err(TaskError::invalid(errors)),
        }
    }

    pub fn validate(&self) -> TaskResult<()> {
        let mut errors = Vec::new();
        check_title(&self.title, &mut errors);
        check_description(&self.description, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(TaskError::invalid(errors))
        }
    }
}

/// Partial edit. `None` leaves a field untouched.
///
/// `due_date` is doubly optional: `Some(None)` clears the date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    /// Full edit: every field is replaced.
    pub fn replace_with(task: &NewTask) -> Self {
        TaskPatch {
            title: Some(task.title.clone()),
            description: Some(task.description.clone()),
            priority: Some(task.priority),
            status: Some(task.status),
            due_date: Some(task.due_date),
        }
    }

    pub fn complete() -> Self {
        TaskPatch {
            status: Some(Status::Completed),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.priority.is_none() && self.status.is_none() && self.due_date.is_none()
    }

    /// Trims text fields so checks and writes see the same value.
    pub fn normalized(&self) -> Self {
        TaskPatch {
            title: self.title.as_deref().map(|t| t.trim().to_string()),
            description: self.description.as_deref().map(|d| d.trim().to_string()),
            ..self.clone()
        }
    }

    /// Validates only the fields being changed, after trimming.
    pub fn validate(&self) -> TaskResult<()> {
        let mut errors = Vec::new();
        if let Some(title) = &self.title {
            check_title(title.trim(), &mut errors);
        }
        if let Some(description) = &self.description {
            check_description(description.trim(), &mut errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(TaskError::invalid(errors))
        }
    }
}

/// Optional listing constraints; all active ones must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub search: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
}

impl TaskFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: &str) -> Self {
        self.search = Some(text.to_string());
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Normalizes untrusted filter input.
    ///
    /// Values are trimmed and empty strings mean "no constraint". A status
    /// or priority outside its enum is rejected rather than ignored.
    pub fn from_raw(search: Option<&str>, status: Option<&str>, priority: Option<&str>) -> TaskResult<Self> {
        let mut errors = Vec::new();

        let status = non_empty(status).and_then(|raw| raw.parse::<Status>().map_err(|e| errors.push(e)).ok());
        let priority = non_empty(priority).and_then(|raw| raw.parse::<Priority>().map_err(|e| errors.push(e)).ok());

        if !errors.is_empty() {
            return Err(TaskError::invalid(errors));
        }

        Ok(TaskFilter {
            search: non_empty(search).map(str::to_string),
            status,
            priority,
        })
    }

    pub fn is_active(&self) -> bool {
        self.search.as_deref().is_some_and(|s| !s.is_empty()) || self.status.is_some() || self.priority.is_some()
    }
}

/// Strict parse of user-entered due dates.
///
/// Empty input and the zero-date sentinel both mean "no due date". The
/// round-trip check rejects loose forms such as `2024-6-1`.
pub fn parse_due_date(raw: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() || raw == ZERO_DATE {
        return Ok(None);
    }

    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) if date.format(DATE_FORMAT).to_string() == raw => Ok(Some(date)),
        _ => Err(ValidationError::InvalidDate(raw.to_string())),
    }
}

/// Lenient read of a stored due date; anything unparseable is "no date".
pub fn read_due_date(stored: Option<&str>) -> Option<NaiveDate> {
    stored.and_then(|raw| parse_due_date(raw).ok().flatten())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn check_title(title: &str, errors: &mut Vec<ValidationError>) {
    if title.trim().is_empty() {
        errors.push(ValidationError::TitleRequired);
    } else if title.chars().count() > TITLE_MAX_CHARS {
        errors.push(ValidationError::TitleTooLong);
    }
}

fn check_description(description: &str, errors: &mut Vec<ValidationError>) {
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        errors.push(ValidationError::DescriptionTooLong);
    }
}
