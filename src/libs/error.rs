//! Error taxonomy for task operations.
//!
//! Library code returns [`TaskError`]; the command layer wraps it in
//! `anyhow` and renders it through the message catalogue. Validation
//! problems are collected as a list so a single `add` or `edit` call can
//! report every invalid field at once.

use std::fmt;
use thiserror::Error;

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required.")]
    TitleRequired,
    #[error("Title must be less than 255 characters.")]
    TitleTooLong,
    #[error("Description must be less than 1000 characters.")]
    DescriptionTooLong,
    #[error("Invalid priority level.")]
    InvalidPriority(String),
    #[error("Invalid status.")]
    InvalidStatus(String),
    #[error("Invalid date format.")]
    InvalidDate(String),
}

/// Wrapper so a list of validation failures renders as one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join(" "))
    }
}

impl ValidationErrors {
    pub fn contains(&self, error: &ValidationError) -> bool {
        self.0.contains(error)
    }
}

#[derive(Debug, Error)]
pub enum TaskError {
    /// Input rejected before touching storage.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// The store could not be reached or the statement failed.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] rusqlite::Error),

    #[error("Task with ID {0} not found")]
    NotFound(i64),

    /// A stored row holds values outside the task model.
    #[error("Task with ID {id} cannot be read: {reason}")]
    InvalidRow { id: i64, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TaskError {
    pub fn invalid(errors: Vec<ValidationError>) -> Self {
        TaskError::Validation(ValidationErrors(errors))
    }

    /// Validation failures carried by this error, empty for other kinds.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            TaskError::Validation(errors) => &errors.0,
            _ => &[],
        }
    }
}

impl From<ValidationError> for TaskError {
    fn from(error: ValidationError) -> Self {
        TaskError::invalid(vec![error])
    }
}

pub type TaskResult<T> = Result<T, TaskError>;
