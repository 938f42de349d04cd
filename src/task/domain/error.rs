//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the persisted column width.
    #[error("task title must not exceed 255 characters, got {0}")]
    TitleTooLong(usize),

    /// The task description exceeds the persisted column width.
    #[error("task description must not exceed 1000 characters, got {0}")]
    DescriptionTooLong(usize),

    /// A required payload field is absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The status value is not part of the closed enumeration.
    #[error(transparent)]
    UnknownStatus(#[from] ParseTaskStatusError),
}

/// Error returned while parsing task statuses from storage or the API
/// boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
