//! Wire payload types for the task API.

use crate::task::domain::{Task, TaskDomainError, TaskStatus};
use crate::task::services::{CreateTaskRequest, UpdateTaskRequest};
use serde::{Deserialize, Serialize};

/// Incoming task payload shared by the create and replace routes.
///
/// Every field is optional at parse time so requirement checks surface as
/// validation errors (HTTP 400) rather than deserialization rejections. A
/// client-supplied `id` is accepted and ignored: storage assigns
/// identifiers on create, and the path identifier is authoritative for
/// replacement.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskPayload {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

impl TaskPayload {
    /// Returns the client-supplied identifier, which the API ignores.
    #[must_use]
    pub const fn supplied_id(&self) -> Option<i64> {
        self.id
    }

    /// Validates the payload into a create request; status is optional and
    /// defaults downstream.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MissingField`] when the title is absent,
    /// or [`TaskDomainError::UnknownStatus`] for an unrecognised status
    /// value.
    pub fn into_create_request(self) -> Result<CreateTaskRequest, TaskDomainError> {
        let Self {
            title,
            description,
            status,
            ..
        } = self;

        let title_value = title.ok_or(TaskDomainError::MissingField("title"))?;
        let status_value = status
            .as_deref()
            .map(TaskStatus::try_from)
            .transpose()?;

        let mut request = CreateTaskRequest::new(title_value);
        if let Some(text) = description {
            request = request.with_description(text);
        }
        if let Some(parsed) = status_value {
            request = request.with_status(parsed);
        }
        Ok(request)
    }

    /// Validates the payload into a replacement request; title and status
    /// are both required.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MissingField`] when the title or status is
    /// absent, or [`TaskDomainError::UnknownStatus`] for an unrecognised
    /// status value.
    pub fn into_update_request(self) -> Result<UpdateTaskRequest, TaskDomainError> {
        let Self {
            title,
            description,
            status,
            ..
        } = self;

        let title_value = title.ok_or(TaskDomainError::MissingField("title"))?;
        let status_text = status.ok_or(TaskDomainError::MissingField("status"))?;
        let status_value = TaskStatus::try_from(status_text.as_str())?;

        let mut request = UpdateTaskRequest::new(title_value, status_value);
        if let Some(text) = description {
            request = request.with_description(text);
        }
        Ok(request)
    }
}

/// Serialized task record returned by every successful task route.
#[derive(Debug, Clone, Serialize)]
pub struct TaskResponse {
    id: i64,
    title: String,
    description: Option<String>,
    status: TaskStatus,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().into_inner(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(|text| text.as_str().to_owned()),
            status: task.status(),
        }
    }
}

/// Query parameters accepted by the list route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTasksQuery {
    #[serde(default)]
    status: Option<String>,
}

impl ListTasksQuery {
    /// Parses the optional status filter, rejecting unknown values.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::UnknownStatus`] for an unrecognised status
    /// value.
    pub fn status_filter(&self) -> Result<Option<TaskStatus>, TaskDomainError> {
        Ok(self
            .status
            .as_deref()
            .map(TaskStatus::try_from)
            .transpose()?)
    }
}
