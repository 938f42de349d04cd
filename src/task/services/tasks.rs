//! Application service for task CRUD rules.

use crate::task::{
    domain::{NewTask, Task, TaskDescription, TaskDomainError, TaskId, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    status: Option<TaskStatus>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets an explicit status, overriding the `ToDo` default.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Request payload for replacing a task's content wholesale.
///
/// Absent fields overwrite stored values: leaving the description unset
/// clears any stored description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: String,
    description: Option<String>,
    status: TaskStatus,
}

impl UpdateTaskRequest {
    /// Creates a request with the required title and status.
    #[must_use]
    pub fn new(title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            title: title.into(),
            description: None,
            status,
        }
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task CRUD orchestration service.
#[derive(Clone)]
pub struct TaskService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a task, defaulting the status to [`TaskStatus::ToDo`] when
    /// unset.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when input validation fails or the
    /// repository rejects persistence.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let CreateTaskRequest {
            title,
            description,
            status,
        } = request;

        let (validated_title, validated_description) = validate_content(title, description)?;
        let new_task = NewTask::new(
            validated_title,
            validated_description,
            status.unwrap_or(TaskStatus::ToDo),
        );
        Ok(self.repository.insert(&new_task).await?)
    }

    /// Lists tasks, filtered when a status is given.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_tasks(&self, status: Option<TaskStatus>) -> TaskServiceResult<Vec<Task>> {
        let tasks = match status {
            Some(filter) => self.repository.find_by_status(filter).await?,
            None => self.repository.find_all().await?,
        };
        Ok(tasks)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no task has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn get_task(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Replaces a task's title, description, and status wholesale.
    ///
    /// Returns `Ok(None)` when no task has the identifier; no record is
    /// created in that case. The identifier is retained on replacement.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when input validation fails or
    /// persistence fails.
    pub async fn update_task(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<Option<Task>> {
        let Some(mut task) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };

        let UpdateTaskRequest {
            title,
            description,
            status,
        } = request;

        let (validated_title, validated_description) = validate_content(title, description)?;
        task.replace_content(validated_title, validated_description, status);
        Ok(Some(self.repository.update(&task).await?))
    }

    /// Deletes a task by identifier.
    ///
    /// Returns `Ok(false)` when no task has the identifier; the store is
    /// left unchanged in that case.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<bool> {
        if !self.repository.exists_by_id(id).await? {
            return Ok(false);
        }
        self.repository.delete_by_id(id).await?;
        Ok(true)
    }
}

fn validate_content(
    title: String,
    description: Option<String>,
) -> Result<(TaskTitle, Option<TaskDescription>), TaskDomainError> {
    Ok((
        TaskTitle::new(title)?,
        description.map(TaskDescription::new).transpose()?,
    ))
}
