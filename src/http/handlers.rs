//! Request handlers for the task API.

use super::error::ApiError;
use super::payload::{ListTasksQuery, TaskPayload, TaskResponse};
use crate::task::domain::TaskId;
use crate::task::ports::TaskRepository;
use crate::task::services::TaskService;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use std::sync::Arc;

/// Creates a task and responds with 201 and the persisted record.
pub(super) async fn create_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Json(payload): Json<TaskPayload>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    let request = payload.into_create_request()?;
    let task = service.create_task(request).await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(&task))))
}

/// Lists tasks, filtered when a `status` query parameter is present.
pub(super) async fn list_tasks<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let filter = query.status_filter()?;
    let tasks = service.list_tasks(filter).await?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

/// Fetches a single task by identifier; 404 when absent.
pub(super) async fn get_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Path(id): Path<i64>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = service
        .get_task(TaskId::from_i64(id))
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(TaskResponse::from(&task)))
}

/// Replaces a task's content wholesale; 404 when absent.
pub(super) async fn replace_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Path(id): Path<i64>,
    Json(payload): Json<TaskPayload>,
) -> Result<Json<TaskResponse>, ApiError> {
    if payload.supplied_id().is_some_and(|body_id| body_id != id) {
        tracing::debug!(path_id = id, "ignoring body identifier in favour of the path");
    }
    let request = payload.into_update_request()?;
    let task = service
        .update_task(TaskId::from_i64(id), request)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(TaskResponse::from(&task)))
}

/// Deletes a task; 204 with an empty body on success, 404 when absent.
pub(super) async fn delete_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if service.delete_task(TaskId::from_i64(id)).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

/// Liveness probe.
pub(super) async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}
