//! HTTP API layer translating requests into task service calls.
//!
//! The layer is stateless beyond the shared service handle: each handler
//! maps one route to one service call and selects a status code from the
//! presence or absence of the result. Routes live under `/api/tasks`; a
//! `/health` liveness probe sits alongside.

mod error;
mod handlers;
mod payload;

pub use error::{ApiError, ErrorBody};
pub use payload::{ListTasksQuery, TaskPayload, TaskResponse};

use crate::task::ports::TaskRepository;
use crate::task::services::TaskService;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;

/// Builds the task API router backed by the given service.
#[must_use]
pub fn router<R>(service: Arc<TaskService<R>>) -> Router
where
    R: TaskRepository + 'static,
{
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/tasks",
            get(handlers::list_tasks::<R>).post(handlers::create_task::<R>),
        )
        .route(
            "/api/tasks/{id}",
            get(handlers::get_task::<R>)
                .put(handlers::replace_task::<R>)
                .delete(handlers::delete_task::<R>),
        )
        .with_state(service)
}
