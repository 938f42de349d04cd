//! Error-to-response mapping for the task API.

use crate::task::domain::TaskDomainError;
use crate::task::ports::TaskRepositoryError;
use crate::task::services::TaskServiceError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON body attached to 400 and 500 responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    code: &'static str,
    message: String,
}

/// API-layer error translated into an HTTP response.
///
/// Not-found responses carry an empty body; validation and storage
/// failures carry a JSON `{code, message}` body.
#[derive(Debug)]
pub enum ApiError {
    /// The requested record does not exist.
    NotFound,
    /// The request payload failed validation.
    Validation(TaskDomainError),
    /// The backing store failed.
    Storage(TaskRepositoryError),
}

impl From<TaskDomainError> for ApiError {
    fn from(err: TaskDomainError) -> Self {
        Self::Validation(err)
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Domain(domain) => Self::Validation(domain),
            TaskServiceError::Repository(repository) => Self::Storage(repository),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound | Self::Storage(TaskRepositoryError::NotFound(_)) => {
                StatusCode::NOT_FOUND.into_response()
            }
            Self::Validation(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    code: "invalid_task",
                    message: err.to_string(),
                }),
            )
                .into_response(),
            Self::Storage(err) => {
                tracing::error!(error = %err, "task storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        code: "storage_unavailable",
                        message: err.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
