/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use storyboard_core::FieldError;
use storyboard_storage::StorageError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    Conflict(String),

    #[error("resource not found")]
    NotFound,

    #[error("not implemented")]
    NotImplemented,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for ServerError {
    fn from(err: StorageError) -> Self {
        // Write conflicts are the caller's fault and get a readable body;
        // everything else stays server-side.
        match err {
            StorageError::DuplicateId { id } => {
                Self::Conflict(format!("a user with id '{id}' already exists"))
            }
            StorageError::ConstraintViolation(reason) => {
                Self::Conflict(format!("constraint violation: {reason}"))
            }
            other => Self::Storage(other),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            ServerError::Conflict(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            // 404 carries an empty body per the API contract
            ServerError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ServerError::NotImplemented => (
                StatusCode::NOT_IMPLEMENTED,
                Json(json!({ "error": "update is not implemented" })),
            )
                .into_response(),
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Configuration error" })),
                )
                    .into_response()
            }
            // Never leak raw driver text to the client
            ServerError::Storage(ref e) => {
                tracing::error!("Storage error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Storage error" })),
                )
                    .into_response()
            }
        }
    }
}
