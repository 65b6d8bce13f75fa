use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use super::dto::ErrorResponse;
use crate::storage::StorageError;

#[derive(Debug)]
pub enum ApiError {
    /// Requested customer does not exist; recoverable by the caller.
    NotFound(String),
    /// The request failed a validation rule; the message names the rule.
    Validation(String),
    /// The collection file could not be read or written.
    Storage(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Storage(err) => {
                // Detail goes to the log, never to the caller.
                match err.downcast_ref::<StorageError>() {
                    Some(StorageError::Read(detail)) => {
                        error!("collection read failed: {}", detail);
                    }
                    Some(StorageError::Write(detail)) => {
                        error!("collection write failed: {}", detail);
                    }
                    None => error!("storage failure: {:#}", err),
                }
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

// Convenience conversion for errors bubbling out of the storage layer
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Storage(err)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
