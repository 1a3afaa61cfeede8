use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::services::ServiceError;

/// Unified application error type that maps to JSON HTTP responses.
///
/// Body format: `{ "error": { "code": "...", "message": "..." } }`.
#[derive(Debug)]
pub enum AppError {
    /// 400 Bad Request
    BadRequest(String),
    /// 400 Bad Request, the store rejected submitted data
    InvalidObject(String),
    /// 404 Not Found
    NotFound(String),
    /// 500 Internal Server Error, the import file could not be read or parsed
    DataLoad(String),
    /// 500 Internal Server Error (wraps any error, logs details, returns generic message)
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            Self::InvalidObject(msg) => (StatusCode::BAD_REQUEST, "INVALID_OBJECT", msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            Self::DataLoad(msg) => {
                tracing::error!("Game import failed: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "DATA_LOAD_ERROR", msg)
            }
            Self::Internal(err) => {
                tracing::error!("Internal server error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        (
            status,
            Json(json!({
                "error": {
                    "code": code,
                    "message": message,
                }
            })),
        )
            .into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => Self::NotFound(msg),
            ServiceError::InvalidObject(msg) => Self::InvalidObject(msg),
            ServiceError::InvalidRequest(msg) => Self::BadRequest(msg),
            ServiceError::DataLoad(e) => Self::DataLoad(e.to_string()),
            ServiceError::Persistence(e) => Self::Internal(e.into()),
        }
    }
}
