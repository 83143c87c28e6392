// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use crate::repository::RepositoryError;

/// Global Application Error Enum.
///
/// Every endpoint reports failures through exactly one of these three kinds.
/// Causes are deliberately flattened: callers never see why a request failed.
#[derive(Debug)]
pub enum AppError {
    // 404 Not Found
    NotFound,

    // 422 Unprocessable Entity
    Unprocessable,

    // 500 Internal Server Error
    InternalServerError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Converts the error into a JSON `{"error": ...}` body with the matching status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "not found"),
            AppError::Unprocessable => (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable entity"),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        };
        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Allows using `?` on repository calls where the endpoint's failure kind is 500.
impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}
