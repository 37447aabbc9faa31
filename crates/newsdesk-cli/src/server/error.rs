//! API error types and handling.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use newsdesk::NewsdeskError;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from client.
    BadRequest(String),
    /// Error from the newsdesk library.
    Newsdesk(NewsdeskError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Newsdesk(NewsdeskError::Validation(msg)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation", msg)
            }
            ApiError::Newsdesk(e) => (StatusCode::BAD_REQUEST, "newsdesk_error", e.to_string()),
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<NewsdeskError> for ApiError {
    fn from(err: NewsdeskError) -> Self {
        ApiError::Newsdesk(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Newsdesk(e) => write!(f, "Newsdesk error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}
