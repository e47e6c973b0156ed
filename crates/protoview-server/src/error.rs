//! Application error types and Axum response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Request-level errors with HTTP status code mapping.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::NotFound(message) = self;
        (StatusCode::NOT_FOUND, Json(ErrorResponse { error: message })).into_response()
    }
}
