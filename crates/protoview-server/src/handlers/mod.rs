//! HTTP route handlers for the model metadata server.

pub mod model;

use axum::http::Uri;

use crate::error::AppError;

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}

/// Fallback for paths with no route.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}
