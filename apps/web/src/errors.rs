use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::render;

/// Application-level error type for route handlers.
///
/// Only transport-level failures surface through this type. Pipeline
/// failures (extraction, API, parse) are rendered inline on the Input form
/// by the submit handlers and never become an `AppError`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("The API credential is not configured")]
    Config,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, render::error_page(&msg)).into_response()
            }
            AppError::Config => {
                (StatusCode::SERVICE_UNAVAILABLE, render::config_error_page()).into_response()
            }
        }
    }
}
