//! Card Error Types
//!
//! Validation outcomes are never errors. This module covers the service
//! boundary only (oversized input) and integrates with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Card-specific result type alias
pub type CardResult<T> = Result<T, CardError>;

#[derive(Debug, Error)]
pub enum CardError {
    /// A request field exceeds the configured maximum length
    #[error("{field} must be at most {max} characters")]
    InputTooLong { field: &'static str, max: usize },
}

impl CardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CardError::InputTooLong { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CardError::InputTooLong { .. } => ErrorKind::BadRequest,
        }
    }

    /// The request field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            CardError::InputTooLong { field, .. } => field,
        }
    }

    fn log(&self) {
        match self {
            CardError::InputTooLong { field, max } => {
                tracing::debug!(field = %field, max = *max, "Card input rejected");
            }
        }
    }
}

impl From<CardError> for AppError {
    fn from(err: CardError) -> Self {
        AppError::new(err.kind(), err.to_string()).with_field(err.field())
    }
}

impl IntoResponse for CardError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
