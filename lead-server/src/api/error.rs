//! REST API error types
//!
//! Errors render as the `{"detail": ...}` JSON bodies the existing frontend
//! already parses.

use lead_core::{CoreError, ErrorLocation};
use lead_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub detail: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Submission failed the Lead invariants (422)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Document store write failed or no store is configured (500)
    #[error("Persistence failed: {message} {location}")]
    Persistence {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, detail) = match self {
            ApiError::Validation { message, .. } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            ApiError::Persistence { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("DB error: {}", message),
            ),
        };

        (status, Json(ApiErrorResponse { detail })).into_response()
    }
}

/// Convert Lead validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, .. } => ApiError::Validation {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert document store errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        ApiError::Persistence {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
