//! REST API error types
//!
//! Every failure leaves the service as a flat `{ "error": "<message>" }` body. An
//! unknown user and a failed exercise write are reported with a 200 status; clients
//! check for the `error` key on those routes.

use crate::ApiMetrics;

use exlog_core::CoreError;
use exlog_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";
pub const EXERCISE_NOT_ADDED_MESSAGE: &str = "Could not add exercise";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Referenced user does not exist (200)
    #[error("User not found: {user_id} {location}")]
    UserNotFound {
        user_id: String,
        location: ErrorLocation,
    },

    /// Store failure while appending an exercise (200)
    #[error("Could not add exercise: {message} {location}")]
    ExerciseNotAdded {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn user_not_found(user_id: &str) -> Self {
        ApiError::UserNotFound {
            user_id: user_id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: &str) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// A request whose form body or query string could not be decoded
    #[track_caller]
    pub fn malformed_request(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// A failed exercise write. The store error is logged, never sent to the client.
    #[track_caller]
    pub fn exercise_not_added(e: DbError) -> Self {
        ApiError::ExerciseNotAdded {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// A store failure reported to the client as `message` with a 500
    #[track_caller]
    pub fn store_failure(message: &str, e: DbError) -> Self {
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::UserNotFound { .. } => "user_not_found",
            ApiError::ExerciseNotAdded { .. } => "exercise_not_added",
            ApiError::Validation { .. } => "validation",
            ApiError::Internal { .. } => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        ApiMetrics::new().error_occurred(self.kind());

        match self {
            ApiError::Internal { .. } | ApiError::ExerciseNotAdded { .. } => {
                log::error!("{}", self)
            }
            _ => log::warn!("{}", self),
        }

        let (status, body) = match self {
            ApiError::UserNotFound { .. } => (
                StatusCode::OK,
                ApiErrorResponse {
                    error: USER_NOT_FOUND_MESSAGE.into(),
                    field: None,
                },
            ),
            ApiError::ExerciseNotAdded { .. } => (
                StatusCode::OK,
                ApiErrorResponse {
                    error: EXERCISE_NOT_ADDED_MESSAGE.into(),
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorResponse {
                    error: message,
                    field,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorResponse {
                    error: message,
                    field: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Convert unparseable client dates to validation errors naming the offending field
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let (message, field) = match e {
            CoreError::InvalidDate { value, .. } => (format!("Invalid date '{}'", value), "date"),
            CoreError::InvalidBound { bound, value, .. } => {
                (format!("Invalid date '{}'", value), bound)
            }
        };

        ApiError::Validation {
            message,
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
