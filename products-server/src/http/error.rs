//! API error types with IntoResponse
//!
//! Bodies use the `{"detail": "..."}` shape existing callers expect.
//! Store failures are logged here and answered with a fixed message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// Message for every unexpected failure
pub const INTERNAL_MESSAGE: &str = "internal server error occurred";

/// Message when the liveness probe fails
pub const UNAVAILABLE_MESSAGE: &str = "Bye World! Database connection failed.";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request could not be parsed (422)
    Validation { message: String },

    /// Resource not found (404)
    NotFound { resource: &'static str },

    /// Liveness probe failed (500, logged)
    Unavailable(DbError),

    /// Database error (500, logged)
    Database(DbError),

    /// Internal error (500, logged)
    Internal { message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::Validation { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            Self::NotFound { resource } => {
                (StatusCode::NOT_FOUND, format!("{} not found", resource))
            }
            Self::Unavailable(e) => {
                tracing::error!(error = %e, "Database liveness probe failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    UNAVAILABLE_MESSAGE.to_string(),
                )
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!(error = %e, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
