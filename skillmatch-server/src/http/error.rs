//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Store failures surface here unchanged through `?` in the handlers.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::auth::AuthError;
use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request body failed validation (400)
    Validation(ValidationError),

    /// Unparseable path, query or body (400)
    BadRequest { message: String },

    /// Resource not found (404)
    NotFound { message: String },

    /// Missing or invalid bearer token (401)
    Unauthorized(AuthError),

    /// Data-access failure (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                }),
            ),
            Self::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "bad_request",
                    "message": message
                }),
            ),
            Self::NotFound { message } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": message
                }),
            ),
            Self::Unauthorized(e) => {
                tracing::debug!("Rejected request: {}", e);
                (
                    StatusCode::UNAUTHORIZED,
                    json!({
                        "error": "unauthorized",
                        "message": e.to_string()
                    }),
                )
            }
            Self::Database(DbError::MissingReference { .. }) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "invalid_reference",
                    "message": self.to_string()
                }),
            ),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "{}", e),
            Self::NotFound { message } => write!(f, "{}", message),
            Self::Unauthorized(e) => write!(f, "{}", e),
            Self::Database(e) => write!(f, "{}", e),
            Self::BadRequest { message } => write!(f, "{}", message),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        Self::Unauthorized(e)
    }
}
