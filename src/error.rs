//! Application error type and its HTTP representation.
//!
//! Every fallible operation in the service returns [`AppError`]. The four
//! variants are mutually exclusive and map one-to-one onto status codes:
//!
//! | Variant      | Status | `error` field           |
//! |--------------|--------|-------------------------|
//! | `Validation` | 400    | `Validation error`      |
//! | `NotFound`   | 404    | `Not found`             |
//! | `Conflict`   | 409    | `Conflict`              |
//! | `Internal`   | 500    | `Internal server error` |
//!
//! Internal errors are logged server-side; their message never reaches the client.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Client-facing detail for every internal error.
const INTERNAL_DETAIL: &str = "Internal server error";

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Caller supplied malformed or oversized input.
    #[error("{message}")]
    Validation { message: String },

    /// The requested key has no mapping.
    #[error("{message}")]
    NotFound { message: String },

    /// The key is already taken.
    #[error("{message}")]
    Conflict { message: String },

    /// Storage or other unexpected failure.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Value of the `error` field in the response body.
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "Validation error",
            AppError::NotFound { .. } => "Not found",
            AppError::Conflict { .. } => "Conflict",
            AppError::Internal { .. } => "Internal server error",
        }
    }

    /// Builds the response body, hiding internal messages.
    pub fn to_error_body(&self) -> ErrorBody {
        let detail = match self {
            AppError::Internal { .. } => INTERNAL_DETAIL.to_string(),
            other => other.to_string(),
        };

        ErrorBody {
            error: self.category(),
            detail,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { message } = &self {
            tracing::error!(error = %message, "Request failed with internal error");
        }

        (self.status_code(), Json(self.to_error_body())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal(format!("Database error: {e}"))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
        AppError::bad_request("Invalid JSON in request body")
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        if rejection.status().is_server_error() {
            return AppError::internal(format!(
                "Path extraction failed: {}",
                rejection.body_text()
            ));
        }

        tracing::debug!(reason = %rejection.body_text(), "Rejected path parameter");
        AppError::bad_request("Invalid URL key in path")
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());

        AppError::bad_request(message)
    }
}
