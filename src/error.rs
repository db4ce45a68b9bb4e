//! Application error taxonomy and HTTP response mapping.
//!
//! Every fallible operation in the service surfaces one of four error
//! classes, each mapped to a fixed HTTP status:
//!
//! - [`AppError::Validation`] - 400, malformed input (names the failing field)
//! - [`AppError::NotFound`] - 404, unknown short code
//! - [`AppError::Conflict`] - 409, duplicate short code
//! - [`AppError::Internal`] - 500, persistence or other internal failure
//!
//! Errors are terminal for the request that raised them; nothing retries.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serialized error payload: machine-readable code, human message, details.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Conflict { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Splits the error into its serializable parts.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

/// Maps database failures to the application taxonomy.
///
/// A unique-constraint violation on `links.code` means two writers raced on
/// the same short code; the primary key is the correctness backstop, so it
/// surfaces as [`AppError::Conflict`]. Every other database error is logged
/// with context and returned as a generic internal failure so no driver
/// detail leaks to the caller.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::conflict(
                    "Short code already exists",
                    json!({ "constraint": db.constraint() }),
                );
            }
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Internal server error", json!({}))
    }
}

/// Maps `validator` derive failures to a 400 with field-keyed details.
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Request validation failed", details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_info_codes() {
        let err = AppError::bad_request("bad", json!({ "field": "targetUrl" }));
        assert_eq!(err.to_error_info().code, "validation_error");

        let err = AppError::not_found("missing", json!({}));
        assert_eq!(err.to_error_info().code, "not_found");

        let err = AppError::conflict("taken", json!({}));
        assert_eq!(err.to_error_info().code, "conflict");

        let err = AppError::internal("boom", json!({}));
        assert_eq!(err.to_error_info().code, "internal_error");
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::conflict("Short code already exists", json!({}));
        assert_eq!(err.to_string(), "Short code already exists");
    }

    #[test]
    fn test_validation_errors_conversion_keeps_fields() {
        use validator::Validate;

        #[derive(Validate)]
        struct Probe {
            #[validate(url)]
            target_url: String,
        }

        let probe = Probe {
            target_url: "not-a-url".to_string(),
        };

        let err: AppError = probe.validate().unwrap_err().into();
        match err {
            AppError::Validation { details, .. } => {
                assert!(details.get("target_url").is_some());
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
