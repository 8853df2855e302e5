//! Application error type and its HTTP mapping.
//!
//! [`AppError`] sits above the store: service and handler code converts
//! [`StoreError`] into one of these variants, and axum renders them as JSON:
//!
//! ```json
//! { "error": { "code": "conflict", "message": "Alias already exists", "details": { "alias": "abc" } } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::error::StoreError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Forbidden { message: String, details: Value },
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
    pub fn forbidden(message: impl Into<String>, details: Value) -> Self {
        Self::Forbidden {
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

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its serializable form.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Forbidden { message, details } => ("forbidden", message, details),
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
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AliasExists(alias) => {
                AppError::conflict("Alias already exists", json!({ "alias": alias }))
            }
            StoreError::AliasNotFound(alias) => {
                AppError::not_found("Alias not found", json!({ "alias": alias }))
            }
            StoreError::WrongUser(alias) => AppError::forbidden(
                "Alias belongs to another user",
                json!({ "alias": alias }),
            ),
            StoreError::Unavailable(reason) | StoreError::Io(reason) => {
                tracing::error!(%reason, "Storage failure");
                AppError::internal("Storage error", json!({}))
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = errors
            .field_errors()
            .iter()
            .map(|(field, errs)| {
                let messages: Vec<String> = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                (field.to_string(), json!(messages))
            })
            .collect::<serde_json::Map<_, _>>();

        AppError::bad_request("Invalid request", Value::Object(details))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_map_to_http_status() {
        let cases = [
            (StoreError::AliasExists("a".into()), StatusCode::CONFLICT),
            (StoreError::AliasNotFound("a".into()), StatusCode::NOT_FOUND),
            (StoreError::WrongUser("a".into()), StatusCode::FORBIDDEN),
            (
                StoreError::Unavailable("down".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                StoreError::Io("bad".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (store_err, status) in cases {
            assert_eq!(AppError::from(store_err).status_code(), status);
        }
    }

    #[test]
    fn test_storage_details_are_not_exposed() {
        let err = AppError::from(StoreError::Io("relation \"url\" does not exist".into()));
        let info = err.to_error_info();

        assert_eq!(info.code, "internal_error");
        assert!(!info.message.contains("relation"));
        assert_eq!(info.details, json!({}));
    }

    #[test]
    fn test_error_info_codes() {
        assert_eq!(
            AppError::bad_request("x", json!({})).to_error_info().code,
            "validation_error"
        );
        assert_eq!(
            AppError::forbidden("x", json!({})).to_error_info().code,
            "forbidden"
        );
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::conflict("Alias already exists", json!({ "alias": "abc" }));
        assert_eq!(err.to_string(), "Alias already exists");
    }
}
