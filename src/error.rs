//! Application error type shared by every layer.
//!
//! Creation-path errors map one-to-one onto HTTP responses. Post-processing
//! failures never surface here; workers absorb them.

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

/// Machine-readable error payload returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The target URL failed validation.
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },

    /// An explicit alias contains a path separator.
    #[error("Alias must not contain '/': {alias}")]
    AliasContainsSlash { alias: String },

    /// The key is already taken, or the URL is already fully registered.
    #[error("Key already exists: {key}")]
    KeyAlreadyExists { key: String },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The QR image for this key is not rendered (yet, or ever).
    #[error("QR code not available for key: {key}")]
    QrNotAvailable { key: String },

    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    pub fn alias_contains_slash(alias: impl Into<String>) -> Self {
        Self::AliasContainsSlash {
            alias: alias.into(),
        }
    }

    pub fn key_already_exists(key: impl Into<String>) -> Self {
        Self::KeyAlreadyExists { key: key.into() }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn qr_not_available(key: impl Into<String>) -> Self {
        Self::QrNotAvailable { key: key.into() }
    }

    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
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

    /// HTTP status and stable error code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::InvalidUrl { .. } => (StatusCode::BAD_REQUEST, "invalid_url"),
            AppError::AliasContainsSlash { .. } => {
                (StatusCode::BAD_REQUEST, "alias_contains_slash")
            }
            AppError::KeyAlreadyExists { .. } => (StatusCode::CONFLICT, "key_already_exists"),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            AppError::QrNotAvailable { .. } => (StatusCode::NOT_FOUND, "qr_not_available"),
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    /// Converts the error into the serializable payload used in responses.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code) = self.status_and_code();
        let details = match self {
            AppError::InvalidUrl { url } => json!({ "url": url }),
            AppError::AliasContainsSlash { alias } => json!({ "alias": alias }),
            AppError::KeyAlreadyExists { key } | AppError::QrNotAvailable { key } => {
                json!({ "key": key })
            }
            AppError::NotFound { details, .. }
            | AppError::Validation { details, .. }
            | AppError::Internal { details, .. } => details.clone(),
        };

        ErrorInfo {
            code,
            message: self.to_string(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::key_already_exists(db.constraint().unwrap_or("unknown"));
        }

        tracing::error!("Database error: {}", e);
        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request("Request validation failed", json!(e))
    }
}
