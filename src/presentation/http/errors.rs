//! HTTP error handling and response conversion.
//!
//! Handler errors map to HTTP status codes and a JSON body of the form
//! `{"error": "..."}`. Field-level validation failures add a `fields` map so
//! every rejected field is reported in a single response.

use crate::domain::shared::errors::{DomainError, FieldErrors};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found (404). The message is shown to the client.
    NotFound(String),

    /// Malformed request (400).
    BadRequest(String),

    /// Missing or invalid bearer token (401).
    Unauthorized,

    /// Authenticated but not allowed (403).
    #[allow(dead_code)]
    Forbidden(String),

    /// Request data failed validation (400).
    ValidationError(String),

    /// One or more fields failed validation (400).
    InvalidFields(FieldErrors),

    /// Unique constraint or state conflict (409).
    Conflict(String),

    /// Database operation failed (500).
    Database(String),

    /// Storage/file operation failed (500).
    Storage(String),

    /// Unclassified internal error (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Unauthorized => write!(f, "Unauthorized"),
            Self::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            Self::InvalidFields(fields) => {
                let names: Vec<&str> = fields.field_names().collect();
                write!(f, "Invalid fields: {}", names.join(", "))
            }
            Self::Conflict(msg) => write!(f, "Conflict: {}", msg),
            Self::Database(msg) => write!(f, "Database error: {}", msg),
            Self::Storage(msg) => write!(f, "Storage error: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::ValidationError(_) | Self::InvalidFields(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Storage(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get a user-safe error message (without implementation details).
    fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) => msg.clone(),
            Self::BadRequest(msg) => msg.clone(),
            Self::Unauthorized => "Authentication required".into(),
            Self::Forbidden(_) => "Access denied".into(),
            Self::ValidationError(msg) => msg.clone(),
            Self::InvalidFields(_) => "Invalid input".into(),
            Self::Conflict(msg) => msg.clone(),
            Self::Database(_) => "Database operation failed".into(),
            Self::Storage(_) => "File operation failed".into(),
            Self::Internal(_) => "Internal server error".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("error={}", self);
            }
            StatusCode::BAD_REQUEST | StatusCode::FORBIDDEN | StatusCode::CONFLICT => {
                tracing::warn!("error={}", self);
            }
            StatusCode::NOT_FOUND | StatusCode::UNAUTHORIZED => {
                tracing::debug!("error={}", self);
            }
            _ => {
                tracing::info!("error={}", self);
            }
        }

        let body = match self {
            Self::InvalidFields(fields) => json!({ "error": message, "fields": fields }),
            _ => json!({ "error": message }),
        };
        (status, Json(body)).into_response()
    }
}

// === Domain Error Conversion ===

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::ValidationError(msg) => AppError::ValidationError(msg),
            DomainError::InvalidFields(fields) => AppError::InvalidFields(fields),
            DomainError::Conflict(msg) => AppError::Conflict(msg),
            DomainError::InfrastructureError(msg) => {
                tracing::error!(infrastructure_error = %msg);
                AppError::Internal(msg)
            }
            DomainError::Unauthorized => AppError::Unauthorized,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidFields(FieldErrors::from(err))
    }
}

// === Database Error Conversion ===

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            sqlx::Error::Configuration(msg) => {
                tracing::error!(database_config_error = %msg);
                AppError::Internal("Database configuration error".into())
            }
            sqlx::Error::Io(e) => {
                tracing::error!(database_io_error = %e);
                AppError::Database("Database I/O error".into())
            }
            sqlx::Error::PoolTimedOut => {
                tracing::warn!("Database connection pool exhausted, timing out");
                AppError::Database("Connection pool exhausted".into())
            }
            sqlx::Error::PoolClosed => {
                tracing::error!("Database connection pool closed");
                AppError::Database("Database connection unavailable".into())
            }
            _ => {
                tracing::error!(database_error = %err);
                AppError::Database("Database error".into())
            }
        }
    }
}

// === General Fallback Error Conversion ===

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!(anyhow_error = %err, "Unclassified error with chain");
        err.chain().for_each(|cause| {
            tracing::error!(cause = %cause, "Error source");
        });
        AppError::Internal("Operation failed".into())
    }
}
