//! Centralized error handling.
//!
//! Every failure in the application is an [`AppError`]. The mapping from
//! error kind to HTTP status and client message lives in [`AppError::status`]
//! and [`AppError::message`]; the JSON body is an [`ErrorMessage`], completed
//! with the request path by the `error_envelope` middleware.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Offending field name -> constraint message.
pub type FieldErrors = BTreeMap<String, String>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Input shape violates field constraints
    #[error("Invalid field(s)")]
    Validation(FieldErrors),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Username '{0}' already registered")]
    UniqueConstraintViolation(String),

    /// Wrong current password, or new/confirmation disagreement.
    /// Both causes are reported identically.
    #[error("Password does not match")]
    PasswordMismatch,

    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get error code for logs and clients
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::UniqueConstraintViolation(_) => "CONFLICT",
            AppError::PasswordMismatch => "PASSWORD_MISMATCH",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UniqueConstraintViolation(_) => StatusCode::CONFLICT,
            AppError::PasswordMismatch => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn message(&self) -> String {
        match self {
            AppError::Database(_) | AppError::Internal(_) => {
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Per-field messages, present for validation failures only
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(entity: impl Into<String>) -> Self {
        AppError::NotFound(entity.into())
    }

    /// Validation failure on a single field
    pub fn invalid_field(field: impl Into<String>, msg: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), msg.into());
        AppError::Validation(errors)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessage {
    /// When the error was produced
    pub timestamp: DateTime<Utc>,
    /// Originating request path
    #[schema(example = "/api/v1/usuarios")]
    pub path: String,
    /// Originating request method
    #[schema(example = "POST")]
    pub method: String,
    /// HTTP status code
    #[schema(example = 422)]
    pub status: u16,
    /// HTTP reason phrase
    #[schema(example = "Unprocessable Entity")]
    pub status_text: String,
    /// Fixed human-readable message
    #[schema(example = "Invalid field(s)")]
    pub message: String,
    /// Field name -> constraint message (validation failures only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ErrorMessage {
    /// Build the body for an error, without request information
    pub fn from_error(err: &AppError) -> Self {
        let status = err.status();
        Self {
            timestamp: Utc::now(),
            path: String::new(),
            method: String::new(),
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            message: err.message(),
            errors: err.field_errors().cloned(),
        }
    }

    /// Attach the originating request
    pub fn at(mut self, method: impl Into<String>, path: impl Into<String>) -> Self {
        self.method = method.into();
        self.path = path.into();
        self
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = self.code(), error = ?self, "Api Error");
        } else {
            tracing::warn!(code = self.code(), error = %self, "Api Error");
        }

        let body = ErrorMessage::from_error(&self);
        let mut response = (status, Json(body.clone())).into_response();
        // Picked up by the error envelope to add path and method
        response.extensions_mut().insert(body);
        response
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, entity: impl Into<String>) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: impl Into<String>) -> AppResult<T> {
        self.ok_or_else(|| AppError::not_found(entity))
    }
}
