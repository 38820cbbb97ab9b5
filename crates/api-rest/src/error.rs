//! HTTP error handling and conversion.
//!
//! This module provides the error type returned by every handler and
//! extractor, and the JSON body it renders to.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// API-specific error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Field constraints rejected the input
    #[error("Validation failed")]
    Validation(#[from] ValidationErrors),

    /// Input could not be read into the declared type (missing field,
    /// wrong type, unknown enum value)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed request (bad JSON syntax, wrong content type)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Not found
    #[error("{0}")]
    NotFound(String),

    /// Endpoint is declared but has no behavior yet
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// User store failure
    #[error("Storage error")]
    Storage(#[from] chirp_infrastructure::Error),

    /// Internal server error
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for API response
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) | Self::InvalidInput(_) => "VALIDATION_ERROR",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::NotFound(_) => "NOT_FOUND",
            Self::NotImplemented(_) => "NOT_IMPLEMENTED",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Standardized error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code
    #[schema(example = "VALIDATION_ERROR")]
    pub error: String,

    /// Human-readable message
    #[schema(example = "Validation failed")]
    pub message: String,

    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Add details to the error response
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

/// One violated constraint, addressed by its dotted field path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Field path, e.g. `person.age`
    pub field: String,
    /// Constraint that failed, e.g. `range`
    pub code: String,
    /// Human-readable description
    pub message: String,
}

/// Flatten nested validation errors into a list sorted by field path.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    collect_field_errors("", errors, &mut out);
    out.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
    out
}

fn collect_field_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            (*field).to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                out.extend(list.iter().map(|e| FieldError {
                    field: path.clone(),
                    code: e.code.to_string(),
                    message: describe(e),
                }));
            }
            ValidationErrorsKind::Struct(inner) => collect_field_errors(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_field_errors(&format!("{path}[{index}]"), inner, out);
                }
            }
        }
    }
}

fn describe(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    let param = |name: &str| error.params.get(name).map(|v| v.to_string());

    match error.code.as_ref() {
        "length" => match (param("min"), param("max")) {
            (Some(min), Some(max)) => format!("length must be between {min} and {max}"),
            (Some(min), None) => format!("length must be at least {min}"),
            (None, Some(max)) => format!("length must be at most {max}"),
            (None, None) => "invalid length".to_string(),
        },
        "range" => {
            let bounds: Vec<String> = [
                ("exclusive_min", "greater than"),
                ("min", "at least"),
                ("max", "at most"),
                ("exclusive_max", "less than"),
            ]
            .iter()
            .filter_map(|(name, text)| param(name).map(|v| format!("{text} {v}")))
            .collect();
            format!("must be {}", bounds.join(" and "))
        }
        "email" => "must be a valid email address".to_string(),
        code => format!("failed {code} check"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Storage(source) => error!(error = %source, "User store failure"),
            Self::Internal(detail) => error!(detail = %detail, "Internal error"),
            _ => {}
        }

        let body = ErrorResponse::new(self.error_code(), self.to_string());
        let body = match &self {
            Self::Validation(errors) => match serde_json::to_value(field_errors(errors)) {
                Ok(details) => body.with_details(details),
                Err(_) => body,
            },
            _ => body,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
