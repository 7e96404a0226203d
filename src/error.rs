//! Handler-boundary error type.
//!
//! Application errors are reported in the body with HTTP 200:
//!
//! ```json
//! { "status": "Error", "error": "URL not found" }
//! ```
//!
//! The only exception is [`AppError::Unauthorized`], which never reaches a
//! handler and answers `401` with a `WWW-Authenticate: Basic` challenge.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::api::dto::response::StatusResponse;

/// Realm announced in the basic-auth challenge.
pub const AUTH_REALM: &str = "url-shortener";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to decode request")]
    Decode,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),

    #[error("Unauthorized")]
    Unauthorized,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(validation_message(&errors))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                [(
                    header::WWW_AUTHENTICATE,
                    format!(r#"Basic realm="{AUTH_REALM}""#),
                )],
            )
                .into_response(),
            other => (StatusCode::OK, Json(StatusResponse::error(other.to_string()))).into_response(),
        }
    }
}

/// Builds one message per invalid field, joined with `", "`.
///
/// Field names are reported upper-cased (`url` → `URL`). Fields are sorted so
/// the message is stable across runs.
fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors
        .errors()
        .iter()
        .filter_map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(errs) => Some((field.to_uppercase(), errs)),
            _ => None,
        })
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .map(|(field, errs)| {
            if errs.iter().any(|e| e.code == "required") {
                format!("field {field} is a required field")
            } else if errs.iter().any(|e| e.code == "url") {
                format!("field {field} is a bad url")
            } else {
                format!("field {field} is not valid")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
