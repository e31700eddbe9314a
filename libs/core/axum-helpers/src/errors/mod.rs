pub mod handlers;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Message sent to clients for every unclassified failure.
pub const UNCLASSIFIED_MESSAGE: &str = "An unexpected internal server error occurred.";

/// Body of every error response.
///
/// ```json
/// { "message": "Item not found" }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
    /// Field-level validation errors, only present for 400 responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }
}

/// Application error taxonomy.
///
/// Every failure that reaches the HTTP boundary is one of these variants,
/// and [`IntoResponse`] is the single place they become status codes.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        details: Option<serde_json::Value>,
    },

    #[error("Unclassified error: {0}")]
    Unclassified(#[source] Box<dyn StdError + Send + Sync>),
}

impl AppError {
    pub fn unclassified(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        AppError::Unclassified(err.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation {
            message: message.into(),
            details: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationFailed(_) => StatusCode::UNAUTHORIZED,
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Unclassified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::NotFound(message) => {
                tracing::info!(status = status.as_u16(), "Not found: {}", message);
                ErrorResponse::new(message)
            }
            AppError::AuthenticationFailed(message) => {
                tracing::info!(status = status.as_u16(), "Authentication failed: {}", message);
                ErrorResponse::new(message)
            }
            AppError::Validation { message, details } => {
                tracing::info!(status = status.as_u16(), "Validation failed: {}", message);
                ErrorResponse { message, details }
            }
            AppError::Unclassified(source) => {
                tracing::error!(
                    status = status.as_u16(),
                    error = %error_chain(source.as_ref()),
                    "Unclassified error"
                );
                ErrorResponse::new(UNCLASSIFIED_MESSAGE)
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation(rejection.body_text())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = errors
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let messages: Vec<serde_json::Value> = errors
                    .iter()
                    .map(|err| {
                        serde_json::json!({
                            "code": err.code,
                            "message": err.message,
                        })
                    })
                    .collect();
                (field.to_string(), serde_json::Value::Array(messages))
            })
            .collect::<serde_json::Map<_, _>>();

        AppError::Validation {
            message: "Request validation failed".to_string(),
            details: Some(serde_json::Value::Object(details)),
        }
    }
}

/// Render an error and all of its sources as `outer: inner: root`.
fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
