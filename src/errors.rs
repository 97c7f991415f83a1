use std::error::Error as _;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use crate::models::ErrorBody;

/// Top-level application error.
/// All variants carry a human-readable message for display/logging.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Configuration errors ─────────────────────────────────────────────────
    #[error("Missing {name} environment variable")]
    MissingEnvVar { name: String },

    #[error("Invalid value '{value}' for {name}: expected {expected}")]
    InvalidEnvVar { name: String, value: String, expected: String },

    // ── Reference document errors ────────────────────────────────────────────
    #[error("Failed to read reference document {path}")]
    DocumentLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ── Model API errors ─────────────────────────────────────────────────────
    #[error("Gemini API error: {status} - {message}")]
    Upstream { status: u16, message: String },

    #[error("Malformed Gemini API response: {message}")]
    MalformedResponse { message: String },

    #[error("Prompt blocked by Gemini safety filters: {reason}")]
    PromptBlocked { reason: String },

    #[error("Gemini API request failed")]
    Transport(#[from] reqwest::Error),

    // ── Request errors ───────────────────────────────────────────────────────
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    #[error("Field '{field_name}' cannot be empty")]
    EmptyField { field_name: String },

}

impl AppError {
    pub fn missing_env(name: &str) -> Self {
        AppError::MissingEnvVar { name: name.to_string() }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::InvalidBody { .. } | AppError::EmptyField { .. })
    }

    pub fn status_code(&self) -> StatusCode {
        if matches!(self, AppError::MethodNotAllowed) {
            StatusCode::METHOD_NOT_ALLOWED
        } else if self.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    /// The error's source chain, or the headline when there is none.
    pub fn details(&self) -> String {
        let mut details = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            details.push_str(": ");
            details.push_str(&cause.to_string());
            source = cause.source();
        }
        details
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            AppError::MethodNotAllowed => ErrorBody { error: self.to_string(), details: None },
            _ if status.is_client_error() => ErrorBody {
                error: "Invalid request".to_string(),
                details: Some(self.to_string()),
            },
            _ => {
                error!("Error processing request: {}", self.details());
                ErrorBody {
                    error: format!("Failed to process request: {self}"),
                    details: Some(self.details()),
                }
            }
        };
        (status, Json(body)).into_response()
    }
}
