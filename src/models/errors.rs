use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use thiserror::Error;

/// Validation messages keyed by field path (e.g. "name", "intervals.3").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(path, message);
        errors
    }

    pub fn add(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(path.into(), message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn message_for(&self, path: &str) -> Option<&str> {
        self.errors.get(path).map(String::as_str)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|(path, message)| format!("{}: {}", path, message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed payload structure, e.g. the wrong number of weekday intervals.
    #[error("Bad request: {0}")]
    BadRequest(String),
    /// Field-level validation failures surfaced to the user inline.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("Remote API error: {0}")]
    RemoteApi(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for ServiceError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::BadRequest(msg) => HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": msg
            })),
            ServiceError::Validation(errors) => HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": "Validation failed",
                "errors": errors
            })),
            ServiceError::RemoteApi(msg) => {
                tracing::error!("Remote API error: {}", msg);
                HttpResponse::BadGateway().json(json!({
                    "success": false,
                    "message": "Scheduling service is unavailable, please try again"
                }))
            }
            ServiceError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "success": false,
                    "message": "Internal server error"
                }))
            }
        }
    }
}
