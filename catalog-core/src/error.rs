//! Error types for Catalog Core

use serde_json::Value;
use thiserror::Error;

/// Shown when a failed response carries nothing usable
pub const DEFAULT_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Top-level error type for all catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),
}

impl CatalogError {
    /// Message suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Api(err) => err.user_message(),
            CatalogError::Transport(msg) | CatalogError::Decode(msg) if !msg.is_empty() => {
                msg.clone()
            }
            CatalogError::Validation(errors) => errors.to_string(),
            _ => DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else {
            CatalogError::Transport(err.to_string())
        }
    }
}

/// A non-success response from the backend
#[derive(Debug, Clone, Error, PartialEq)]
#[error("status {status}: {}", self.user_message())]
pub struct ApiError {
    /// HTTP status code
    pub status: u16,

    /// Canonical reason phrase, when the status has one
    pub reason: Option<String>,

    /// Response body; a JSON value when it parsed, a string otherwise, null when empty
    pub body: Value,
}

impl ApiError {
    pub fn new(status: u16, reason: Option<String>, body: Value) -> Self {
        Self {
            status,
            reason,
            body,
        }
    }

    /// Best-effort message extracted from the response
    pub fn user_message(&self) -> String {
        if let Some(msg) = describe_error_body(&self.body) {
            return msg;
        }
        match &self.reason {
            Some(reason) => format!("Error {}: {}", self.status, reason),
            None => DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Extract a readable message from an error response body.
///
/// Priority: a plain string, then a list joined with `; `, then an error
/// envelope's `message`, then `field: message` pairs joined with `; `.
/// Returns `None` when none of these yield any text.
pub fn describe_error_body(body: &Value) -> Option<String> {
    match body {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(value_text).collect();
            non_empty(parts.join("; "))
        }
        Value::Object(map) => {
            if let Some(Value::String(message)) = map.get("message") {
                if !message.is_empty() {
                    return Some(message.clone());
                }
            }
            let parts: Vec<String> = map
                .iter()
                .filter_map(|(field, value)| value_text(value).map(|v| format!("{field}: {v}")))
                .collect();
            non_empty(parts.join("; "))
        }
        _ => None,
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Validation failures caught before any request is sent
#[derive(Debug, Clone, Default, Error, PartialEq, Eq)]
#[error("{}", self.summary())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// First message reported for a field
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
