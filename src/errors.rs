use std::fmt;

use derive_more::Display;
use serde::Serialize;
use validator::ValidationErrors;

#[derive(Debug)]
pub enum EditorError {
    Validation(Vec<FieldError>),
    SaveInFlight,
    ModalClosed,
    UnknownField(String),
    ImmutableField(String),
    EntryOutOfRange(usize),
    SingleEntrySection,
    Api(ApiClientError),
    InternalError(String),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::Validation(errors) => {
                let messages = errors.iter()
                    .map(|e| format!("{}:{}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "validation error: {}", messages)
            }
            EditorError::SaveInFlight => write!(f, "A save is already in progress"),
            EditorError::ModalClosed => write!(f, "The editor is closed"),
            EditorError::UnknownField(field) => write!(f, "Unknown form field: {}", field),
            EditorError::ImmutableField(field) => write!(f, "Field cannot be edited: {}", field),
            EditorError::EntryOutOfRange(index) => write!(f, "No entry at index {}", index),
            EditorError::SingleEntrySection => write!(f, "Section holds a single entry"),
            EditorError::Api(err) => write!(f, "Update request failed: {}", err),
            EditorError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl From<ValidationErrors> for EditorError {
    fn from(errors: ValidationErrors) -> Self {
        EditorError::Validation(FieldError::from_validation(errors))
    }
}

impl From<ApiClientError> for EditorError {
    fn from(err: ApiClientError) -> Self {
        EditorError::Api(err)
    }
}

impl From<anyhow::Error> for EditorError {
    fn from(err: anyhow::Error) -> Self {
        EditorError::InternalError(err.to_string())
    }
}

/// Errors raised by the profile API client.
#[derive(Debug, Display)]
pub enum ApiClientError {
    #[display("Invalid endpoint: {_0}")]
    InvalidEndpoint(String),

    #[display("Request timed out")]
    Timeout,

    #[display("Network error: {_0}")]
    Network(String),

    #[display("Not authorized")]
    Unauthorized,

    #[display("Server rejected update ({_0}): {_1}")]
    Rejected(u16, String),

    #[display("Malformed server response: {_0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiClientError::Timeout
        } else if err.is_decode() {
            ApiClientError::Decode(err.to_string())
        } else {
            ApiClientError::Network(err.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Flattens `validator` output into field/message pairs.
    pub fn from_validation(errors: ValidationErrors) -> Vec<FieldError> {
        errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(|e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect()
    }

    /// Same as [`from_validation`](Self::from_validation), with each field
    /// prefixed by the entry path it belongs to, e.g. `education[2].degree`.
    pub fn scoped(path: &str, errors: ValidationErrors) -> Vec<FieldError> {
        Self::from_validation(errors)
            .into_iter()
            .map(|mut e| {
                e.field = format!("{}.{}", path, e.field);
                e
            })
            .collect()
    }
}
