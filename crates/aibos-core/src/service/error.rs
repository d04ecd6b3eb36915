//! # AIBOS Core Service Errors
//!
//! Errors raised while registering or invoking services.
use thiserror::Error;

use crate::manifest::ValidationError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Duplicate service key detected: {key} (already owned by '{owner_id}')")]
    DuplicateServiceKey { key: String, owner_id: String },

    #[error("Service not found or missing handler: {key}")]
    ServiceNotFound { key: String },

    #[error("Invalid input for service '{key}': {source}")]
    InvalidInput {
        key: String,
        #[source]
        source: ValidationError,
    },

    #[error("Invalid output from service '{key}': {source}")]
    InvalidOutput {
        key: String,
        #[source]
        source: ValidationError,
    },

    /// Error raised by a handler. The message is passed through untouched.
    #[error("{message}")]
    HandlerFailed { key: String, message: String },
}

impl ServiceError {
    /// Handler-side constructor. The registry fills in the key on the way out.
    pub fn handler(message: impl Into<String>) -> Self {
        ServiceError::HandlerFailed {
            key: String::new(),
            message: message.into(),
        }
    }

    /// The service key the error relates to, when known.
    pub fn key(&self) -> &str {
        match self {
            ServiceError::DuplicateServiceKey { key, .. }
            | ServiceError::ServiceNotFound { key }
            | ServiceError::InvalidInput { key, .. }
            | ServiceError::InvalidOutput { key, .. }
            | ServiceError::HandlerFailed { key, .. } => key,
        }
    }

    /// The structured validation failure behind an input or output error.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            ServiceError::InvalidInput { source, .. } | ServiceError::InvalidOutput { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }

    pub(crate) fn with_key(self, call_key: &str) -> Self {
        match self {
            ServiceError::HandlerFailed { key, message } if key.is_empty() => {
                ServiceError::HandlerFailed {
                    key: call_key.to_string(),
                    message,
                }
            }
            other => other,
        }
    }
}

impl From<ValidationError> for ServiceError {
    /// Validation failures raised inside a handler are handler failures.
    fn from(err: ValidationError) -> Self {
        ServiceError::handler(err.to_string())
    }
}
