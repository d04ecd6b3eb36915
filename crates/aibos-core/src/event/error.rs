//! # AIBOS Core Event System Errors
//!
//! [`ListenerError`] is what event handlers and listener hooks return;
//! [`EventSystemError`] is what an emit reports to its caller.
use thiserror::Error;

use crate::event::EventId;
use crate::manifest::ValidationError;
use crate::service::ServiceError;

#[derive(Debug, Error)]
pub enum EventSystemError {
    #[error("Listener {subscription} for event '{event_type}' failed: {source}")]
    ListenerFailed {
        event_type: String,
        subscription: EventId,
        #[source]
        source: ListenerError,
    },

    #[error("Event bus for '{event_type}' is no longer available")]
    BusUnavailable { event_type: String },

    #[error("Cannot encode payload for '{event_type}': {message}")]
    PayloadEncoding { event_type: String, message: String },
}

/// Failure raised inside an event handler or listener hook.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ListenerError {
    message: String,
}

impl ListenerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for ListenerError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ListenerError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<ValidationError> for ListenerError {
    fn from(err: ValidationError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<ServiceError> for ListenerError {
    fn from(err: ServiceError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<EventSystemError> for ListenerError {
    fn from(err: EventSystemError) -> Self {
        Self::new(err.to_string())
    }
}
