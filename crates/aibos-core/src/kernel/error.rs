//! # AIBOS Core Kernel Errors
//!
//! [`Error`] aggregates the per-subsystem errors so hosts can use a single
//! [`Result`] type.
use thiserror::Error as ThisError;

use crate::adapter::LifecycleError;
use crate::config::ConfigError;
use crate::event::EventSystemError;
use crate::manifest::ValidationError;
use crate::service::ServiceError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Manifest validation error: {0}")]
    Manifest(#[from] ValidationError),

    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Lifecycle error: {0}")]
    Lifecycle(#[from] LifecycleError),

    #[error("Event system error: {0}")]
    EventSystem(#[from] EventSystemError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::Other(message)
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Error::Other(message.to_string())
    }
}
