use aibos_core::config::ConfigError;
use aibos_core::prelude::{EventSystemError, ServiceError};
use aibos_core::KernelError;
use aibos_inventory::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Kernel(#[from] KernelError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Event(#[from] EventSystemError),

    #[error("Invalid JSON argument: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Stock(#[from] StoreError),

    #[error("Demo step failed: {0}")]
    Demo(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
