//! # AIBOS Core Lifecycle Errors
//!
//! Errors raised while installing, upgrading or unmounting apps.
use thiserror::Error;

use crate::manifest::ValidationError;
use crate::service::ServiceError;

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("App '{app_id}' is not installed")]
    NotInstalled { app_id: String },

    #[error("App '{app_id}' is already installed (version {version})")]
    AlreadyInstalled { app_id: String, version: String },

    #[error("Upgrade for '{app_id}' rejected: {current} -> {proposed}: {reason}")]
    VersionError {
        app_id: String,
        current: String,
        proposed: String,
        reason: String,
    },

    #[error("Upgrade target '{app_id}' does not match manifest id '{manifest_id}'")]
    IdMismatch { app_id: String, manifest_id: String },

    #[error("Invalid manifest: {0}")]
    Manifest(#[from] ValidationError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}
