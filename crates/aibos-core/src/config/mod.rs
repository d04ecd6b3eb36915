//! # AIBOS Core Configuration
//!
//! [`KernelConfig`] holds the host settings: run mode, the tenant/user the
//! kernel acts for, the upgrade [`VersionPolicy`], whether re-boot clears
//! event subscriptions, the log filter and an optional allowlist of
//! modules. It loads from JSON, YAML (`yaml-config` feature) or TOML
//! (`toml-config` feature), picked by file extension. Missing keys take
//! their defaults.
pub mod error;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::adapter::VersionPolicy;
use crate::kernel::constants::{DEFAULT_LOG_LEVEL, DEFAULT_MODE, DEV_TENANT_ID, DEV_USER_ID};
use crate::kernel::KernelContext;

pub use error::ConfigError;

/// Supported configuration formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml) - requires "yaml-config" feature
    #[cfg(feature = "yaml-config")]
    Yaml,
    /// TOML format (.toml) - requires "toml-config" feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "toml",
        }
    }

    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                #[cfg(feature = "yaml-config")]
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                #[cfg(feature = "toml-config")]
                "toml" => Some(ConfigFormat::Toml),
                _ => None,
            })
    }

    fn name(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "JSON",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "YAML",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "TOML",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    pub mode: String,
    pub tenant_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub version_policy: VersionPolicy,
    pub clear_events_on_reboot: bool,
    pub log_level: String,
    /// When set, only these module ids are booted by the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_modules: Option<Vec<String>>,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MODE.to_string(),
            tenant_id: DEV_TENANT_ID.to_string(),
            user_id: Some(DEV_USER_ID.to_string()),
            version_policy: VersionPolicy::default(),
            clear_events_on_reboot: true,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            enabled_modules: None,
        }
    }
}

impl KernelConfig {
    /// Load from a file, choosing the format by extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&data, format)
    }

    pub fn parse(data: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let err = |e: &dyn std::fmt::Display| ConfigError::Deserialize {
            format: format.name(),
            message: e.to_string(),
        };
        match format {
            ConfigFormat::Json => serde_json::from_str(data).map_err(|e| err(&e)),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::from_str(data).map_err(|e| err(&e)),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::from_str(data).map_err(|e| err(&e)),
        }
    }

    pub fn to_format_string(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        let err = |e: &dyn std::fmt::Display| ConfigError::Serialize {
            format: format.name(),
            message: e.to_string(),
        };
        match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self).map_err(|e| err(&e)),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::to_string(self).map_err(|e| err(&e)),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(|e| err(&e)),
        }
    }

    /// The context lanes act for by default.
    pub fn context(&self) -> KernelContext {
        KernelContext {
            tenant_id: self.tenant_id.clone(),
            user_id: self.user_id.clone(),
        }
    }

    /// Whether the host should boot `module_id`.
    pub fn module_enabled(&self, module_id: &str) -> bool {
        self.enabled_modules
            .as_ref()
            .is_none_or(|ids| ids.iter().any(|id| id == module_id))
    }
}
