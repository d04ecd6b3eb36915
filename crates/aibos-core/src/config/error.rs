use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown or unsupported config format for path: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Failed to deserialize config from {format}: {message}")]
    Deserialize { format: &'static str, message: String },

    #[error("Failed to serialize config to {format}: {message}")]
    Serialize { format: &'static str, message: String },
}
