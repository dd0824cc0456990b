//! Domain error types for picklab
//!
//! Provides structured error types for different domains:
//! - `ConfigError` for config files and command-line arguments
//! - `PickLabError` as the top-level error type, including terminal setup

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for picklab
#[derive(Debug, Error)]
pub enum PickLabError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(#[source] std::io::Error),
}

/// Errors related to configuration and CLI arguments
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0} requires a value")]
    MissingValue(&'static str),

    #[error("Invalid value '{value}' for {flag}")]
    InvalidValue { flag: &'static str, value: String },

    #[error("Unknown argument '{0}'")]
    UnknownArgument(String),
}

/// Result type alias for PickLabError
pub type Result<T> = std::result::Result<T, PickLabError>;

/// Result type alias for ConfigError
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
