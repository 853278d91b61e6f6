//! Error types for configuration loading.

use thiserror::Error;

/// Errors from reading, parsing or validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("cannot read config {path}: {message}")]
    Io { path: String, message: String },
    /// Config file is not valid TOML for [`BaziConfig`](crate::BaziConfig).
    #[error("invalid config {path}: {message}")]
    Parse { path: String, message: String },
    /// A resolved value is out of range.
    #[error("invalid value for {field}: {message}")]
    Validation { field: String, message: String },
}
