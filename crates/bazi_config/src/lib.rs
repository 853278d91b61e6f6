//! Configuration for the bazi command-line tools.
//!
//! Settings come from compiled defaults, a TOML file, `BAZI_*` environment
//! variables and command-line flags, in increasing priority.

pub mod config;
pub mod error;

pub use config::{
    BatchConfig, BaziConfig, CliOverrides, DEFAULT_CONFIG_FILE, DEFAULT_LOG_FILTER, LogConfig,
    OutputConfig, OutputFormat,
};
pub use error::ConfigError;
