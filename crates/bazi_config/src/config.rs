//! Layered configuration.
//!
//! Resolution order (highest priority first):
//! 1. CLI flags (`CliOverrides`)
//! 2. Environment variables (`BAZI_*`)
//! 3. Config file (explicit path, else `bazi.toml` in the working directory)
//! 4. Compiled defaults

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name looked up when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "bazi.toml";
/// Log filter used when nothing else is configured.
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub const ENV_OUTPUT_FORMAT: &str = "BAZI_OUTPUT_FORMAT";
pub const ENV_OUTPUT_PRETTY: &str = "BAZI_OUTPUT_PRETTY";
pub const ENV_LOG: &str = "BAZI_LOG";
pub const ENV_BATCH_PARALLEL: &str = "BAZI_BATCH_PARALLEL";

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation {
                field: "output.format".to_string(),
                message: format!("expected \"text\" or \"json\", got {other:?}"),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    /// Pretty-print JSON output.
    pub pretty: Option<bool>,
}

impl OutputConfig {
    pub fn effective_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    pub fn effective_pretty(&self) -> bool {
        self.pretty.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `"bazi_rs=debug"`.
    pub filter: Option<String>,
}

impl LogConfig {
    pub fn effective_filter(&self) -> &str {
        self.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Analyze batch entries on the rayon pool.
    pub parallel: Option<bool>,
}

impl BatchConfig {
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaziConfig {
    pub output: OutputConfig,
    pub log: LogConfig,
    pub batch: BatchConfig,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub format: Option<OutputFormat>,
    pub pretty: Option<bool>,
    pub log_filter: Option<String>,
    pub parallel: Option<bool>,
}

impl BaziConfig {
    /// Load configuration with all layers applied.
    ///
    /// An explicit `path` must exist. Without one, `bazi.toml` in `root` is
    /// used if present.
    pub fn load(
        root: &Path,
        path: Option<&Path>,
        cli: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        Self::load_with_env(root, path, cli, |key| std::env::var(key).ok())
    }

    /// [`load`](Self::load) with an injectable environment lookup.
    pub fn load_with_env(
        root: &Path,
        path: Option<&Path>,
        cli: Option<&CliOverrides>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        match path {
            Some(p) => Self::merge_toml_file(&mut config, p)?,
            None => {
                let candidate = root.join(DEFAULT_CONFIG_FILE);
                if candidate.exists() {
                    Self::merge_toml_file(&mut config, &candidate)?;
                }
            }
        }

        Self::apply_env_overrides(&mut config, env)?;

        if let Some(cli) = cli {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn validate(config: &BaziConfig) -> Result<(), ConfigError> {
        if let Some(filter) = &config.log.filter {
            if filter.trim().is_empty() {
                return Err(ConfigError::Validation {
                    field: "log.filter".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    fn merge_toml_file(config: &mut BaziConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let file_config: BaziConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        Self::merge(config, &file_config);
        Ok(())
    }

    /// Copy every `Some` value of `other` over `base`.
    fn merge(base: &mut BaziConfig, other: &BaziConfig) {
        if other.output.format.is_some() {
            base.output.format = other.output.format;
        }
        if other.output.pretty.is_some() {
            base.output.pretty = other.output.pretty;
        }
        if other.log.filter.is_some() {
            base.log.filter = other.log.filter.clone();
        }
        if other.batch.parallel.is_some() {
            base.batch.parallel = other.batch.parallel;
        }
    }

    fn apply_env_overrides(
        config: &mut BaziConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(v) = env(ENV_OUTPUT_FORMAT) {
            config.output.format = Some(v.parse()?);
        }
        if let Some(v) = env(ENV_OUTPUT_PRETTY) {
            config.output.pretty = Some(parse_bool(ENV_OUTPUT_PRETTY, &v)?);
        }
        if let Some(v) = env(ENV_LOG) {
            config.log.filter = Some(v);
        }
        if let Some(v) = env(ENV_BATCH_PARALLEL) {
            config.batch.parallel = Some(parse_bool(ENV_BATCH_PARALLEL, &v)?);
        }
        Ok(())
    }

    fn apply_cli_overrides(config: &mut BaziConfig, cli: &CliOverrides) {
        if cli.format.is_some() {
            config.output.format = cli.format;
        }
        if cli.pretty.is_some() {
            config.output.pretty = cli.pretty;
        }
        if cli.log_filter.is_some() {
            config.log.filter = cli.log_filter.clone();
        }
        if cli.parallel.is_some() {
            config.batch.parallel = cli.parallel;
        }
    }
}

fn parse_bool(field: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Validation {
            field: field.to_string(),
            message: format!("expected a boolean, got {other:?}"),
        }),
    }
}
