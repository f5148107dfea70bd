//! TOML configuration — initial thresholds and logging settings.
//!
//! Every section and field is optional. Missing values fall back to the
//! built-in defaults; present values are validated before use.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::thresholds::{ThresholdError, ThresholdSet, DEFAULT_THRESHOLDS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid [thresholds]: {0}")]
    Thresholds(#[from] ThresholdError),
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RagbarConfig {
    pub thresholds: ThresholdsConfig,
    pub logging: LoggingConfig,
}

/// Initial threshold values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThresholdsConfig {
    pub red_end: u8,
    pub amber_end: u8,
    pub green_end: u8,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        let [red_end, amber_end, green_end] = DEFAULT_THRESHOLDS;
        Self {
            red_end,
            amber_end,
            green_end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` wins when set.
    pub level: String,
    /// Log directory. `None` lets the host pick one. A relative path read
    /// through [`RagbarConfig::from_path`] is taken from the config file's
    /// directory.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl RagbarConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml(&contents)?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    /// Anchor relative paths at `base`.
    fn resolve_paths(&mut self, base: &Path) {
        if let Some(dir) = self.logging.directory.as_mut() {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }
    }

    /// Parse and validate a config from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: RagbarConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.initial_thresholds()?;
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: "must not be empty".to_string(),
            });
        }
        if let Some(dir) = &self.logging.directory {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "logging.directory",
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// The configured starting values as a checked set.
    pub fn initial_thresholds(&self) -> Result<ThresholdSet, ConfigError> {
        let t = &self.thresholds;
        Ok(ThresholdSet::new(t.red_end, t.amber_end, t.green_end)?)
    }
}
