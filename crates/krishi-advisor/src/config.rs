//! Configuration loading and typed config structures for the advisory tools.
//!
//! The configuration lives in `krishi-config.yaml` next to the binary's
//! working directory. Every field has a default, so an empty document (or a
//! missing file, at the binary's discretion) yields a usable configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "krishi-config.yaml";

/// Environment variable that overrides `history.path`.
pub const HISTORY_PATH_ENV: &str = "KRISHI_HISTORY_PATH";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AdvisorConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Confidence jitter settings.
    #[serde(default)]
    pub confidence: ConfidenceConfig,

    /// History persistence settings.
    #[serde(default)]
    pub history: HistoryConfig,
}

impl AdvisorConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `KRISHI_HISTORY_PATH` overrides `history.path` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.history.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Confidence jitter settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ConfidenceConfig {
    /// Seed for the jitter RNG. Absent means seeded from OS entropy, so
    /// confidences vary between runs.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// History persistence settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryConfig {
    /// Whether detections are appended to the history file.
    #[serde(default = "default_history_enabled")]
    pub enabled: bool,

    /// JSON file holding the detection history.
    #[serde(default = "default_history_path")]
    pub path: PathBuf,

    /// Most detections kept; older ones are dropped.
    #[serde(default = "default_disease_capacity")]
    pub disease_capacity: usize,
}

impl HistoryConfig {
    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var(HISTORY_PATH_ENV) {
            self.path = PathBuf::from(path);
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: default_history_enabled(),
            path: default_history_path(),
            disease_capacity: default_disease_capacity(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}

const fn default_history_enabled() -> bool {
    true
}

fn default_history_path() -> PathBuf {
    PathBuf::from("krishi-history.json")
}

const fn default_disease_capacity() -> usize {
    50
}
