//! Configuration schema definitions

use countries_search::MatchOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// Fuzzy matcher tuning
    #[serde(default)]
    pub search: MatchOptions,

    /// Log filter and formatting
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Where to read country data from
    #[serde(default)]
    pub data: DataConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Include the event target in log lines
    #[serde(default)]
    pub show_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            show_target: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Country data source
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DataConfig {
    /// JSON file in REST Countries v2 format; the bundled dataset is used when unset.
    /// A relative path is taken relative to the config file's directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}
