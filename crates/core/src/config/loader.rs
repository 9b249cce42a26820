//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed settings
    pub schema: ConfigSchema,
    /// File the settings came from, if any
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from an explicit path, or from the first standard
    /// location that exists, or fall back to defaults.
    ///
    /// An explicit path that does not exist is an error. A relative
    /// `[data] path` is taken relative to the file that declares it.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(),
        };

        let schema = if let Some(ref p) = config_path {
            tracing::debug!(path = %p.display(), "Loading configuration");
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let candidates = [
        ".countries.toml",
        "countries.toml",
        ".config/countries.toml",
    ];

    candidates
        .into_iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

/// Load, parse and validate a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::config(format!("Failed to read config file {}: {}", path.display(), e))
            .with_source(e)
    })?;

    let schema: ConfigSchema = toml::from_str(&content).map_err(|e| {
        Error::from(e).with_context(format!("Parsing {}", path.display()))
    })?;

    schema
        .search
        .validate()
        .map_err(|e| Error::from(e).with_context(format!("[search] in {}", path.display())))?;

    Ok(resolve_data_path(schema, path))
}

/// Anchor a relative data path at the config file's directory
fn resolve_data_path(mut schema: ConfigSchema, config_path: &Path) -> ConfigSchema {
    let base = config_path.parent().filter(|dir| !dir.as_os_str().is_empty());
    if let (Some(data), Some(base)) = (schema.data.path.as_mut(), base) {
        if data.is_relative() {
            *data = base.join(&*data);
        }
    }
    schema
}
