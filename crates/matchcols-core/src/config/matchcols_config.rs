//! Top-level matchcols configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, SqliteConfig};
use crate::constants::{JOURNAL_MODES, PROJECT_CONFIG_FILE};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`MATCHCOLS_*`)
/// 2. Project config (`matchcols.toml` in the given root)
/// 3. User config (`~/.matchcols/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MatchColsConfig {
    pub sqlite: SqliteConfig,
    pub logging: LoggingConfig,
}

impl MatchColsConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        tracing::warn!(error = %err, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(mode) = &self.sqlite.journal_mode {
            let mode = mode.to_ascii_lowercase();
            if !JOURNAL_MODES.contains(&mode.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "sqlite.journal_mode".to_string(),
                    message: format!("must be one of {}", JOURNAL_MODES.join(", ")),
                });
            }
        }
        if let Some(timeout) = self.sqlite.busy_timeout_ms {
            if i32::try_from(timeout).is_err() {
                return Err(ConfigError::ValidationFailed {
                    field: "sqlite.busy_timeout_ms".to_string(),
                    message: format!("must not exceed {}", i32::MAX),
                });
            }
        }
        if let Some(filter) = &self.logging.filter {
            if filter.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "logging.filter".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".matchcols").join("config.toml"))
    }

    fn merge_toml_file(config: &mut Self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        config.merge(&file_config);
        Ok(())
    }

    /// Values present in `other` override `self`.
    fn merge(&mut self, other: &Self) {
        if other.sqlite.busy_timeout_ms.is_some() {
            self.sqlite.busy_timeout_ms = other.sqlite.busy_timeout_ms;
        }
        if other.sqlite.cache_size.is_some() {
            self.sqlite.cache_size = other.sqlite.cache_size;
        }
        if other.sqlite.journal_mode.is_some() {
            self.sqlite.journal_mode = other.sqlite.journal_mode.clone();
        }
        if other.logging.filter.is_some() {
            self.logging.filter = other.logging.filter.clone();
        }
    }

    /// Pattern: `MATCHCOLS_SQLITE_BUSY_TIMEOUT_MS`, `MATCHCOLS_LOGGING_FILTER`, etc.
    /// Unparseable numeric values are ignored.
    fn apply_env_overrides(config: &mut Self) {
        if let Ok(val) = std::env::var("MATCHCOLS_SQLITE_BUSY_TIMEOUT_MS") {
            if let Ok(v) = val.parse::<u32>() {
                config.sqlite.busy_timeout_ms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("MATCHCOLS_SQLITE_CACHE_SIZE") {
            if let Ok(v) = val.parse::<i64>() {
                config.sqlite.cache_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("MATCHCOLS_SQLITE_JOURNAL_MODE") {
            config.sqlite.journal_mode = Some(val);
        }
        if let Ok(val) = std::env::var("MATCHCOLS_LOGGING_FILTER") {
            config.logging.filter = Some(val);
        }
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
