// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Behavior trail configuration
//!
//! Loaded from an optional TOML file, then overridden from the environment:
//!
//! ```toml
//! log_path = "logs/mob_behavior.log"
//! sync = true
//! enabled = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name used when no path is configured
pub const DEFAULT_LOG_FILE: &str = "mob_behavior.log";
/// Overrides `log_path`
pub const ENV_LOG_PATH: &str = "MOBTRAIL_LOG_PATH";
/// Overrides `sync` (`1`/`true`/`yes` or `0`/`false`/`no`)
pub const ENV_SYNC: &str = "MOBTRAIL_SYNC";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrailConfig {
    /// Log file location, relative paths resolve against the working directory
    pub log_path: PathBuf,
    /// fsync after every line instead of only flushing
    pub sync: bool,
    /// When false the logger never opens the file
    pub enabled: bool,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            sync: false,
            enabled: true,
        }
    }
}

impl TrailConfig {
    /// Default config writing to `path`
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: path.into(),
            ..Self::default()
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load the file if given (defaults otherwise), then apply env overrides
    pub fn resolve(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.with_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from a variable lookup (the process env in `resolve`)
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = lookup(ENV_LOG_PATH).filter(|p| !p.is_empty()) {
            self.log_path = PathBuf::from(path);
        }
        if let Some(value) = lookup(ENV_SYNC) {
            self.sync = parse_flag(&value).ok_or(ConfigError::InvalidValue {
                var: ENV_SYNC,
                value,
            })?;
        }
        Ok(self)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "trail_tests.rs"]
mod tests;
