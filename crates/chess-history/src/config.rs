//! Configuration for a chess board session.
//!
//! Loaded from `history.toml` in the working directory when present:
//!
//! ```toml
//! notation = "strict"          # or "loose" (default)
//! reset_clears_history = false # default true
//! ```

use chess_core::NotationPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Settings for a [`ChessBoard`](crate::ChessBoard).
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct HistoryConfig {
    /// How submitted move notations are validated. Defaults to loose.
    #[serde(default)]
    pub notation: NotationPolicy,
    /// Whether resetting the board also starts a new move history.
    /// Defaults to true.
    #[serde(default = "default_reset_clears_history")]
    pub reset_clears_history: bool,
}

fn default_reset_clears_history() -> bool {
    true
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            notation: NotationPolicy::default(),
            reset_clears_history: default_reset_clears_history(),
        }
    }
}

impl HistoryConfig {
    /// Loads the configuration from [`Self::config_path()`], or returns the
    /// defaults if that file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads the configuration from `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded history config");
        Ok(config)
    }

    /// Parses the configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the path to the configuration file.
    ///
    /// Currently returns `history.toml` in the current working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("history.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = HistoryConfig::from_toml_str(
            r#"
notation = "strict"
reset_clears_history = false
"#,
        )
        .unwrap();
        assert_eq!(config.notation, NotationPolicy::Strict);
        assert!(!config.reset_clears_history);
    }

    #[test]
    fn test_empty_config_defaults() {
        let config = HistoryConfig::from_toml_str("").unwrap();
        assert_eq!(config, HistoryConfig::default());
        assert_eq!(config.notation, NotationPolicy::Loose);
        assert!(config.reset_clears_history);
    }

    #[test]
    fn test_unknown_policy_is_parse_error() {
        let result = HistoryConfig::from_toml_str(r#"notation = "sloppy""#);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_from_missing_file_is_read_error() {
        let result = HistoryConfig::load_from(Path::new("/nonexistent/history.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[test]
    fn test_config_path_returns_expected_path() {
        assert_eq!(HistoryConfig::config_path(), PathBuf::from("history.toml"));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = HistoryConfig {
            notation: NotationPolicy::Strict,
            reset_clears_history: false,
        };
        let serialized = toml::to_string(&config).unwrap();
        assert_eq!(HistoryConfig::from_toml_str(&serialized).unwrap(), config);
    }
}
