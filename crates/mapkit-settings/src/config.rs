//! Application configuration.
//!
//! Stored as JSON or TOML, chosen by the file extension.

use crate::error::{ConfigError, ConfigResult, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Largest accepted undo limit.
pub const MAX_UNDO_LIMIT: usize = 10_000;

const DEFAULT_UNDO_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            Some(other) => Err(ConfigError::UnsupportedFormat(other.to_string())),
            None => Err(ConfigError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Object types catalog file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_types_file: Option<PathBuf>,
    /// Maximum undo steps per document, 0 for unlimited
    pub undo_limit: usize,
    /// Read the object types catalog at startup
    pub auto_load_object_types: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            object_types_file: None,
            undo_limit: DEFAULT_UNDO_LIMIT,
            auto_load_object_types: true,
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.undo_limit > MAX_UNDO_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "undo_limit".to_string(),
                value: self.undo_limit.to_string(),
            });
        }

        if self
            .object_types_file
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            return Err(ConfigError::ValueOutOfRange {
                key: "object_types_file".to_string(),
                value: String::new(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SettingsError;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::new();
        assert_eq!(config.undo_limit, 100);
        assert!(config.auto_load_object_types);
        assert!(config.object_types_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_undo_limit() {
        let config = Config {
            undo_limit: MAX_UNDO_LIMIT + 1,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange { ref key, .. }) if key == "undo_limit"
        ));
    }

    #[test]
    fn test_toml_and_json_round_trip() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            object_types_file: Some(PathBuf::from("/maps/objecttypes.xml")),
            undo_limit: 25,
            auto_load_object_types: false,
        };

        for name in ["config.toml", "config.json"] {
            let path = dir.path().join(name);
            config.save_to_file(&path).unwrap();
            assert_eq!(Config::load_from_file(&path).unwrap(), config);
        }
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "undo_limit = 5\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.undo_limit, 5);
        assert!(config.auto_load_object_types);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        let err = Config::new().save_to_file(&path).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Config(ConfigError::UnsupportedFormat(ref ext)) if ext == "yaml"
        ));
    }
}
