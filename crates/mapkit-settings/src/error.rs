//! Error types for the settings crate.
//!
//! Configuration problems are reported as [`ConfigError`]; everything a
//! settings operation can run into, including catalog read and write
//! failures, is gathered in [`SettingsError`].

use mapkit_objecttypes::ObjectTypesError;
use std::io;
use thiserror::Error;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The configuration directory could not be found.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    /// A configuration validation error occurred.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Reading or writing the object types file failed.
    #[error("Object types error: {0}")]
    ObjectTypes(#[from] ObjectTypesError),
}

/// Errors related to configuration validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required configuration key is missing.
    #[error("Missing configuration key: {0}")]
    MissingKey(String),

    /// The configuration file format is not supported.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// A configuration value is out of valid range.
    #[error("Value out of range for '{key}': {value}")]
    ValueOutOfRange { key: String, value: String },
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_error_display() {
        let err = SettingsError::ConfigDirectory("no home".to_string());
        assert_eq!(err.to_string(), "Config directory error: no home");

        let err = SettingsError::ObjectTypes(ObjectTypesError::MissingRoot);
        assert_eq!(
            err.to_string(),
            "Object types error: File doesn't contain object types."
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingKey("object_types_file".to_string());
        assert_eq!(
            err.to_string(),
            "Missing configuration key: object_types_file"
        );

        let err = ConfigError::UnsupportedFormat("yaml".to_string());
        assert_eq!(err.to_string(), "Unsupported config format: yaml");

        let err = ConfigError::ValueOutOfRange {
            key: "undo_limit".to_string(),
            value: "1000000".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Value out of range for 'undo_limit': 1000000"
        );
    }

    #[test]
    fn test_error_conversion() {
        let settings_err: SettingsError = ConfigError::MissingKey("x".to_string()).into();
        assert!(matches!(settings_err, SettingsError::Config(_)));

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let settings_err: SettingsError = io_err.into();
        assert!(matches!(settings_err, SettingsError::IoError(_)));

        let settings_err: SettingsError = ObjectTypesError::MissingRoot.into();
        assert!(matches!(settings_err, SettingsError::ObjectTypes(_)));
    }
}
