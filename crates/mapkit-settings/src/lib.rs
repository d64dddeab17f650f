//! mapkit Settings Crate
//!
//! Handles application configuration and the preferences that hold the
//! loaded object types catalog.

pub mod config;
pub mod error;
pub mod preferences;

pub use config::{Config, MAX_UNDO_LIMIT};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use preferences::{default_config_path, Preferences};
