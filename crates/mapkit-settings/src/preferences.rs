//! Preferences: the configuration plus the loaded object types catalog.

use crate::config::Config;
use crate::error::{ConfigError, SettingsError, SettingsResult};
use mapkit_objecttypes::{
    ObjectTypes, ObjectTypesProvider, ObjectTypesReader, ObjectTypesWriter,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const APP_DIR: &str = "mapkit";
const CONFIG_FILE: &str = "config.toml";

/// Platform config file location, e.g. `~/.config/mapkit/config.toml` on Linux.
pub fn default_config_path() -> SettingsResult<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| {
        SettingsError::ConfigDirectory("Could not determine config directory".to_string())
    })?;
    Ok(base.join(APP_DIR).join(CONFIG_FILE))
}

#[derive(Debug, Clone, Default)]
pub struct Preferences {
    config: Config,
    object_types: ObjectTypes,
}

impl Preferences {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            object_types: ObjectTypes::new(),
        }
    }

    /// Loads the config at `path` and, when enabled, the object types it names.
    ///
    /// A catalog that fails to read is logged and left as whatever was
    /// recovered; only config errors fail the call.
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let mut preferences = Self::new(Config::load_from_file(path)?);
        if preferences.config.auto_load_object_types
            && preferences.config.object_types_file.is_some()
        {
            if let Err(e) = preferences.load_object_types() {
                warn!("Failed to load object types: {}", e);
            }
        }
        Ok(preferences)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn object_types(&self) -> &ObjectTypes {
        &self.object_types
    }

    pub fn set_object_types(&mut self, object_types: ObjectTypes) {
        self.object_types = object_types;
    }

    /// The configured catalog file.
    pub fn object_types_file(&self) -> SettingsResult<&Path> {
        self.config
            .object_types_file
            .as_deref()
            .ok_or_else(|| ConfigError::MissingKey("object_types_file".to_string()).into())
    }

    /// Reads the configured catalog.
    ///
    /// On a read error the types recovered before the error are kept and the
    /// error is returned.
    pub fn load_object_types(&mut self) -> SettingsResult<&ObjectTypes> {
        let path = self.object_types_file()?.to_path_buf();

        let mut reader = ObjectTypesReader::new();
        self.object_types = reader.read_object_types(&path);
        if let Some(error) = reader.take_error() {
            return Err(error.into());
        }

        info!(
            "Loaded {} object types from {}",
            self.object_types.len(),
            path.display()
        );
        Ok(&self.object_types)
    }

    /// Writes the catalog to the configured file.
    pub fn save_object_types(&self) -> SettingsResult<()> {
        let path = self.object_types_file()?;
        ObjectTypesWriter::new().write_object_types(path, &self.object_types)?;
        Ok(())
    }
}

impl ObjectTypesProvider for Preferences {
    fn object_types(&self) -> &ObjectTypes {
        &self.object_types
    }
}
