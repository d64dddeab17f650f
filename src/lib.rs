//! # mapkit
//!
//! Editing core for tile maps with typed objects.
//!
//! ## Architecture
//!
//! mapkit is organized as a workspace with multiple crates:
//!
//! 1. **mapkit-core** - Colors, properties and geometry value types
//! 2. **mapkit-objecttypes** - Object type catalogs and their XML file format
//! 3. **mapkit-editor** - Map objects, undoable commands and property dialogs
//! 4. **mapkit-settings** - Configuration and preferences
//! 5. **mapkit** - Command-line binary that integrates all crates

pub mod cli;

pub use mapkit_core::{Color, CoreError, PointF, Properties, PropertiesExt, SizeF};

pub use mapkit_objecttypes::{
    ErrorKind, ObjectType, ObjectTypes, ObjectTypesError, ObjectTypesExt, ObjectTypesModel,
    ObjectTypesProvider, ObjectTypesReader, ObjectTypesWriter,
};

pub use mapkit_editor::{
    DialogOutcome, EditorError, Map, MapCommand, MapDocument, MapObject, ObjectId,
    ObjectPropertiesDialog, PropertiesDialog, PropertiesModel, UndoStack,
};

pub use mapkit_settings::{Config, Preferences, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Log lines go to stderr so command output on stdout stays clean.
/// `RUST_LOG` is honored; without it only warnings are shown unless
/// `verbose` is set.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
