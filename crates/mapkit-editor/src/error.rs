//! Error types for the editor crate.
//!
//! This module provides structured error types for document editing,
//! undo/redo handling and the property dialogs.

use crate::map_object::ObjectId;
use thiserror::Error;

/// Errors that can occur during editor operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// The requested map object does not exist.
    #[error("Map object not found: {0}")]
    ObjectNotFound(ObjectId),

    /// The undo stack is empty.
    #[error("Nothing to undo")]
    NothingToUndo,

    /// The redo stack is empty.
    #[error("Nothing to redo")]
    NothingToRedo,

    /// `end_macro` was called without a matching `begin_macro`.
    #[error("No macro is open")]
    NoOpenMacro,

    /// Undo and redo are unavailable while a macro is being recorded.
    #[error("Cannot undo or redo while macro '{0}' is open")]
    MacroInProgress(String),

    /// A property name was empty.
    #[error("Property name cannot be empty")]
    EmptyPropertyName,

    /// A property with this name already exists.
    #[error("Property already exists: {0}")]
    DuplicateProperty(String),

    /// The property does not exist.
    #[error("Property not found: {0}")]
    PropertyNotFound(String),
}

/// Result type alias for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;
