//! # mapkit Editor
//!
//! Editing layer for maps: map objects, the undoable commands that change
//! them, the undo stack that records those commands, and the headless
//! controllers behind the property dialogs.
//!
//! Every change made through a dialog reaches the [`MapDocument`] as a
//! [`MapCommand`], so it can be undone and redone.

pub mod commands;
pub mod document;
pub mod error;
pub mod map_object;
pub mod object_properties_dialog;
pub mod properties_dialog;
pub mod properties_model;
pub mod undo_stack;

pub use commands::{
    ChangeMapObject, ChangeProperties, MacroCommand, MapCommand, MoveMapObject, ResizeMapObject,
};
pub use document::MapDocument;
pub use error::{EditorError, EditorResult};
pub use map_object::{Map, MapObject, ObjectId};
pub use object_properties_dialog::{
    DialogOutcome, ObjectFields, ObjectPropertiesDialog, CHANGE_OBJECT_TEXT,
};
pub use properties_dialog::PropertiesDialog;
pub use properties_model::{PropertiesModel, PropertyRow};
pub use undo_stack::UndoStack;
