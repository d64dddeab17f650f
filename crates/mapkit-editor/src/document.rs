//! Map document: the map being edited plus its undo history.

use crate::commands::MapCommand;
use crate::error::{EditorError, EditorResult};
use crate::map_object::{Map, MapObject, ObjectId};
use crate::undo_stack::UndoStack;
use tracing::debug;

/// A map being edited. All undoable changes go through [`MapDocument::push`].
#[derive(Debug, Clone, Default)]
pub struct MapDocument {
    map: Map,
    undo_stack: UndoStack,
}

impl MapDocument {
    pub fn new() -> Self {
        Self::with_map(Map::new())
    }

    pub fn with_map(map: Map) -> Self {
        Self {
            map,
            undo_stack: UndoStack::new(),
        }
    }

    pub fn with_undo_limit(mut self, undo_limit: usize) -> Self {
        self.undo_stack = UndoStack::with_limit(undo_limit);
        self
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    /// Adds an object without recording history, as done when building a map.
    pub fn add_object(&mut self, object: MapObject) -> ObjectId {
        self.map.add_object(object)
    }

    pub fn object(&self, id: ObjectId) -> EditorResult<&MapObject> {
        self.map.object(id).ok_or(EditorError::ObjectNotFound(id))
    }

    pub fn undo_stack(&self) -> &UndoStack {
        &self.undo_stack
    }

    /// Applies a command and records it in the history.
    pub fn push(&mut self, command: MapCommand) {
        debug!(command = %command.text(), "Push command");
        command.apply(&mut self.map);
        self.undo_stack.record(command);
    }

    pub fn begin_macro(&mut self, text: impl Into<String>) {
        self.undo_stack.begin_macro(text);
    }

    pub fn end_macro(&mut self) -> EditorResult<()> {
        self.undo_stack.end_macro()
    }

    /// Reverts the newest history entry.
    pub fn undo(&mut self) -> EditorResult<()> {
        let command = self.undo_stack.undo()?;
        command.undo(&mut self.map);
        Ok(())
    }

    /// Reapplies the newest undone history entry.
    pub fn redo(&mut self) -> EditorResult<()> {
        let command = self.undo_stack.redo()?;
        command.apply(&mut self.map);
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.undo_stack.can_redo()
    }

    /// True when the document differs from its last saved state.
    pub fn is_modified(&self) -> bool {
        !self.undo_stack.is_clean()
    }

    pub fn mark_saved(&mut self) {
        self.undo_stack.set_clean();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MoveMapObject;
    use mapkit_core::PointF;

    #[test]
    fn test_push_undo_redo() {
        let mut document = MapDocument::new();
        let id = document.add_object(MapObject::new("tree", "").with_position(0.0, 0.0));
        assert!(!document.is_modified());

        let cmd = MoveMapObject::new(document.object(id).unwrap(), PointF::new(5.0, 6.0));
        document.push(cmd.into());
        assert_eq!(document.object(id).unwrap().position, PointF::new(5.0, 6.0));
        assert!(document.is_modified());

        document.undo().unwrap();
        assert_eq!(document.object(id).unwrap().position, PointF::new(0.0, 0.0));
        assert!(!document.is_modified());

        document.redo().unwrap();
        assert_eq!(document.object(id).unwrap().position, PointF::new(5.0, 6.0));

        document.mark_saved();
        assert!(!document.is_modified());
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut document = MapDocument::new();
        assert_eq!(document.undo().unwrap_err(), EditorError::NothingToUndo);
        assert_eq!(document.redo().unwrap_err(), EditorError::NothingToRedo);
    }

    #[test]
    fn test_object_not_found() {
        let document = MapDocument::new();
        assert_eq!(
            document.object(7).unwrap_err(),
            EditorError::ObjectNotFound(7)
        );
    }
}
