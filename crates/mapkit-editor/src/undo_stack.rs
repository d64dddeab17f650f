//! Undo/redo history with macro grouping.
//!
//! The stack only records commands; the owning document applies them. While
//! a macro is open, recorded commands are collected into it and the macro is
//! committed as a single history entry by the matching `end_macro`.

use crate::commands::{MacroCommand, MapCommand};
use crate::error::{EditorError, EditorResult};
use tracing::debug;

/// Manages undo/redo stacks of map commands.
#[derive(Debug, Clone)]
pub struct UndoStack {
    undo_stack: Vec<MapCommand>,
    redo_stack: Vec<MapCommand>,
    open_macros: Vec<MacroCommand>,
    /// 0 means unlimited.
    undo_limit: usize,
    /// Undo depth at which the document was last saved.
    clean_depth: Option<usize>,
}

impl UndoStack {
    /// Create an unlimited undo stack in the clean state.
    pub fn new() -> Self {
        Self::with_limit(0)
    }

    /// Create with a maximum number of undo steps (0 for unlimited).
    pub fn with_limit(undo_limit: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            open_macros: Vec::new(),
            undo_limit,
            clean_depth: Some(0),
        }
    }

    /// Record an already applied command.
    pub fn record(&mut self, command: MapCommand) {
        if let Some(open) = self.open_macros.last_mut() {
            open.commands.push(command);
        } else {
            self.push_undo(command);
        }
    }

    fn push_undo(&mut self, command: MapCommand) {
        // The clean state is lost when it lies in the redo history being discarded
        if self.clean_depth.is_some_and(|depth| depth > self.undo_stack.len()) {
            self.clean_depth = None;
        }
        self.redo_stack.clear();
        self.undo_stack.push(command);

        if self.undo_limit > 0 && self.undo_stack.len() > self.undo_limit {
            self.undo_stack.remove(0);
            self.clean_depth = self.clean_depth.and_then(|depth| depth.checked_sub(1));
        }
    }

    /// Start grouping commands. Macros may nest.
    pub fn begin_macro(&mut self, text: impl Into<String>) {
        let text = text.into();
        debug!(text = %text, depth = self.open_macros.len() + 1, "Begin undo macro");
        self.open_macros.push(MacroCommand::new(text));
    }

    /// Close the innermost macro. Empty macros leave no history entry.
    pub fn end_macro(&mut self) -> EditorResult<()> {
        let finished = self.open_macros.pop().ok_or(EditorError::NoOpenMacro)?;
        if finished.commands.is_empty() {
            debug!(text = %finished.text, "Dropping empty undo macro");
            return Ok(());
        }
        self.record(MapCommand::Macro(finished));
        Ok(())
    }

    pub fn is_macro_open(&self) -> bool {
        !self.open_macros.is_empty()
    }

    fn ensure_no_macro(&self) -> EditorResult<()> {
        match self.open_macros.last() {
            Some(open) => Err(EditorError::MacroInProgress(open.text.clone())),
            None => Ok(()),
        }
    }

    /// Move the newest command to the redo stack and return it for reverting.
    pub fn undo(&mut self) -> EditorResult<&MapCommand> {
        self.ensure_no_macro()?;
        let command = self.undo_stack.pop().ok_or(EditorError::NothingToUndo)?;
        self.redo_stack.push(command);
        self.redo_stack.last().ok_or(EditorError::NothingToUndo)
    }

    /// Move the newest undone command back and return it for reapplying.
    pub fn redo(&mut self) -> EditorResult<&MapCommand> {
        self.ensure_no_macro()?;
        let command = self.redo_stack.pop().ok_or(EditorError::NothingToRedo)?;
        self.undo_stack.push(command);
        self.undo_stack.last().ok_or(EditorError::NothingToRedo)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty() && self.open_macros.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty() && self.open_macros.is_empty()
    }

    /// Text of the command `undo` would revert.
    pub fn undo_text(&self) -> Option<String> {
        self.undo_stack.last().map(MapCommand::text)
    }

    /// Text of the command `redo` would reapply.
    pub fn redo_text(&self) -> Option<String> {
        self.redo_stack.last().map(MapCommand::text)
    }

    /// Committed history entries, oldest first.
    pub fn commands(&self) -> &[MapCommand] {
        &self.undo_stack
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn undo_limit(&self) -> usize {
        self.undo_limit
    }

    /// Mark the current state as saved.
    pub fn set_clean(&mut self) {
        self.clean_depth = Some(self.undo_stack.len());
    }

    pub fn is_clean(&self) -> bool {
        self.clean_depth == Some(self.undo_stack.len())
    }

    /// Drop all history and open macros. The resulting state is clean.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.open_macros.clear();
        self.clean_depth = Some(0);
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
