// src/history/stack.rs
//
// Undo/redo stacks.
//
// Every forward action pushes exactly one command and wipes the redo
// stack. Undo and redo move a command between the two stacks only when
// its replay succeeded.

use crate::error::{AppError, AppResult};
use crate::history::command::Command;
use crate::repositories::Collections;

#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: Vec<Command>,
    redo_stack: Vec<Command>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a forward action that just succeeded
    pub fn record(&mut self, command: Command) {
        log::debug!("History: recorded {}", command);
        self.undo_stack.push(command);
        self.redo_stack.clear();
    }

    /// Revert the most recent command, returning it.
    ///
    /// If the revert fails the command stays on the undo stack and the
    /// collections are untouched.
    pub fn undo(&mut self, collections: &mut Collections) -> AppResult<Command> {
        let command = self.undo_stack.pop().ok_or(AppError::NothingToUndo)?;

        if let Err(e) = command.undo(collections) {
            log::warn!("History: undo of {} failed: {}", command, e);
            self.undo_stack.push(command);
            return Err(e);
        }

        log::debug!("History: undid {}", command);
        let replayed = command.clone();
        self.redo_stack.push(command);
        Ok(replayed)
    }

    /// Re-apply the most recently undone command, returning it.
    pub fn redo(&mut self, collections: &mut Collections) -> AppResult<Command> {
        let command = self.redo_stack.pop().ok_or(AppError::NothingToRedo)?;

        if let Err(e) = command.redo(collections) {
            log::warn!("History: redo of {} failed: {}", command, e);
            self.redo_stack.push(command);
            return Err(e);
        }

        log::debug!("History: redid {}", command);
        let replayed = command.clone();
        self.undo_stack.push(command);
        Ok(replayed)
    }

    /// Drop both stacks
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Command the next undo would revert
    pub fn peek_undo(&self) -> Option<&Command> {
        self.undo_stack.last()
    }

    /// Command the next redo would re-apply
    pub fn peek_redo(&self) -> Option<&Command> {
        self.redo_stack.last()
    }
}
