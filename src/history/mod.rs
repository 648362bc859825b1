// src/history/mod.rs
//
// Undo/redo history: reversible commands and the stacks that replay them

pub mod command;
pub mod stack;

pub use command::{Command, ShowcasePosition};
pub use stack::History;
