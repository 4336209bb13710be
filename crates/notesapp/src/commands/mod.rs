//! # Command Layer
//!
//! Each operation lives in its own submodule as a plain function over a
//! [`NoteStore`](crate::store::NoteStore). Commands:
//! - implement the logic for one operation
//! - return a structured [`CmdResult`] with affected notes and messages
//! - log through `tracing`, never print
//!
//! ## No Failures
//!
//! Commands return `CmdResult`, not `Result<CmdResult>`. Missing notes are
//! reported as an empty result plus a [`MessageLevel::Warning`] message, which
//! the UI can show or drop.
//!
//! ## Testing Strategy
//!
//! Most of the testing lives here, against `InMemoryStore`.
//!
//! ## Command Modules
//!
//! - [`create`]: Create a note
//! - [`get`]: Look up a note by id
//! - [`search`]: Substring search (or list all)
//! - [`update`]: Replace a note in place
//! - [`delete`]: Remove a note

use crate::model::Note;
use serde::Serialize;

pub mod create;
pub mod delete;
pub mod get;
pub mod search;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub affected_notes: Vec<Note>,
    pub listed_notes: Vec<Note>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<Note>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<Note>) -> Self {
        self.listed_notes = notes;
        self
    }

    /// True when the command touched or found nothing.
    pub fn is_empty(&self) -> bool {
        self.affected_notes.is_empty() && self.listed_notes.is_empty()
    }
}
