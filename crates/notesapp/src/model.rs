//! # Domain Model
//!
//! [`Note`] is the only entity. A note without an id has not been stored yet;
//! the store assigns ids on create and never hands out the same one twice.
//!
//! [`NoteDraft`] is what an edit form holds while the user types. It turns into a
//! `Note` on save via [`NoteDraft::finish`]:
//!
//! 1. Title and content are trimmed.
//! 2. A blank title becomes the placeholder (`"Untitled"` unless configured).
//! 3. The id is carried through, so drafts of existing notes become updates and
//!    fresh drafts become creates.
//!
//! The placeholder is a presentation concern. The store itself accepts whatever
//! title it is given.

use crate::error::NotesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_UNTITLED: &str = "Untitled";

/// Store-assigned note identifier. Displays and parses as a plain decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(u64);

impl NoteId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = NotesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(NoteId)
            .map_err(|_| NotesError::InvalidId(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Option<NoteId>,
    pub title: String,
    pub content: String,
}

impl Note {
    /// A note that has not been stored yet.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn with_id(mut self, id: NoteId) -> Self {
        self.id = Some(id);
        self
    }

    /// Case-insensitive substring match on title or content.
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub id: Option<NoteId>,
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_note(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            content: note.content.clone(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn finish(&self, untitled: &str) -> Note {
        let title = self.title.trim();
        let title = if title.is_empty() { untitled } else { title };
        Note {
            id: self.id,
            title: title.to_string(),
            content: self.content.trim().to_string(),
        }
    }
}
