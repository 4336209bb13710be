use crate::model::{Note, NoteId};

pub mod memory;

/// Abstract interface for note storage.
///
/// None of these methods fail. An unknown id yields `None` or a no-op, so
/// callers treat absence as an ordinary outcome.
pub trait NoteStore {
    /// Store a new note under the next id and place it first.
    fn create(&mut self, title: String, content: String) -> Note;

    /// First note with the given id.
    fn get(&self, id: NoteId) -> Option<Note>;

    /// All notes in store order (newest first).
    fn list(&self) -> Vec<Note>;

    /// Notes matching `query` as a case-insensitive substring of title or
    /// content. A blank query matches everything.
    fn search(&self, query: &str) -> Vec<Note>;

    /// Replace the note with the same id in place. Returns false, leaving the
    /// store untouched, when the id is missing or unknown.
    fn update(&mut self, note: &Note) -> bool;

    /// Remove every note with this id. Returns false if none matched.
    fn delete(&mut self, id: NoteId) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
