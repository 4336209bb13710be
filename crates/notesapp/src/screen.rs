//! # Screens
//!
//! The app has two screens: the note list and the edit form.
//!
//! ```text
//!            open_new / open_existing
//!   ┌──────┐ ───────────────────────▶ ┌──────────────┐
//!   │ List │                          │ Edit (draft) │
//!   └──────┘ ◀─────────────────────── └──────────────┘
//!              save / delete / cancel
//! ```
//!
//! [`Screen`] is the bare state. [`Session`] drives it against a [`NotesApi`]
//! and holds the draft being edited, so any presentation layer can reuse the
//! same navigation rules:
//!
//! - Editing an id that no longer exists opens an empty form. Saving it
//!   creates a new note.
//! - Delete on the edit screen removes the note being edited. On a new
//!   draft there is nothing to remove, so it just returns to the list.
//! - Every way out of the edit screen drops the draft.

use crate::api::NotesApi;
use crate::commands::{CmdMessage, CmdResult};
use crate::model::{NoteDraft, NoteId};
use crate::store::NoteStore;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    List,
    Edit {
        editing: Option<NoteId>,
    },
}

impl Screen {
    pub fn open_new() -> Self {
        Screen::Edit { editing: None }
    }

    pub fn open_existing(id: NoteId) -> Self {
        Screen::Edit { editing: Some(id) }
    }

    pub fn back() -> Self {
        Screen::List
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Screen::List)
    }

    /// Id of the note on the edit screen, if it is an existing one.
    pub fn editing(&self) -> Option<NoteId> {
        match self {
            Screen::Edit { editing } => *editing,
            Screen::List => None,
        }
    }
}

pub struct Session<S: NoteStore> {
    api: NotesApi<S>,
    screen: Screen,
    draft: NoteDraft,
}

impl<S: NoteStore> Session<S> {
    pub fn new(api: NotesApi<S>) -> Self {
        Self {
            api,
            screen: Screen::List,
            draft: NoteDraft::new(),
        }
    }

    pub fn api(&self) -> &NotesApi<S> {
        &self.api
    }

    pub fn api_mut(&mut self) -> &mut NotesApi<S> {
        &mut self.api
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    pub fn start_new(&mut self) {
        debug!("editing new note");
        self.draft = NoteDraft::new();
        self.screen = Screen::open_new();
    }

    pub fn start_edit(&mut self, id: NoteId) -> CmdResult {
        let mut result = CmdResult::default();
        match self.api.get_note(id) {
            Some(note) => {
                debug!(%id, "editing note");
                self.draft = NoteDraft::from_note(&note);
                self.screen = Screen::open_existing(id);
                result.listed_notes.push(note);
            }
            None => {
                debug!(%id, "edit target missing, opening blank form");
                self.draft = NoteDraft::new();
                self.screen = Screen::open_new();
                result.add_message(CmdMessage::warning(format!(
                    "Note not found: {}, starting a new one",
                    id
                )));
            }
        }
        result
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    /// Add a line to the draft's content.
    pub fn append_content(&mut self, line: &str) {
        if !self.draft.content.is_empty() {
            self.draft.content.push('\n');
        }
        self.draft.content.push_str(line);
    }

    pub fn save(&mut self) -> CmdResult {
        if self.screen.is_list() {
            return not_editing();
        }
        let result = self.api.save_draft(&self.draft);
        self.leave_edit();
        result
    }

    pub fn delete(&mut self) -> CmdResult {
        if self.screen.is_list() {
            return not_editing();
        }
        let result = match self.screen.editing() {
            Some(id) => self.api.delete_note(id),
            None => CmdResult::default(),
        };
        self.leave_edit();
        result
    }

    pub fn cancel(&mut self) {
        self.leave_edit();
    }

    fn leave_edit(&mut self) {
        self.draft = NoteDraft::new();
        self.screen = Screen::back();
    }
}

fn not_editing() -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::warning("Not editing a note"));
    result
}
