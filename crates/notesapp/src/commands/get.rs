use crate::commands::{CmdMessage, CmdResult};
use crate::model::NoteId;
use crate::store::NoteStore;
use tracing::debug;

pub fn run<S: NoteStore>(store: &S, id: NoteId) -> CmdResult {
    match store.get(id) {
        Some(note) => {
            debug!(%id, "note found");
            CmdResult::default().with_listed_notes(vec![note])
        }
        None => {
            debug!(%id, "note not found");
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!("Note not found: {}", id)));
            result
        }
    }
}
