use crate::commands::{CmdMessage, CmdResult};
use crate::model::Note;
use crate::store::NoteStore;
use tracing::debug;

/// Replace a stored note wholesale. Unknown or missing ids are not upserted.
pub fn run<S: NoteStore>(store: &mut S, note: &Note) -> CmdResult {
    let mut result = CmdResult::default();

    if !store.update(note) {
        debug!(id = ?note.id, "update skipped, no such note");
        let target = note
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "unsaved".to_string());
        result.add_message(CmdMessage::warning(format!("Note not found: {}", target)));
        return result;
    }

    debug!(id = ?note.id, title = %note.title, "note updated");
    result.add_message(CmdMessage::success(format!("Note updated: {}", note.title)));
    result.with_affected_notes(vec![note.clone()])
}
