use crate::commands::{CmdMessage, CmdResult};
use crate::model::NoteId;
use crate::store::NoteStore;
use tracing::debug;

pub fn run<S: NoteStore>(store: &mut S, id: NoteId) -> CmdResult {
    let mut result = CmdResult::default();
    // Grab it first so the caller can say what went away.
    let existing = store.get(id);

    if !store.delete(id) {
        debug!(%id, "delete skipped, no such note");
        result.add_message(CmdMessage::info(format!("Nothing to delete: {}", id)));
        return result;
    }

    debug!(%id, "note deleted");
    if let Some(note) = existing {
        result.add_message(CmdMessage::success(format!(
            "Note deleted ({}): {}",
            id, note.title
        )));
        result.affected_notes.push(note);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{get, MessageLevel};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_note() {
        let mut store = StoreFixture::new().seeded().store;
        let welcome = store.search("welcome")[0].clone();
        let id = welcome.id.unwrap();

        let result = run(&mut store, id);

        assert_eq!(result.affected_notes, vec![welcome]);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(get::run(&store, id).listed_notes.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn deleting_twice_is_harmless() {
        let mut store = StoreFixture::new().with_notes(2).store;
        let id = store.list()[0].id.unwrap();
        run(&mut store, id);
        let before = store.list();

        let result = run(&mut store, id);

        assert!(result.affected_notes.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(store.list(), before);
    }
}
