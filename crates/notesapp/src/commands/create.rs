use crate::commands::{CmdMessage, CmdResult};
use crate::store::NoteStore;
use tracing::debug;

pub fn run<S: NoteStore>(store: &mut S, title: String, content: String) -> CmdResult {
    let note = store.create(title, content);
    debug!(id = ?note.id, title = %note.title, "note created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note created: {}",
        note.title
    )));
    result.with_affected_notes(vec![note])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::NoteId;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn returns_created_note() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Shopping".into(), "Milk, eggs".into());

        assert_eq!(result.affected_notes.len(), 1);
        let note = &result.affected_notes[0];
        assert_eq!(note.id, Some(NoteId::new(1)));
        assert_eq!(note.title, "Shopping");
        assert_eq!(note.content, "Milk, eggs");
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.contains("Shopping"));
    }

    #[test]
    fn continues_the_counter_after_seeding() {
        let mut store = StoreFixture::new().seeded().store;
        let result = run(&mut store, "Shopping".into(), "Milk, eggs".into());
        assert_eq!(result.affected_notes[0].id, Some(NoteId::new(3)));
        assert_eq!(store.list()[0].title, "Shopping");
    }

    #[test]
    fn accepts_empty_content() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Only a title".into(), String::new());
        assert_eq!(result.affected_notes[0].content, "");
        assert_eq!(store.len(), 1);
    }
}
