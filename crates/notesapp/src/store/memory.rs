use super::NoteStore;
use crate::model::{Note, NoteId};

/// In-memory note storage.
/// Does NOT persist data; contents live as long as the process.
///
/// Notes are kept newest-first. Ids come from a counter that starts at 1 and
/// only moves forward, so deleted ids are never handed out again.
#[derive(Debug)]
pub struct InMemoryStore {
    notes: Vec<Note>,
    next_id: u64,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            next_id: 1,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoteStore for InMemoryStore {
    fn create(&mut self, title: String, content: String) -> Note {
        let id = NoteId::new(self.next_id);
        self.next_id += 1;
        let note = Note::new(title, content).with_id(id);
        self.notes.insert(0, note.clone());
        note
    }

    fn get(&self, id: NoteId) -> Option<Note> {
        self.notes.iter().find(|n| n.id == Some(id)).cloned()
    }

    fn list(&self) -> Vec<Note> {
        self.notes.clone()
    }

    fn search(&self, query: &str) -> Vec<Note> {
        if query.trim().is_empty() {
            return self.list();
        }
        let needle = query.to_lowercase();
        self.notes
            .iter()
            .filter(|n| n.matches_lowercase(&needle))
            .cloned()
            .collect()
    }

    fn update(&mut self, note: &Note) -> bool {
        let Some(id) = note.id else {
            return false;
        };
        let mut replaced = false;
        for slot in self.notes.iter_mut().filter(|n| n.id == Some(id)) {
            *slot = note.clone();
            replaced = true;
        }
        replaced
    }

    fn delete(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != Some(id));
        self.notes.len() != before
    }

    fn len(&self) -> usize {
        self.notes.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store.create(
                    format!("Test Note {}", i + 1),
                    format!("Content for note {}", i + 1),
                );
            }
            self
        }

        pub fn with_note(mut self, title: &str, content: &str) -> Self {
            self.store.create(title.to_string(), content.to_string());
            self
        }

        /// The two example notes a fresh app starts with.
        pub fn seeded(self) -> Self {
            self.with_note("Welcome", "This is your first note!")
                .with_note("Try editing me", "Tap the pencil icon to edit.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    fn titles(notes: &[Note]) -> Vec<&str> {
        notes.iter().map(|n| n.title.as_str()).collect()
    }

    #[test]
    fn create_assigns_increasing_ids_from_one() {
        let mut store = InMemoryStore::new();
        let ids: Vec<u64> = (0..5)
            .map(|i| store.create(format!("N{}", i), String::new()))
            .map(|n| n.id.unwrap().get())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn create_prepends() {
        let store = StoreFixture::new().with_notes(3).store;
        assert_eq!(
            titles(&store.list()),
            vec!["Test Note 3", "Test Note 2", "Test Note 1"]
        );
    }

    #[test]
    fn get_returns_created_note() {
        let mut store = InMemoryStore::new();
        let note = store.create("Title".into(), "Body".into());
        let found = store.get(note.id.unwrap()).unwrap();
        assert_eq!(found.title, "Title");
        assert_eq!(found.content, "Body");
    }

    #[test]
    fn get_unknown_is_none() {
        let store = StoreFixture::new().with_notes(2).store;
        assert!(store.get(NoteId::new(99)).is_none());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = InMemoryStore::new();
        let first = store.create("A".into(), String::new());
        assert!(store.delete(first.id.unwrap()));
        let second = store.create("B".into(), String::new());
        assert_eq!(second.id, Some(NoteId::new(2)));
    }

    #[test]
    fn blank_query_returns_everything_in_order() {
        let store = StoreFixture::new().seeded().store;
        let all = store.list();
        assert_eq!(store.search(""), all);
        assert_eq!(store.search("   "), all);
        assert_eq!(titles(&all), vec!["Try editing me", "Welcome"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let store = StoreFixture::new()
            .with_note("Hello", "")
            .with_note("Other", "nothing")
            .store;
        assert_eq!(titles(&store.search("hello")), vec!["Hello"]);
        assert_eq!(titles(&store.search("HELLO")), vec!["Hello"]);
    }

    #[test]
    fn search_matches_content() {
        let store = StoreFixture::new()
            .seeded()
            .with_note("Shopping", "Milk, eggs")
            .store;
        assert_eq!(titles(&store.search("milk")), vec!["Shopping"]);
        assert_eq!(titles(&store.search("pencil")), vec!["Try editing me"]);
    }

    #[test]
    fn search_does_not_reorder_store() {
        let store = StoreFixture::new().with_notes(3).store;
        let before = store.list();
        let _ = store.search("Note 1");
        assert_eq!(store.list(), before);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = StoreFixture::new().with_notes(3).store;
        let target = store.list()[1].clone();
        let changed = Note {
            title: "Changed".into(),
            content: "New body".into(),
            ..target.clone()
        };
        assert!(store.update(&changed));
        assert_eq!(store.list()[1], changed);
        assert_eq!(store.get(target.id.unwrap()), Some(changed));
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let mut store = StoreFixture::new().with_notes(2).store;
        let before = store.list();
        let ghost = Note::new("Ghost", "").with_id(NoteId::new(42));
        assert!(!store.update(&ghost));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn update_without_id_is_noop() {
        let mut store = StoreFixture::new().with_notes(2).store;
        let before = store.list();
        assert!(!store.update(&Note::new("Unsaved", "")));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn delete_removes_note() {
        let mut store = StoreFixture::new().with_notes(3).store;
        let id = store.list()[0].id.unwrap();
        assert!(store.delete(id));
        assert!(store.get(id).is_none());
        assert_eq!(store.len(), 2);
        assert!(store.search("").iter().all(|n| n.id != Some(id)));
    }

    #[test]
    fn delete_unknown_is_noop() {
        let mut store = StoreFixture::new().with_notes(2).store;
        let before = store.list();
        assert!(!store.delete(NoteId::new(7)));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn empty_store() {
        let store = InMemoryStore::new();
        assert!(store.is_empty());
        assert!(store.search("anything").is_empty());
    }
}
