//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for presentation layers.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Owns the store**: injected through [`NotesApi::new`] or
//!   [`NotesApi::with_config`], never global
//! - **Dispatches** each call to the matching command function
//! - **Publishes** the current result set through an [`Observable`]
//! - **Normalizes inputs**: user-typed ids via [`parse_id`], edit drafts via
//!   [`NotesApi::save_draft`]
//!
//! ## Publishing
//!
//! The result set is the list a UI renders. It is republished:
//! - after `search_notes`, filtered by the new query
//! - after every create, update or delete, with the query reset to empty
//!
//! Publishing replaces the snapshot before notifying subscribers, so a read
//! right after a mutation, even from inside a callback, sees that mutation.
//!
//! ## Seeding
//!
//! A fresh app starts with two example notes. `with_config` seeds them when
//! `seed_examples` is on; `new` leaves the store as given.
//!
//! ## Generic Over NoteStore
//!
//! `NotesApi<S: NoteStore>` only talks to the store through the trait, so
//! tests and alternative backends plug in without touching the facade.

use crate::commands::{self, CmdResult};
use crate::config::NotesConfig;
use crate::error::Result;
use crate::model::{Note, NoteDraft, NoteId, DEFAULT_UNTITLED};
use crate::observe::{Observable, Subscription};
use crate::store::NoteStore;
use tracing::debug;

pub use crate::commands::{CmdMessage, MessageLevel};

/// The two notes a new session starts with, in creation order.
pub const SEED_NOTES: [(&str, &str); 2] = [
    ("Welcome", "This is your first note!"),
    ("Try editing me", "Tap the pencil icon to edit."),
];

/// The main API facade for note operations.
pub struct NotesApi<S: NoteStore> {
    store: S,
    query: String,
    untitled_title: String,
    results: Observable<Vec<Note>>,
}

impl<S: NoteStore> NotesApi<S> {
    pub fn new(store: S) -> Self {
        let results = Observable::new(store.list());
        Self {
            store,
            query: String::new(),
            untitled_title: DEFAULT_UNTITLED.to_string(),
            results,
        }
    }

    pub fn with_config(store: S, config: &NotesConfig) -> Self {
        let mut api = Self::new(store);
        api.untitled_title = config.untitled_title().to_string();
        if config.seed_examples {
            api.seed();
        }
        api
    }

    fn seed(&mut self) {
        for (title, content) in SEED_NOTES {
            commands::create::run(&mut self.store, title.to_string(), content.to_string());
        }
        debug!(count = SEED_NOTES.len(), "seeded example notes");
        self.publish_all();
    }

    pub fn create_note(&mut self, title: String, content: String) -> CmdResult {
        let result = commands::create::run(&mut self.store, title, content);
        self.publish_all();
        result
    }

    pub fn get_note(&self, id: NoteId) -> Option<Note> {
        commands::get::run(&self.store, id)
            .listed_notes
            .into_iter()
            .next()
    }

    pub fn update_note(&mut self, note: &Note) -> CmdResult {
        let result = commands::update::run(&mut self.store, note);
        self.publish_all();
        result
    }

    pub fn delete_note(&mut self, id: NoteId) -> CmdResult {
        let result = commands::delete::run(&mut self.store, id);
        self.publish_all();
        result
    }

    pub fn search_notes(&mut self, query: &str) -> CmdResult {
        self.query = query.to_string();
        let result = commands::search::run(&self.store, query);
        self.results.set(result.listed_notes.clone());
        result
    }

    /// Finish a draft and store it: new drafts are created, drafts of
    /// existing notes replace them.
    pub fn save_draft(&mut self, draft: &NoteDraft) -> CmdResult {
        let note = draft.finish(&self.untitled_title);
        match note.id {
            None => self.create_note(note.title, note.content),
            Some(_) => self.update_note(&note),
        }
    }

    /// The published result set.
    pub fn results(&self) -> Vec<Note> {
        self.results.get()
    }

    /// Version of the published result set; bumps on every publish.
    pub fn results_version(&self) -> u64 {
        self.results.version()
    }

    pub fn subscribe(&self, callback: impl Fn(&Vec<Note>) + 'static) -> Subscription {
        self.results.subscribe(callback)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn untitled_title(&self) -> &str {
        &self.untitled_title
    }

    pub fn note_count(&self) -> usize {
        self.store.len()
    }

    fn publish_all(&mut self) {
        self.query.clear();
        let result = commands::search::run(&self.store, "");
        self.results.set(result.listed_notes);
    }
}

/// Parse an id typed by a user.
pub fn parse_id(input: &str) -> Result<NoteId> {
    input.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotesError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn seeded_api() -> NotesApi<InMemoryStore> {
        NotesApi::with_config(InMemoryStore::new(), &NotesConfig::default())
    }

    fn titles(notes: &[Note]) -> Vec<String> {
        notes.iter().map(|n| n.title.clone()).collect()
    }

    #[test]
    fn seeds_two_notes_newest_first() {
        let api = seeded_api();
        assert_eq!(titles(&api.results()), vec!["Try editing me", "Welcome"]);
        assert_eq!(api.note_count(), 2);
    }

    #[test]
    fn seeding_can_be_disabled() {
        let config = NotesConfig {
            seed_examples: false,
            ..Default::default()
        };
        let api = NotesApi::with_config(InMemoryStore::new(), &config);
        assert!(api.results().is_empty());
    }

    #[test]
    fn new_publishes_existing_store_contents() {
        let store = StoreFixture::new().with_notes(2).store;
        let api = NotesApi::new(store);
        assert_eq!(api.results().len(), 2);
        assert_eq!(api.results_version(), 0);
    }

    #[test]
    fn create_publishes_new_note_first() {
        let mut api = seeded_api();
        let result = api.create_note("Shopping".into(), "Milk, eggs".into());

        let created = &result.affected_notes[0];
        assert_eq!(created.id, Some(NoteId::new(3)));
        let results = api.results();
        assert_eq!(results.len(), 3);
        assert_eq!(&results[0], created);
    }

    #[test]
    fn search_filters_published_results() {
        let mut api = seeded_api();
        api.create_note("Shopping".into(), "Milk, eggs".into());

        api.search_notes("MILK");
        assert_eq!(api.query(), "MILK");
        assert_eq!(titles(&api.results()), vec!["Shopping"]);

        api.search_notes("   ");
        assert_eq!(api.results().len(), 3);
    }

    #[test]
    fn mutation_resets_query() {
        let mut api = seeded_api();
        api.search_notes("welcome");
        assert_eq!(api.results().len(), 1);

        api.create_note("Another".into(), String::new());

        assert_eq!(api.query(), "");
        assert_eq!(api.results().len(), 3);
    }

    #[test]
    fn delete_removes_from_results() {
        let mut api = seeded_api();
        let id = api.create_note("Shopping".into(), "Milk".into()).affected_notes[0]
            .id
            .unwrap();

        api.delete_note(id);

        assert!(api.get_note(id).is_none());
        api.search_notes("milk");
        assert!(api.results().is_empty());
    }

    #[test]
    fn update_keeps_position() {
        let mut api = seeded_api();
        let welcome = api.results()[1].clone();
        let edited = Note {
            content: "Edited".into(),
            ..welcome.clone()
        };

        api.update_note(&edited);

        assert_eq!(api.results()[1], edited);
        assert_eq!(api.get_note(welcome.id.unwrap()), Some(edited));
    }

    #[test]
    fn subscribers_see_every_publish() {
        let mut api = seeded_api();
        let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let sub = api.subscribe(move |notes| sink.borrow_mut().push(notes.len()));

        api.create_note("A".into(), String::new());
        api.search_notes("A");
        api.delete_note(NoteId::new(99));
        drop(sub);
        api.create_note("B".into(), String::new());

        // "a" matches "A" and the "Tap the pencil" content, not "Welcome".
        assert_eq!(*seen.borrow(), vec![3, 2, 3]);
    }

    #[test]
    fn save_draft_creates_or_updates() {
        let mut api = seeded_api();

        let new_draft = NoteDraft {
            id: None,
            title: "  ".into(),
            content: " body ".into(),
        };
        let created = api.save_draft(&new_draft).affected_notes[0].clone();
        assert_eq!(created.title, "Untitled");
        assert_eq!(created.content, "body");

        let mut edit = NoteDraft::from_note(&created);
        edit.title = "Named".into();
        api.save_draft(&edit);

        assert_eq!(api.get_note(created.id.unwrap()).unwrap().title, "Named");
        assert_eq!(api.note_count(), 3);
    }

    #[test]
    fn configured_placeholder_is_used() {
        let config = NotesConfig {
            untitled_title: "Nameless".into(),
            ..Default::default()
        };
        let mut api = NotesApi::with_config(InMemoryStore::new(), &config);
        let result = api.save_draft(&NoteDraft::new());
        assert_eq!(result.affected_notes[0].title, "Nameless");
    }

    #[test]
    fn parse_id_rejects_non_numeric() {
        assert_eq!(parse_id("3").unwrap(), NoteId::new(3));
        assert!(matches!(parse_id("three"), Err(NotesError::InvalidId(_))));
    }
}
