use crate::commands::CmdResult;
use crate::store::NoteStore;
use tracing::debug;

/// Filter notes by `query`. Store order is kept; there is no ranking.
pub fn run<S: NoteStore>(store: &S, query: &str) -> CmdResult {
    let listed = store.search(query);
    debug!(query, matches = listed.len(), "search");
    CmdResult::default().with_listed_notes(listed)
}
