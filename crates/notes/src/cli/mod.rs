//! # CLI Behavior
//!
//! This is **one possible UI client** for notesapp, not the application itself.
//! It is the only place that knows about terminal I/O, exit codes and styling.
//!
//! ## Two Screens
//!
//! The session mirrors the app's two screens:
//!
//! - **List**: shows the published result set. `search` filters it, `new` and
//!   `edit <id>` open the edit screen, `delete <id>` removes a note in place.
//! - **Edit**: `title`, `content` and `append` change the draft, `save` stores
//!   it, `delete` removes the note being edited, `cancel` drops the draft.
//!
//! ## Re-rendering
//!
//! The list is redrawn when the API publishes a new result set (the session
//! subscribes to it) or when the user comes back from the edit screen. Empty
//! input redraws the current screen.
//!
//! ## Module Structure
//!
//! - `commands`: Session loop and per-command handlers
//! - `logging`: tracing subscriber setup
//! - `render`: Output formatting
//! - `setup`: Argument and session-line parsing via clap
//! - `styles`: Terminal styles

mod commands;
mod logging;
mod render;
mod setup;
mod styles;

pub use commands::run;
