//! # Notes Terminal Client
//!
//! The binary is intentionally thin: the client lives in `src/cli/`, and this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/notesapp/`: Core library with UI-agnostic logic
//! - `crates/notes/`: This terminal client, depends on `notesapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/notes/src/cli/)                          │
//! │  - clap parsing of flags and session lines (setup.rs)       │
//! │  - Session loop + dispatch (commands.rs)                    │
//! │  - Terminal rendering (render.rs, styles.rs)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (notesapp::api, notesapp::screen)                │
//! │  - Owns the store, publishes result sets, navigation        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (notesapp::commands)                         │
//! │  - Pure logic, no knowledge of stdout/stderr                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store lives only as long as the process, so the client is a session
//! rather than a one-shot command: it reads one command per line from stdin
//! until `quit` or end of input.
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests next to each module.
//! - **CLI layer**: line parsing and rendering have unit tests; whole sessions
//!   are driven through the binary with `assert_cmd` in `tests/`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
