//! # Notes Architecture
//!
//! Notes is a **UI-agnostic note-taking library**. The terminal client in
//! `crates/notes` is one presentation layer; the same core could drive a mobile
//! screen, a web page, or a test harness.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation (crates/notes, or any other UI)               │
//! │  - Renders `results()`, turns input into API calls          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, screen.rs)                              │
//! │  - Facade over commands, owns the store                     │
//! │  - Publishes the current result set to subscribers          │
//! │  - Two-screen navigation and edit drafts                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure logic, returns `CmdResult`                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `NoteStore` trait, `InMemoryStore`                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Absence Is Not an Error
//!
//! Looking up an unknown id, updating or deleting a note that is gone, and
//! searching with an empty query are all routine. The store and commands model
//! them as `None`, empty lists or no-ops. [`error::NotesError`] only covers the
//! edges: parsing ids typed by a user and loading configuration.
//!
//! ## No I/O in the Core
//!
//! Nothing in this crate writes to stdout or stderr. Diagnostics go through
//! `tracing`; the binary decides whether and where to print them.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade and observable view model
//! - [`commands`]: Logic for each operation
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: `Note`, `NoteId`, `NoteDraft`
//! - [`observe`]: Observable values and subscriptions
//! - [`screen`]: List/edit navigation
//! - [`config`]: Configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod observe;
pub mod screen;
pub mod store;
