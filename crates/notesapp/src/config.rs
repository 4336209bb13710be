//! # Configuration
//!
//! Configuration is managed by [`confique`], layered in priority order:
//! 1. **Environment variables**: `NOTES_SEED_EXAMPLES`, `NOTES_UNTITLED_TITLE`.
//! 2. **Config file**: an explicit path, or `notes.toml` in the platform config
//!    directory (via the `directories` crate). A missing file is skipped.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `seed_examples` | `true` | Start with the two example notes |
//! | `untitled_title` | `"Untitled"` | Title given to notes saved with a blank title |

use crate::error::Result;
use crate::model::DEFAULT_UNTITLED;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "notes.toml";

/// Configuration for notes, stored in `notes.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NotesConfig {
    /// Seed a fresh store with the welcome notes.
    #[config(default = true, env = "NOTES_SEED_EXAMPLES")]
    pub seed_examples: bool,

    /// Title used when a note is saved with a blank title.
    #[config(default = "Untitled", env = "NOTES_UNTITLED_TITLE")]
    pub untitled_title: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            seed_examples: true,
            untitled_title: DEFAULT_UNTITLED.to_string(),
        }
    }
}

impl NotesConfig {
    /// Load from the environment and `path`, falling back to the platform
    /// config file when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = path.map(Path::to_path_buf).or_else(default_config_path);
        debug!(file = ?file, "loading config");

        let mut builder = Self::builder().env();
        if let Some(file) = file {
            builder = builder.file(file);
        }
        Ok(builder.load()?)
    }

    /// Placeholder title, never blank.
    pub fn untitled_title(&self) -> &str {
        let title = self.untitled_title.trim();
        if title.is_empty() {
            DEFAULT_UNTITLED
        } else {
            title
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "notes")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
