use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotesError {
    #[error("Invalid note id: {0}")]
    InvalidId(String),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T> = std::result::Result<T, NotesError>;
