// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid bookmark name: {0}")]
    InvalidName(String),

    #[error("bookmark with name '{name}' already exists (points to: {path})")]
    DuplicateName { name: String, path: String },

    #[error("This directory is already bookmarked as '{0}'")]
    DuplicatePath(String),

    #[error("Directory does not exist: {0}")]
    PathNotFound(String),

    #[error("Bookmark not found: {0}")]
    BookmarkNotFound(String),

    #[error("Failed to create config directory: {0}")]
    ConfigDir(String),

    #[error("Failed to read bookmarks file: {0}")]
    StorageRead(String),

    #[error("Failed to parse bookmarks file: {0}")]
    StorageFormat(String),

    #[error("Failed to write bookmarks file: {0}")]
    StorageWrite(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
