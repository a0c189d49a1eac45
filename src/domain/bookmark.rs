// src/domain/bookmark.rs
use crate::domain::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A name-to-directory association, the persisted aggregate of this tool.
///
/// `path` is always stored in symlink-preserving absolute form: callers
/// normalize user input before construction, and `new` enforces the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub name: String,
    pub path: String,
}

impl Bookmark {
    pub fn new<S: Into<String>>(name: S, path: S) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidName(
                "name must not be empty".to_string(),
            ));
        }

        let path = path.into();
        if !Path::new(&path).is_absolute() {
            return Err(DomainError::Other(format!(
                "bookmark path must be absolute: {}",
                path
            )));
        }

        Ok(Self { name, path })
    }
}

impl fmt::Display for Bookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.name, self.path)
    }
}
