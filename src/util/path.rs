// src/util/path.rs
use crate::domain::error::{DomainError, DomainResult};
use std::path::Path;

/// Expand a leading `~` to the user's home directory. Every other form is
/// passed through unchanged.
pub fn expand_tilde(raw: &str) -> String {
    shellexpand::tilde(raw).into_owned()
}

/// Convert a path to its symlink-preserving absolute form.
///
/// Relative paths are resolved against the current working directory.
/// Deliberately not `canonicalize`: a bookmark should keep the path the user
/// named, symlinks included.
pub fn abspath(p: &str) -> DomainResult<String> {
    let abs = std::path::absolute(Path::new(p))?;
    abs.to_str()
        .map(|s| s.to_string())
        .ok_or_else(|| DomainError::Other(format!("path is not valid UTF-8: {}", abs.display())))
}
