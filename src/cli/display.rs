// src/cli/display.rs
use crate::domain::bookmark::Bookmark;
use std::fmt;

/// Presentation wrapper for listing bookmarks: one `name -> path` line,
/// indented under the list header.
pub struct DisplayBookmark<'a>(&'a Bookmark);

impl<'a> From<&'a Bookmark> for DisplayBookmark<'a> {
    fn from(bookmark: &'a Bookmark) -> Self {
        Self(bookmark)
    }
}

impl fmt::Display for DisplayBookmark<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {} -> {}", self.0.name, self.0.path)
    }
}
