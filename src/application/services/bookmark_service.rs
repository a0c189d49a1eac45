// src/application/services/bookmark_service.rs
use crate::application::error::ApplicationResult;
use crate::domain::bookmark::Bookmark;
use std::fmt::Debug;

/// Service interface for bookmark operations.
pub trait BookmarkService: Send + Sync + Debug {
    /// Add a new bookmark for `raw_path` under `name`.
    ///
    /// `raw_path` may be `~`-prefixed or relative; it is normalized to a
    /// symlink-preserving absolute path before being stored. The returned
    /// bookmark carries the stored form.
    fn add_bookmark(&self, name: &str, raw_path: &str) -> ApplicationResult<Bookmark>;

    /// Remove a bookmark by name.
    fn remove_bookmark(&self, name: &str) -> ApplicationResult<()>;

    /// Resolve a bookmark by name. Pure read.
    fn get_bookmark(&self, name: &str) -> ApplicationResult<Bookmark>;

    /// All bookmarks in insertion order. Pure read.
    fn get_all_bookmarks(&self) -> ApplicationResult<Vec<Bookmark>>;
}
