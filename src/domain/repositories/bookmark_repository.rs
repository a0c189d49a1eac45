// src/domain/repositories/bookmark_repository.rs
use crate::domain::bookmark::Bookmark;
use crate::domain::error::DomainResult;

/// Repository trait for bookmark persistence.
///
/// Methods speak in domain terms and hide the storage mechanism, so the
/// service layer can be exercised against any implementation (the production
/// JSON file store, or one rooted in a temp directory for tests).
pub trait BookmarkRepository: std::fmt::Debug + Send + Sync {
    /// All bookmarks in insertion order (oldest first).
    fn get_all(&self) -> DomainResult<Vec<Bookmark>>;

    /// Look up a bookmark by exact name match.
    fn get_by_name(&self, name: &str) -> DomainResult<Option<Bookmark>>;

    /// Look up a bookmark by its stored absolute path.
    fn get_by_path(&self, path: &str) -> DomainResult<Option<Bookmark>>;

    /// Append a bookmark and rewrite the persisted snapshot.
    fn add(&self, bookmark: Bookmark) -> DomainResult<()>;

    /// Remove the bookmark with the given name and rewrite the snapshot.
    /// Returns false if no bookmark matched.
    fn remove(&self, name: &str) -> DomainResult<bool>;
}
