// src/infrastructure/repositories/json_bookmark_repository.rs
use crate::domain::bookmark::Bookmark;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::bookmark_repository::BookmarkRepository;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tempfile::NamedTempFile;
use tracing::debug;

/// On-disk schema: one root object holding the bookmark array in insertion
/// order. Unknown sibling keys are tolerated on read and dropped on write.
#[derive(Debug, Serialize, Deserialize)]
struct BookmarkCollection {
    bookmarks: Vec<Bookmark>,
}

/// JSON-file-backed bookmark store.
///
/// The full collection is loaded at construction and rewritten as a complete
/// snapshot after every mutation. Each write goes to a temp file in the
/// storage directory followed by an atomic rename, so a crash mid-write
/// leaves the previously committed snapshot intact.
///
/// There is no cross-process locking: two concurrent invocations race and
/// the later save wins (accepted limitation for a single interactive user).
#[derive(Debug)]
pub struct JsonBookmarkRepository {
    db_path: PathBuf,
    bookmarks: RwLock<Vec<Bookmark>>,
}

impl JsonBookmarkRepository {
    pub fn new<P: AsRef<Path>>(db_path: P) -> DomainResult<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| DomainError::ConfigDir(format!("{}: {}", parent.display(), e)))?;
        }

        let bookmarks = Self::load(&db_path)?;
        debug!(
            "loaded {} bookmarks from {}",
            bookmarks.len(),
            db_path.display()
        );

        Ok(Self {
            db_path,
            bookmarks: RwLock::new(bookmarks),
        })
    }

    fn load(path: &Path) -> DomainResult<Vec<Bookmark>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let data = fs::read_to_string(path)
            .map_err(|e| DomainError::StorageRead(format!("{}: {}", path.display(), e)))?;

        let collection: BookmarkCollection = serde_json::from_str(&data)
            .map_err(|e| DomainError::StorageFormat(format!("{}: {}", path.display(), e)))?;

        Ok(collection.bookmarks)
    }

    /// Full snapshot overwrite via temp file + atomic rename.
    fn persist(&self, bookmarks: &[Bookmark]) -> DomainResult<()> {
        let collection = BookmarkCollection {
            bookmarks: bookmarks.to_vec(),
        };
        let data = serde_json::to_string_pretty(&collection)
            .map_err(|e| DomainError::StorageWrite(e.to_string()))?;

        let dir = self.db_path.parent().ok_or_else(|| {
            DomainError::StorageWrite(format!(
                "storage path has no parent directory: {}",
                self.db_path.display()
            ))
        })?;

        let mut temp = NamedTempFile::new_in(dir)
            .map_err(|e| DomainError::StorageWrite(e.to_string()))?;
        temp.write_all(data.as_bytes())
            .map_err(|e| DomainError::StorageWrite(e.to_string()))?;
        temp.persist(&self.db_path)
            .map_err(|e| DomainError::StorageWrite(e.to_string()))?;

        debug!(
            "persisted {} bookmarks to {}",
            bookmarks.len(),
            self.db_path.display()
        );
        Ok(())
    }

    fn read_guard(&self) -> DomainResult<std::sync::RwLockReadGuard<'_, Vec<Bookmark>>> {
        self.bookmarks
            .read()
            .map_err(|_| DomainError::Other("bookmark store lock poisoned".to_string()))
    }

    fn write_guard(&self) -> DomainResult<std::sync::RwLockWriteGuard<'_, Vec<Bookmark>>> {
        self.bookmarks
            .write()
            .map_err(|_| DomainError::Other("bookmark store lock poisoned".to_string()))
    }
}

impl BookmarkRepository for JsonBookmarkRepository {
    fn get_all(&self) -> DomainResult<Vec<Bookmark>> {
        Ok(self.read_guard()?.clone())
    }

    fn get_by_name(&self, name: &str) -> DomainResult<Option<Bookmark>> {
        Ok(self.read_guard()?.iter().find(|b| b.name == name).cloned())
    }

    fn get_by_path(&self, path: &str) -> DomainResult<Option<Bookmark>> {
        Ok(self.read_guard()?.iter().find(|b| b.path == path).cloned())
    }

    fn add(&self, bookmark: Bookmark) -> DomainResult<()> {
        let mut bookmarks = self.write_guard()?;
        // The in-memory append stays visible for the rest of the invocation
        // even if the snapshot write below fails; the caller sees the
        // persistence failure either way.
        bookmarks.push(bookmark);
        self.persist(&bookmarks)
    }

    fn remove(&self, name: &str) -> DomainResult<bool> {
        let mut bookmarks = self.write_guard()?;
        match bookmarks.iter().position(|b| b.name == name) {
            Some(index) => {
                bookmarks.remove(index);
                self.persist(&bookmarks)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn bookmark(name: &str, path: &str) -> Bookmark {
        Bookmark::new(name, path).unwrap()
    }

    #[test]
    fn given_missing_file_when_new_then_starts_empty() {
        let temp = TempDir::new().unwrap();
        let repo = JsonBookmarkRepository::new(temp.path().join("bookmarks.json")).unwrap();
        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn given_nested_storage_path_when_new_then_creates_directories() {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("deep/nested/bookmarks.json");

        let repo = JsonBookmarkRepository::new(&db_path).unwrap();
        repo.add(bookmark("a", "/a")).unwrap();

        assert!(db_path.exists());
    }

    #[test]
    fn given_saved_collection_when_reloaded_then_round_trips_in_order() {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("bookmarks.json");

        let repo = JsonBookmarkRepository::new(&db_path).unwrap();
        repo.add(bookmark("z", "/z")).unwrap();
        repo.add(bookmark("a", "/a")).unwrap();
        repo.add(bookmark("m", "/m")).unwrap();

        let reloaded = JsonBookmarkRepository::new(&db_path).unwrap();
        let names: Vec<_> = reloaded
            .get_all()
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn given_empty_collection_when_saved_then_reloads_empty() {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("bookmarks.json");

        let repo = JsonBookmarkRepository::new(&db_path).unwrap();
        repo.add(bookmark("a", "/a")).unwrap();
        repo.remove("a").unwrap();

        let reloaded = JsonBookmarkRepository::new(&db_path).unwrap();
        assert!(reloaded.get_all().unwrap().is_empty());
    }

    #[test]
    fn given_unknown_keys_when_loaded_then_ignored_and_dropped_on_write() {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("bookmarks.json");
        fs::write(
            &db_path,
            r#"{"bookmarks": [{"name": "a", "path": "/a", "color": "red"}], "version": 2}"#,
        )
        .unwrap();

        let repo = JsonBookmarkRepository::new(&db_path).unwrap();
        assert_eq!(repo.get_all().unwrap(), vec![bookmark("a", "/a")]);

        // Any mutation rewrites the snapshot from the bookmark list alone.
        repo.add(bookmark("b", "/b")).unwrap();
        let written = fs::read_to_string(&db_path).unwrap();
        assert!(!written.contains("version"));
        assert!(!written.contains("color"));
    }

    #[test]
    fn given_malformed_json_when_new_then_storage_format_error() {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("bookmarks.json");
        fs::write(&db_path, "not json {").unwrap();

        let result = JsonBookmarkRepository::new(&db_path);
        assert!(matches!(result, Err(DomainError::StorageFormat(_))));
    }

    #[test]
    fn given_wrong_type_for_bookmarks_when_new_then_storage_format_error() {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("bookmarks.json");
        fs::write(&db_path, r#"{"bookmarks": 42}"#).unwrap();

        let result = JsonBookmarkRepository::new(&db_path);
        assert!(matches!(result, Err(DomainError::StorageFormat(_))));
    }

    #[test]
    fn given_missing_required_field_when_new_then_storage_format_error() {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("bookmarks.json");
        fs::write(&db_path, r#"{"bookmarks": [{"name": "a"}]}"#).unwrap();

        let result = JsonBookmarkRepository::new(&db_path);
        assert!(matches!(result, Err(DomainError::StorageFormat(_))));
    }

    #[test]
    fn given_missing_root_key_when_new_then_storage_format_error() {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("bookmarks.json");
        fs::write(&db_path, "{}").unwrap();

        let result = JsonBookmarkRepository::new(&db_path);
        assert!(matches!(result, Err(DomainError::StorageFormat(_))));
    }

    #[test]
    fn given_absent_name_when_remove_then_returns_false_without_write() {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("bookmarks.json");

        let repo = JsonBookmarkRepository::new(&db_path).unwrap();
        assert!(!repo.remove("nope").unwrap());
        // No mutation happened, so no snapshot was written.
        assert!(!db_path.exists());
    }

    #[test]
    fn given_failed_persist_when_add_then_error_but_mutation_visible_in_memory() {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("bookmarks.json");

        let repo = JsonBookmarkRepository::new(&db_path).unwrap();
        // Occupy the storage path with a directory so the atomic rename fails.
        fs::create_dir(&db_path).unwrap();

        let result = repo.add(bookmark("a", "/a"));
        assert!(matches!(result, Err(DomainError::StorageWrite(_))));
        assert_eq!(repo.get_all().unwrap().len(), 1);
    }
}
