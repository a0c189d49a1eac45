// src/application/services/bookmark_service_impl.rs
use std::path::Path;
use std::sync::Arc;

use crate::application::error::ApplicationResult;
use crate::application::services::bookmark_service::BookmarkService;
use crate::domain::bookmark::Bookmark;
use crate::domain::error::DomainError;
use crate::domain::repositories::bookmark_repository::BookmarkRepository;
use crate::util::path::{abspath, expand_tilde};
use tracing::{debug, instrument};

#[derive(Debug)]
pub struct BookmarkServiceImpl<R: BookmarkRepository> {
    repository: Arc<R>,
}

impl<R: BookmarkRepository> BookmarkServiceImpl<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: BookmarkRepository> BookmarkService for BookmarkServiceImpl<R> {
    #[instrument(skip(self), level = "debug")]
    fn add_bookmark(&self, name: &str, raw_path: &str) -> ApplicationResult<Bookmark> {
        // Name conflicts are checked before touching the filesystem so the
        // error can surface where the name already points.
        if let Some(existing) = self.repository.get_by_name(name)? {
            return Err(DomainError::DuplicateName {
                name: existing.name,
                path: existing.path,
            }
            .into());
        }

        let expanded = expand_tilde(raw_path);

        // Permissive existence check: any filesystem entry qualifies, the
        // target is not required to be a directory.
        if !Path::new(&expanded).exists() {
            return Err(DomainError::PathNotFound(expanded).into());
        }

        let abs_path = abspath(&expanded)?;

        if let Some(existing) = self.repository.get_by_path(&abs_path)? {
            return Err(DomainError::DuplicatePath(existing.name).into());
        }

        let bookmark = Bookmark::new(name, abs_path.as_str())?;
        debug!("adding bookmark {}", bookmark);
        self.repository.add(bookmark.clone())?;

        Ok(bookmark)
    }

    #[instrument(skip(self), level = "debug")]
    fn remove_bookmark(&self, name: &str) -> ApplicationResult<()> {
        if !self.repository.remove(name)? {
            return Err(DomainError::BookmarkNotFound(name.to_string()).into());
        }
        Ok(())
    }

    #[instrument(skip(self), level = "debug")]
    fn get_bookmark(&self, name: &str) -> ApplicationResult<Bookmark> {
        self.repository
            .get_by_name(name)?
            .ok_or_else(|| DomainError::BookmarkNotFound(name.to_string()).into())
    }

    #[instrument(skip(self), level = "trace")]
    fn get_all_bookmarks(&self) -> ApplicationResult<Vec<Bookmark>> {
        Ok(self.repository.get_all()?)
    }
}
