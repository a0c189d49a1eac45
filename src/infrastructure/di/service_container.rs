// src/infrastructure/di/service_container.rs
use crate::application::error::ApplicationResult;
use crate::application::services::bookmark_service::BookmarkService;
use crate::application::BookmarkServiceImpl;
use crate::config::Settings;
use crate::infrastructure::repositories::json_bookmark_repository::JsonBookmarkRepository;
use std::sync::Arc;

/// Single composition root: wires the repository and services from injected
/// settings. Constructing the container loads the persisted collection.
pub struct ServiceContainer {
    pub bookmark_service: Arc<dyn BookmarkService>,
}

impl ServiceContainer {
    pub fn new(settings: &Settings) -> ApplicationResult<Self> {
        let repository = Arc::new(JsonBookmarkRepository::new(&settings.db_path)?);
        let bookmark_service = Arc::new(BookmarkServiceImpl::new(repository));

        Ok(Self { bookmark_service })
    }
}
