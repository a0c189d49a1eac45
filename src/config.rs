// src/config.rs
use crate::domain::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::trace;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Path to the bookmarks JSON file
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

fn default_db_path() -> String {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config/bm/bookmarks.json")
        .to_str()
        .unwrap_or("bookmarks.json")
        .to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

/// Load settings: defaults, then config file, then environment override.
///
/// `config_path` is the CLI `--config` value; when absent the standard
/// location `~/.config/bm/config.toml` is consulted. `BM_DB_PATH` wins over
/// both, which is also what the tests use to point the tool at a temp store.
pub fn load_settings(config_path: Option<&Path>) -> DomainResult<Settings> {
    trace!("Loading settings");

    let mut settings = Settings::default();

    let config_file = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => dirs::home_dir().map(|p| p.join(".config/bm/config.toml")),
    };

    if let Some(path) = config_file {
        if path.exists() {
            trace!("Loading config from: {:?}", path);
            let config_text = std::fs::read_to_string(&path)
                .map_err(|e| DomainError::StorageRead(format!("{}: {}", path.display(), e)))?;
            let file_settings: Settings = toml::from_str(&config_text)
                .map_err(|e| DomainError::StorageFormat(format!("{}: {}", path.display(), e)))?;
            settings.db_path = file_settings.db_path;
        }
    }

    if let Ok(db_path) = std::env::var("BM_DB_PATH") {
        trace!("Using BM_DB_PATH from environment: {}", db_path);
        settings.db_path = db_path;
    }

    trace!("Settings loaded: {:?}", settings);
    Ok(settings)
}
