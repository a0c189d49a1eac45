// src/cli/bookmark_commands.rs
use crate::application::services::bookmark_service::BookmarkService;
use crate::cli::display::DisplayBookmark;
use crate::cli::error::{CliError, CliResult};
use std::io::{self, Write};
use tracing::instrument;

#[instrument(skip(service))]
pub fn add(service: &dyn BookmarkService, name: String, path: Option<String>) -> CliResult<()> {
    let raw_path = match path {
        Some(path) => path,
        None => {
            let cwd = std::env::current_dir()?;
            cwd.to_str()
                .ok_or_else(|| {
                    CliError::CommandFailed(
                        "current directory is not valid UTF-8".to_string(),
                    )
                })?
                .to_string()
        }
    };

    let bookmark = service.add_bookmark(&name, &raw_path)?;
    println!("Added bookmark '{}' -> {}", bookmark.name, bookmark.path);
    Ok(())
}

#[instrument(skip(service))]
pub fn remove(service: &dyn BookmarkService, name: String) -> CliResult<()> {
    service.remove_bookmark(&name)?;
    println!("Removed bookmark '{}'", name);
    Ok(())
}

/// Resolve a bookmark and print the bare path for shell capture: stdout only,
/// no trailing newline, no decoration. With no name, print the home directory.
#[instrument(skip(service))]
pub fn go(service: &dyn BookmarkService, name: Option<String>) -> CliResult<()> {
    let path = match name {
        Some(name) => service.get_bookmark(&name)?.path,
        None => {
            let home = dirs::home_dir().ok_or_else(|| {
                CliError::CommandFailed("Failed to get home directory".to_string())
            })?;
            home.to_str()
                .ok_or_else(|| {
                    CliError::CommandFailed("home directory is not valid UTF-8".to_string())
                })?
                .to_string()
        }
    };

    print!("{}", path);
    io::stdout().flush()?;
    Ok(())
}

#[instrument(skip(service))]
pub fn list(service: &dyn BookmarkService) -> CliResult<()> {
    let bookmarks = service.get_all_bookmarks()?;

    if bookmarks.is_empty() {
        println!("No bookmarks saved.");
        return Ok(());
    }

    println!("Bookmarks:");
    for bookmark in &bookmarks {
        println!("{}", DisplayBookmark::from(bookmark));
    }
    Ok(())
}
