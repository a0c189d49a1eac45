// src/cli/mod.rs
use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::infrastructure::di::ServiceContainer;
use clap::CommandFactory;

pub mod args;
pub mod bookmark_commands;
pub mod completion;
pub mod display;
pub mod error;

pub fn execute_command(cli: Cli, services: &ServiceContainer) -> CliResult<()> {
    let service = services.bookmark_service.as_ref();

    match cli.command {
        Some(Commands::Add { name, path }) => bookmark_commands::add(service, name, path),
        Some(Commands::Remove { name }) => bookmark_commands::remove(service, name),
        Some(Commands::Go { name }) => bookmark_commands::go(service, name),
        Some(Commands::List) => bookmark_commands::list(service),
        Some(Commands::Completion { shell }) => handle_completion(&shell),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

fn handle_completion(shell: &str) -> CliResult<()> {
    completion::generate_completion(shell).map_err(|e| {
        error::CliError::CommandFailed(format!("Failed to generate completion script: {}", e))
    })
}
