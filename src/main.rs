// src/main.rs
use bm::cli::args::Cli;
use bm::config::{load_settings, Settings};
use bm::exitcode;
use bm::infrastructure::di::ServiceContainer;
use clap::error::ErrorKind;
use clap::Parser;
use crossterm::style::Stylize;
use tracing::{debug, info};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

fn main() {
    // The shell contract is exit 0/1 only, so clap's usage errors (which
    // would exit 2) are rendered and remapped here.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    std::process::exit(exitcode::SUCCESS)
                }
                _ => std::process::exit(exitcode::FAILURE),
            }
        }
    };

    setup_logging(cli.debug, cli.no_color);

    let settings = load_settings(cli.config.as_deref()).unwrap_or_else(|e| {
        debug!("Failed to load settings: {}. Using defaults.", e);
        Settings::default()
    });

    let services = match ServiceContainer::new(&settings) {
        Ok(services) => services,
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            std::process::exit(exitcode::FAILURE);
        }
    };

    if let Err(e) = bm::cli::execute_command(cli, &services) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(exitcode::FAILURE);
    }
}

fn setup_logging(verbosity: u8, no_color: bool) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // Diagnostics go to stderr so stdout stays clean for `go` shell capture.
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(!no_color);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => info!("Debug mode: info"),
        LevelFilter::DEBUG => debug!("Debug mode: debug"),
        LevelFilter::TRACE => debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_cli_command_when_verify_then_debug_asserts_pass() {
        use clap::CommandFactory;
        Cli::command().debug_assert()
    }
}
