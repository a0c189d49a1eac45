// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const SETUP_HELP: &str = "\
Setup:
  The shell has to perform the actual directory change, so add this to your
  .bashrc or .zshrc:
    function cdto() { cd \"$(bm go \"$1\")\" }
    alias goto=\"cdto\"";

#[derive(Parser)]
#[command(name = "bm", author, version, about, long_about = None, after_long_help = SETUP_HELP)]
/// Directory bookmarks for the terminal
pub struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a bookmark for the current or specified directory
    Add {
        /// Bookmark name
        name: String,
        /// Directory to bookmark; defaults to the current working directory
        path: Option<String>,
    },
    /// Remove a bookmark
    Remove {
        /// Bookmark name
        name: String,
    },
    /// Print the path of a bookmark (use with cd, see setup help)
    Go {
        /// Bookmark name; with none given, prints the home directory
        name: Option<String>,
    },
    /// List all bookmarks
    List,
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for: bash, zsh or fish
        shell: String,
    },
}
