// src/cli/completion.rs
use crate::cli::args::Cli;
use clap::CommandFactory;
use clap_complete::{
    generate,
    shells::{Bash, Fish, Zsh},
};
use std::io;
use tracing::debug;

/// Generates a shell completion script for the given shell on stdout.
pub fn generate_completion(shell: &str) -> io::Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    match shell.to_lowercase().as_str() {
        "bash" => {
            debug!("Generating bash completion");
            generate(Bash, &mut cmd, bin_name, &mut io::stdout());
            Ok(())
        }
        "zsh" => {
            debug!("Generating zsh completion");
            generate(Zsh, &mut cmd, bin_name, &mut io::stdout());
            Ok(())
        }
        "fish" => {
            debug!("Generating fish completion");
            generate(Fish, &mut cmd, bin_name, &mut io::stdout());
            Ok(())
        }
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "Unsupported shell: {}. Supported shells: bash, zsh, fish",
                shell
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_bash_shell_when_generated_then_emits_completion_script() {
        let mut buffer = Vec::new();
        let mut cmd = Cli::command();
        let bin_name = cmd.get_name().to_string();
        generate(Bash, &mut cmd, bin_name, &mut buffer);

        let content = String::from_utf8_lossy(&buffer);
        assert!(content.contains("complete") || content.contains("COMPREPLY"));
    }

    #[test]
    fn given_fish_shell_when_generated_then_targets_bm() {
        let mut buffer = Vec::new();
        let mut cmd = Cli::command();
        let bin_name = cmd.get_name().to_string();
        generate(Fish, &mut cmd, bin_name, &mut buffer);

        let content = String::from_utf8_lossy(&buffer);
        assert!(content.contains("-c bm"));
    }

    #[test]
    fn given_unsupported_shell_when_generated_then_fails() {
        let result = generate_completion("powershell");
        assert!(result.is_err());
        if let Err(e) = result {
            assert_eq!(e.kind(), io::ErrorKind::InvalidInput);
        }
    }
}
