//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed executable.
const BIN_NAME: &str = "marks";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            print_install_hint(self.shell);
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

fn print_install_hint(shell: Shell) {
    eprintln!("# Generating {shell} completion script");
    eprintln!("# Run the following command to enable completions:");

    match shell {
        Shell::Bash => {
            eprintln!("#   marks completions bash > ~/.local/share/bash-completion/completions/marks");
            eprintln!("# Or source it directly in ~/.bashrc:");
            eprintln!("#   eval \"$(marks completions bash)\"");
        }
        Shell::Zsh => {
            eprintln!("#   marks completions zsh > ~/.zsh/completions/_marks");
            eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
        }
        Shell::Fish => {
            eprintln!("#   marks completions fish > ~/.config/fish/completions/marks.fish");
            eprintln!("# Or add to config.fish:");
            eprintln!("#   marks completions fish | source");
        }
        Shell::PowerShell => {
            eprintln!("#   marks completions powershell > $PROFILE");
        }
        _ => {}
    }

    eprintln!();
}
