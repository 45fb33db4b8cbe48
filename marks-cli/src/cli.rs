//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, RunCommand, ShellCommand, ShowConfigCommand};
use clap::{Parser, Subcommand, ValueEnum};
use marks::output::OutputFormat;
use std::path::PathBuf;

/// Interactive bookmark manager over an in-memory folder tree.
#[derive(Parser)]
#[command(name = "marks")]
#[command(version, about = "Organize bookmarks in a folder tree", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Listing format (overrides configuration)
    #[arg(long, value_enum, global = true)]
    pub format: Option<FormatArg>,

    /// Start from an empty root folder instead of the starter bookmarks
    #[arg(long, global = true)]
    pub empty: bool,

    /// Override the user configuration directory
    #[arg(long, value_name = "PATH", global = true, env = "MARKS_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Start an interactive shell
    Shell(ShellCommand),

    /// Run a script of shell lines
    Run(RunCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),

    /// Print the resolved configuration
    ShowConfig(ShowConfigCommand),
}

/// Listing formats accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Human-readable lines
    Human,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Human => OutputFormat::Human,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["marks", "shell", "--format", "json", "--empty"]).unwrap();
        assert_eq!(cli.format, Some(FormatArg::Json));
        assert!(cli.empty);
        assert!(matches!(cli.command, Command::Shell(_)));
    }

    #[test]
    fn test_run_requires_file() {
        assert!(Cli::try_parse_from(["marks", "run"]).is_err());
        let cli = Cli::try_parse_from(["marks", "run", "demo.marks", "--keep-going"]).unwrap();
        match cli.command {
            Command::Run(run) => {
                assert_eq!(run.file, PathBuf::from("demo.marks"));
                assert!(run.keep_going);
            }
            _ => panic!("expected run"),
        }
    }
}
