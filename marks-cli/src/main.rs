//! Main entry point for the marks CLI.
//!
//! This is the command-line interface for the marks bookmark tree.
//! It provides commands for working with a session:
//! - `shell`: Interactive shell over stdin
//! - `run`: Run a script of shell lines
//! - `completions`: Generate shell completion scripts
//! - `show-config`: Print the resolved configuration

mod cli;
mod commands;
mod error;
mod repl;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library log records to stderr based on verbosity
    if let Err(e) = marks::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: could not install logger: {e}");
    }

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        format: cli.format,
        empty: cli.empty,
        config_dir: cli.config_dir,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Shell(cmd) => cmd.execute(&global),
        cli::Command::Run(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
        cli::Command::ShowConfig(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
