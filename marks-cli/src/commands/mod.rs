//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `shell`: Interactive shell over stdin
//! - `run`: Run a script of shell lines
//! - `completions`: Generate shell completion scripts
//! - `show_config`: Print the resolved configuration

pub mod completions;
pub mod run;
pub mod shell;
pub mod show_config;

pub use completions::CompletionsCommand;
pub use run::RunCommand;
pub use shell::ShellCommand;
pub use show_config::ShowConfigCommand;
