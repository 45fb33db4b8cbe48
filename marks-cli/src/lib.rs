//! Library exports for marks-cli.
//!
//! This module exports the CLI structure for use by the build script
//! to generate man pages, and the shell interpreter for embedding.

pub mod cli;
pub mod commands;
pub mod error;
pub mod repl;
pub mod utils;

// Re-export CLI for build script
pub use cli::Cli;
