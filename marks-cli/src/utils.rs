//! Utility functions for CLI operations.
//!
//! This module provides the global options shared by every command and the
//! configuration and session setup built from them.

use crate::cli::FormatArg;
use crate::error::CliError;
use marks::output::OutputFormat;
use marks::{Config, ConfigBuilder, Session};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Listing format requested on the command line.
    pub format: Option<FormatArg>,

    /// Start from an empty tree.
    pub empty: bool,

    /// Override the user configuration directory.
    pub config_dir: Option<PathBuf>,
}

impl GlobalOptions {
    /// The flags that override configuration, as a config layer.
    fn overrides(&self) -> Config {
        Config {
            sample_data: self.empty.then_some(false),
            output_format: self.format.map(OutputFormat::from),
            ..Config::default()
        }
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. `marks.yaml` in the working directory, then the user config file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref dir) = global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    builder
        .with_config(global.overrides())
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build a fresh session and the listing format from the configuration.
pub fn open_session(global: &GlobalOptions) -> Result<(Session, OutputFormat), CliError> {
    let config = load_configuration(global)?;
    let format = config.output_format.unwrap_or_default();
    log::debug!(
        "starting session (sample data: {}, history limit: {:?}, format: {format})",
        config.sample_data.unwrap_or(true),
        config.history_limit
    );
    Ok((Session::from_config(&config), format))
}
