//! Show-config command.
//!
//! Prints the configuration after every layer (files, environment and
//! command-line flags) has been applied, as YAML.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;

/// Print the resolved configuration
#[derive(Args)]
pub struct ShowConfigCommand {}

impl ShowConfigCommand {
    /// Execute the show-config command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let yaml = serde_yaml::to_string(&config).map_err(marks::Error::from)?;
        print!("{yaml}");
        Ok(())
    }
}
