//! Environment variable handling for configuration overrides.
//!
//! `MARKS_*` variables override values read from configuration files.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::output::OutputFormat;
use std::env;

/// Seeds the starter bookmarks when true.
pub const ENV_SAMPLE_DATA: &str = "MARKS_SAMPLE_DATA";

/// Caps the navigation history.
pub const ENV_HISTORY_LIMIT: &str = "MARKS_HISTORY_LIMIT";

/// Selects the listing format.
pub const ENV_OUTPUT_FORMAT: &str = "MARKS_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use marks::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be
    /// parsed (a non-numeric limit, an unknown format, an invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(ENV_SAMPLE_DATA) {
            config.sample_data = Some(Self::parse_bool(ENV_SAMPLE_DATA, &val)?);
        }

        if let Ok(limit) = env::var(ENV_HISTORY_LIMIT) {
            config.history_limit = Some(limit.trim().parse().map_err(|_| Error::Validation {
                field: ENV_HISTORY_LIMIT.into(),
                message: "Must be a positive integer".into(),
            })?);
        }

        if let Ok(format) = env::var(ENV_OUTPUT_FORMAT) {
            config.output_format = Some(format.parse::<OutputFormat>().map_err(|e| {
                Error::Validation {
                    field: ENV_OUTPUT_FORMAT.into(),
                    message: e.to_string(),
                }
            })?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
