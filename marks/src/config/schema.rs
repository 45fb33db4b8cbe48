//! Configuration schema definitions.
//!
//! The structs here map one-to-one onto the YAML accepted in
//! `~/.marks/config.yaml` and `marks.yaml`. Every field is optional so that
//! partial files can be layered on top of each other.

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Seed the starter bookmarks unless told otherwise.
pub const DEFAULT_SAMPLE_DATA: bool = true;

/// Default output format for listings.
pub const DEFAULT_OUTPUT_FORMAT: OutputFormat = OutputFormat::Human;

/// Complete configuration.
///
/// # Examples
///
/// ```
/// use marks::config::Config;
/// use marks::output::OutputFormat;
///
/// let yaml = "sample_data: false\nhistory_limit: 20\noutput_format: json\n";
/// let config: Config = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.sample_data, Some(false));
/// assert_eq!(config.history_limit, Some(20));
/// assert_eq!(config.output_format, Some(OutputFormat::Json));
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Whether a new session starts with the starter bookmarks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_data: Option<bool>,

    /// Maximum number of navigation history entries kept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_limit: Option<usize>,

    /// Format used to print listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Built-in defaults, used as the lowest layer when building.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            sample_data: Some(DEFAULT_SAMPLE_DATA),
            history_limit: None,
            output_format: Some(DEFAULT_OUTPUT_FORMAT),
        }
    }
}
