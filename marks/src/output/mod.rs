//! Output formatting module for folder listings.
//!
//! This module renders [`ListingItem`]s for display: a human-readable layout
//! for terminals, and JSON or YAML for scripts. [`render_tree`] draws the
//! whole tree at once.

mod formatters;
mod tree_view;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::node::ListingItem;
use crate::{Error, Result};

pub use formatters::{HumanFormatter, JsonFormatter, YamlFormatter};
pub use tree_view::render_tree;

/// Trait for formatting a folder listing into text.
pub trait OutputFormatter {
    /// Format the given items, in listing order, into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, items: &[ListingItem]) -> Result<String>;
}

/// Available output formats for listings.
///
/// # Examples
///
/// ```
/// use marks::output::OutputFormat;
///
/// let format: OutputFormat = "JSON".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(Error::Validation {
                field: "output_format".to_string(),
                message: format!("unknown format '{s}' (expected human, json or yaml)"),
            }),
        }
    }
}
