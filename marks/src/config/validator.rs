//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use marks::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { history_limit: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(limit) = config.history_limit {
            Self::validate_history_limit(limit)?;
        }
        Ok(())
    }

    fn validate_history_limit(limit: usize) -> Result<()> {
        if limit == 0 {
            return Err(Error::Validation {
                field: "history_limit".into(),
                message: "History limit must be at least 1".into(),
            });
        }
        Ok(())
    }
}
