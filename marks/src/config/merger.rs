//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use marks::config::{Config, ConfigMerger};
///
/// let low = Config { history_limit: Some(5), ..Default::default() };
/// let high = Config { history_limit: Some(50), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.history_limit, Some(50));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources, given lowest precedence first, on top of `base`.
    #[must_use]
    pub fn merge(base: Config, sources: Vec<ConfigSource>) -> Config {
        let mut result = base;
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.sample_data.is_some() {
            target.sample_data = source.sample_data;
        }
        if source.history_limit.is_some() {
            target.history_limit = source.history_limit;
        }
        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
