//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use raub::config::{Config, ConfigMerger};
///
/// let low = Config { currency: Some("RM".to_string()), ..Default::default() };
/// let high = Config { currency: Some("MYR".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.currency, Some("MYR".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources, given from lowest to highest precedence, over `base`.
    #[must_use]
    pub fn merge(base: Config, sources: Vec<ConfigSource>) -> Config {
        sources.into_iter().fold(base, |mut result, source| {
            Self::merge_into(&mut result, &source.config);
            result
        })
    }

    /// Merge source config into target; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.data_file.is_some() {
            target.data_file.clone_from(&source.data_file);
        }

        if source.origin.is_some() {
            target.origin.clone_from(&source.origin);
        }

        if source.flight_number.is_some() {
            target.flight_number.clone_from(&source.flight_number);
        }

        if source.currency.is_some() {
            target.currency.clone_from(&source.currency);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
