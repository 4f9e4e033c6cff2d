//! Environment variable handling for configuration overrides.
//!
//! This module provides support for RAUB_* environment variables that
//! override configuration file values.

use crate::config::schema::{Config, ListFormat};
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use raub::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `RAUB_OUTPUT_FORMAT` is not a known format.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(file) = Self::var("RAUB_DATA_FILE") {
            config.data_file = Some(PathBuf::from(file));
        }

        if let Some(origin) = Self::var("RAUB_ORIGIN") {
            config.origin = Some(origin);
        }

        if let Some(flight) = Self::var("RAUB_FLIGHT_NUMBER") {
            config.flight_number = Some(flight);
        }

        if let Some(currency) = Self::var("RAUB_CURRENCY") {
            config.currency = Some(currency);
        }

        if let Some(format) = Self::var("RAUB_OUTPUT_FORMAT") {
            config.output_format = Some(Self::parse_format(&format)?);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.is_empty())
    }

    fn parse_format(s: &str) -> Result<ListFormat> {
        s.parse().map_err(|_| Error::Validation {
            field: "RAUB_OUTPUT_FORMAT".into(),
            message: format!("Must be table, json or csv (got '{s}')"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "RAUB_DATA_FILE",
        "RAUB_ORIGIN",
        "RAUB_FLIGHT_NUMBER",
        "RAUB_CURRENCY",
        "RAUB_OUTPUT_FORMAT",
    ];

    fn with_vars<F: FnOnce()>(pairs: &[(&str, &str)], f: F) {
        let saved: Vec<_> = VARS.iter().map(|k| (*k, env::var(k).ok())).collect();
        for key in VARS {
            env::remove_var(key);
        }
        for (key, value) in pairs {
            env::set_var(key, value);
        }
        f();
        for (key, value) in saved {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(
            EnvironmentConfig::parse_format("CSV").unwrap(),
            ListFormat::Csv
        );
        let err = EnvironmentConfig::parse_format("xml").unwrap_err();
        assert!(format!("{err}").contains("RAUB_OUTPUT_FORMAT"));
    }

    #[test]
    #[serial]
    fn test_apply_overrides_no_env_vars() {
        with_vars(&[], || {
            let mut config = Config::with_defaults();
            EnvironmentConfig::apply_overrides(&mut config).unwrap();
            assert_eq!(config, Config::with_defaults());
        });
    }

    #[test]
    #[serial]
    fn test_apply_overrides_all_vars() {
        with_vars(
            &[
                ("RAUB_DATA_FILE", "alt.txt"),
                ("RAUB_ORIGIN", "PENANG"),
                ("RAUB_FLIGHT_NUMBER", "RB101"),
                ("RAUB_CURRENCY", "MYR"),
                ("RAUB_OUTPUT_FORMAT", "json"),
            ],
            || {
                let mut config = Config::with_defaults();
                EnvironmentConfig::apply_overrides(&mut config).unwrap();
                assert_eq!(config.data_file, Some(PathBuf::from("alt.txt")));
                assert_eq!(config.origin(), "PENANG");
                assert_eq!(config.flight_number(), "RB101");
                assert_eq!(config.currency(), "MYR");
                assert_eq!(config.list_format(), ListFormat::Json);
            },
        );
    }

    #[test]
    #[serial]
    fn test_empty_var_is_ignored() {
        with_vars(&[("RAUB_ORIGIN", "")], || {
            let mut config = Config::with_defaults();
            EnvironmentConfig::apply_overrides(&mut config).unwrap();
            assert_eq!(config.origin(), "KUALA LUMPUR");
        });
    }

    #[test]
    #[serial]
    fn test_invalid_format_fails() {
        with_vars(&[("RAUB_OUTPUT_FORMAT", "yaml")], || {
            let mut config = Config::default();
            assert!(EnvironmentConfig::apply_overrides(&mut config).is_err());
        });
    }
}
