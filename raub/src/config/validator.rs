//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use raub::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::with_defaults()).unwrap();
///
/// let blank = Config { currency: Some("  ".to_string()), ..Default::default() };
/// assert!(ConfigValidator::validate(&blank).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref origin) = config.origin {
            Self::validate_label("origin", origin)?;
        }

        if let Some(ref currency) = config.currency {
            Self::validate_label("currency", currency)?;
        }

        if let Some(ref flight) = config.flight_number {
            Self::validate_flight_number(flight)?;
        }

        if let Some(ref file) = config.data_file {
            if file.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "data_file".into(),
                    message: "Cannot be empty".into(),
                });
            }
        }

        Ok(())
    }

    /// Validate a free-text label printed on a single line.
    fn validate_label(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty".into(),
            });
        }
        if value.chars().any(char::is_control) {
            return Err(Error::Validation {
                field: field.into(),
                message: "Must be a single line of printable characters".into(),
            });
        }
        Ok(())
    }

    /// Validate a flight designator: ASCII letters and digits only.
    fn validate_flight_number(value: &str) -> Result<()> {
        if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::Validation {
                field: "flight_number".into(),
                message: format!("'{value}' must contain only letters and digits"),
            });
        }
        Ok(())
    }
}
