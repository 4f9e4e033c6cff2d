//! Configuration schema definitions.
//!
//! This module defines the configuration structure for raub: where the
//! reservation file lives, the airline details printed on boarding passes,
//! and the default format for listings.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::output::FlightDetails;
use crate::store::DEFAULT_STORE_FILE;

/// Default departure city.
pub const DEFAULT_ORIGIN: &str = "KUALA LUMPUR";

/// Default flight designator.
pub const DEFAULT_FLIGHT_NUMBER: &str = "RB370";

/// Default currency prefix.
pub const DEFAULT_CURRENCY: &str = "RM";

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered; unset fields
/// fall back to the built-in defaults when read through the accessors.
///
/// # Examples
///
/// ```
/// use raub::config::Config;
///
/// let config: Config = serde_yaml::from_str("currency: MYR\n").unwrap();
/// assert_eq!(config.currency(), "MYR");
/// assert_eq!(config.origin(), "KUALA LUMPUR");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Reservation file, relative to the data directory unless absolute.
    pub data_file: Option<PathBuf>,

    /// Departure city printed on boarding passes.
    pub origin: Option<String>,

    /// Flight designator printed on boarding passes.
    pub flight_number: Option<String>,

    /// Currency prefix for amounts.
    pub currency: Option<String>,

    /// Output format for list commands.
    pub output_format: Option<ListFormat>,
}

impl Config {
    /// Returns a configuration with every field set to its built-in default.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            data_file: Some(PathBuf::from(DEFAULT_STORE_FILE)),
            origin: Some(DEFAULT_ORIGIN.to_string()),
            flight_number: Some(DEFAULT_FLIGHT_NUMBER.to_string()),
            currency: Some(DEFAULT_CURRENCY.to_string()),
            output_format: Some(ListFormat::Table),
        }
    }

    /// Returns the departure city.
    #[must_use]
    pub fn origin(&self) -> &str {
        self.origin.as_deref().unwrap_or(DEFAULT_ORIGIN)
    }

    /// Returns the flight designator.
    #[must_use]
    pub fn flight_number(&self) -> &str {
        self.flight_number.as_deref().unwrap_or(DEFAULT_FLIGHT_NUMBER)
    }

    /// Returns the currency prefix.
    #[must_use]
    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    /// Returns the list output format.
    #[must_use]
    pub fn list_format(&self) -> ListFormat {
        self.output_format.unwrap_or_default()
    }

    /// Resolves the reservation file against `data_dir`.
    #[must_use]
    pub fn store_path(&self, data_dir: &Path) -> PathBuf {
        let file = self
            .data_file
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_STORE_FILE));
        data_dir.join(file)
    }

    /// Returns the airline details used when rendering reservations.
    #[must_use]
    pub fn flight_details(&self) -> FlightDetails {
        FlightDetails {
            origin: self.origin().to_string(),
            flight_number: self.flight_number().to_string(),
            currency: self.currency().to_string(),
        }
    }
}

/// Output format for listing reservations.
///
/// # Examples
///
/// ```
/// use raub::config::ListFormat;
///
/// let format: ListFormat = "csv".parse().unwrap();
/// assert_eq!(format.to_string(), "csv");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
}

impl fmt::Display for ListFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for ListFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(Error::Validation {
                field: "output_format".into(),
                message: format!("unknown format '{s}' (expected table, json or csv)"),
            }),
        }
    }
}
