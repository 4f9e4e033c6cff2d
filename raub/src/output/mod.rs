//! Output formatting for reservations and reports.
//!
//! This module renders completed reservations as e-boarding passes and
//! report totals as text, or either one as JSON.

mod formatters;

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::report::Report;
use crate::reservation::Reservation;

pub use formatters::{HumanFormatter, JsonFormatter};

/// Airline details printed alongside every reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightDetails {
    /// Departure city for every flight.
    pub origin: String,
    /// Flight designator.
    pub flight_number: String,
    /// Currency prefix for amounts.
    pub currency: String,
}

impl Default for FlightDetails {
    fn default() -> Self {
        Self {
            origin: "KUALA LUMPUR".to_string(),
            flight_number: "RB370".to_string(),
            currency: "RM".to_string(),
        }
    }
}

/// Trait for rendering reservations and reports.
pub trait OutputFormatter {
    /// Render a single completed reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the reservation cannot be serialized.
    fn format_reservation(&self, reservation: &Reservation) -> Result<String>;

    /// Render report totals.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be serialized.
    fn format_report(&self, report: &Report) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Boarding passes and aligned totals.
    #[default]
    Human,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self, details: FlightDetails) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter::new(details)),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(Error::Validation {
                field: "output_format".into(),
                message: format!("unknown output format '{s}' (expected human or json)"),
            }),
        }
    }
}
