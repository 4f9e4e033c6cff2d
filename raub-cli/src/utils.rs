//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, store access, argument parsing and
//! output formatting.

use crate::error::CliError;
use raub::config::resolve_data_dir;
use raub::{
    Config, ConfigBuilder, DepartureSlot, Destination, OutputFormat, Package, ReservationStore,
};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. `config.yaml` in the data directory
/// 3. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref dir) = global.data_dir {
        builder = builder.with_data_dir(dir);
    }

    builder.build().map_err(|e| match e {
        raub::Error::Configuration(inner) => CliError::Config(inner.to_string()),
        other => CliError::Config(other.to_string()),
    })
}

/// Resolve the data directory from global options.
pub fn data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    resolve_data_dir(global.data_dir.as_deref()).map_err(|e| CliError::Config(e.to_string()))
}

/// Open the reservation store named by the configuration.
///
/// A missing or unreadable file yields an empty store.
pub fn open_store(global: &GlobalOptions, config: &Config) -> Result<ReservationStore, CliError> {
    let path = config.store_path(&data_dir(global)?);
    Ok(ReservationStore::open(path))
}

/// Write the store back to its file if it changed, and report where it went.
pub fn save_store(store: &mut ReservationStore, global: &GlobalOptions) -> Result<(), CliError> {
    if !store.is_dirty() {
        return Ok(());
    }
    store.persist()?;
    if global.verbose {
        if let Some(path) = store.path() {
            eprintln!("Saved {} reservation(s) to {}", store.len(), shorten_path(path));
        }
    }
    Ok(())
}

/// A passenger given on the command line as `NAME:AGE:SEAT`.
///
/// The age and seat are split from the right, so names may contain colons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassengerArg {
    /// Passenger name as typed.
    pub name: String,
    /// Age in years.
    pub age: i64,
    /// Requested seat.
    pub seat: i32,
}

impl FromStr for PassengerArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(3, ':');
        let (Some(seat), Some(age), Some(name)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(format!("expected NAME:AGE:SEAT, got '{s}'"));
        };

        let age = age
            .trim()
            .parse()
            .map_err(|_| format!("age must be a whole number, got '{age}'"))?;
        let seat = seat
            .trim()
            .parse()
            .map_err(|_| format!("seat must be a whole number, got '{seat}'"))?;

        Ok(Self {
            name: name.to_string(),
            age,
            seat,
        })
    }
}

/// Parse a destination given as a menu id (1-7) or a name.
pub fn parse_destination(value: &str) -> Result<Destination, CliError> {
    match value.trim().parse::<i64>() {
        Ok(id) => Ok(Destination::from_id(id)?),
        Err(_) => value
            .parse()
            .map_err(|e: raub::Error| CliError::InvalidArguments(e.to_string())),
    }
}

/// Parse a departure given as a menu letter (A-D) or a time such as `1.30PM`.
pub fn parse_departure(value: &str) -> Result<DepartureSlot, CliError> {
    let value = value.trim();
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Ok(DepartureSlot::from_choice(letter)?),
        _ => value
            .parse()
            .map_err(|e: raub::Error| CliError::InvalidArguments(e.to_string())),
    }
}

/// Parse a package menu letter (A-C).
pub fn parse_package(value: &str) -> Result<Package, CliError> {
    let value = value.trim();
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Ok(Package::from_choice(letter)?),
        _ => Err(raub::Error::InvalidPackage {
            choice: value.to_string(),
        }
        .into()),
    }
}

/// Render a reservation with the configured flight details.
pub fn render_reservation(
    format: OutputFormat,
    config: &Config,
    reservation: &raub::Reservation,
) -> Result<String, CliError> {
    let formatter = format.create_formatter(config.flight_details());
    formatter
        .format_reservation(reservation)
        .map_err(CliError::from)
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: std::time::SystemTime) -> String {
    use chrono::{DateTime, Local};
    let dt: DateTime<Local> = ts.into();
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format an elapsed time in seconds with microsecond precision.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.6}s", elapsed.as_secs_f64())
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        use std::time::{Duration, UNIX_EPOCH};
        let st = UNIX_EPOCH + Duration::from_secs(1_705_323_045);
        let formatted = format_timestamp(st);
        assert!(formatted.starts_with("2024-01-1"));
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_micros(1_500)), "0.001500s");
    }

    #[test]
    fn test_shorten_path_outside_home() {
        let path = PathBuf::from("/usr/local/bin");
        assert_eq!(shorten_path(&path), "/usr/local/bin");
    }

    #[test]
    fn test_parse_passenger() {
        let p: PassengerArg = "Nur Ameerul:34:5".parse().unwrap();
        assert_eq!(p.name, "Nur Ameerul");
        assert_eq!(p.age, 34);
        assert_eq!(p.seat, 5);

        let p: PassengerArg = "Dr: Who:900:1".parse().unwrap();
        assert_eq!(p.name, "Dr: Who");
        assert_eq!(p.age, 900);
    }

    #[test]
    fn test_parse_passenger_rejects_bad_shape() {
        assert!("Afiq:30".parse::<PassengerArg>().is_err());
        assert!("Afiq:thirty:3".parse::<PassengerArg>().is_err());
        assert!("Afiq:30:3A".parse::<PassengerArg>().is_err());
    }

    #[test]
    fn test_parse_destination() {
        assert_eq!(parse_destination("4").unwrap(), Destination::Tokyo);
        assert_eq!(parse_destination("paris").unwrap(), Destination::Paris);
        assert_eq!(parse_destination("9").unwrap_err().exit_code(), 4);
        assert_eq!(parse_destination("Atlantis").unwrap_err().exit_code(), 4);
    }

    #[test]
    fn test_parse_departure() {
        assert_eq!(parse_departure("b").unwrap(), DepartureSlot::B);
        assert_eq!(parse_departure("10.30PM").unwrap(), DepartureSlot::D);
        assert_eq!(parse_departure("E").unwrap_err().exit_code(), 4);
        assert_eq!(parse_departure("noon").unwrap_err().exit_code(), 4);
    }

    #[test]
    fn test_save_store_writes_only_changes() {
        use raub::{ManualBooking, TicketCount};

        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("reservations.txt");
        let global = GlobalOptions {
            verbose: false,
            quiet: true,
            data_dir: None,
        };

        let mut store = ReservationStore::open(&path);
        save_store(&mut store, &global).unwrap();
        assert!(!path.exists());

        let mut booking =
            ManualBooking::new(Destination::Jakarta, TicketCount::try_from(1).unwrap());
        booking.add_passenger("Afiq", 30, 20).unwrap();
        booking.set_departure(DepartureSlot::A);
        let reservation = booking.finish(&mut rand::thread_rng(), &store).unwrap();
        store.add(reservation);
        save_store(&mut store, &global).unwrap();
        assert!(path.exists());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_parse_package() {
        assert_eq!(parse_package("c").unwrap(), Package::C);
        assert_eq!(parse_package("D").unwrap_err().exit_code(), 4);
        assert_eq!(parse_package("AB").unwrap_err().exit_code(), 4);
    }
}
