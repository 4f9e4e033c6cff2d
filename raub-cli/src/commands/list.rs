//! List command implementation.
//!
//! This module implements the `list` command, which displays stored
//! reservations in various formats (table, JSON, CSV). The `sort` command
//! reuses the writers here for its output.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, parse_destination, GlobalOptions};
use clap::Args;
use raub::config::ListFormat;
use raub::Reservation;
use std::io::Write;

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 8] = [
    "reference",
    "destination",
    "departure",
    "adults",
    "kids",
    "passengers",
    "price",
    "discount",
];

/// List stored reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Output format (table, json or csv; defaults to the configured format)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<ListFormat>,

    /// Only show reservations to this destination (id or name)
    #[arg(long, value_name = "DESTINATION")]
    pub filter_destination: Option<String>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Open the store (never written by this command)
        let store = open_store(global, &config)?;
        let mut reservations = store.all().to_vec();

        // 3. Apply filters
        if let Some(ref destination) = self.filter_destination {
            let destination = parse_destination(destination)?;
            reservations.retain(|r| r.destination() == destination);
        }

        // 4. Format and output to stdout
        let format = self.format.unwrap_or_else(|| config.list_format());
        write_reservations(format, &reservations, config.currency())
    }
}

/// Write reservations to stdout in the given format.
pub fn write_reservations(
    format: ListFormat,
    reservations: &[Reservation],
    currency: &str,
) -> Result<(), CliError> {
    match format {
        ListFormat::Table => format_as_table(reservations, currency),
        ListFormat::Json => format_as_json(reservations),
        ListFormat::Csv => format_as_csv(reservations),
    }
}

/// Format reservations as a human-readable table.
fn format_as_table(reservations: &[Reservation], currency: &str) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for res in reservations {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{}\t{currency}{}\t{currency}{}",
            res.reference(),
            res.destination(),
            res.departure(),
            res.num_adults(),
            res.num_kids(),
            passenger_names(res),
            res.total_price(),
            res.discount_applied(),
        )?;
    }

    Ok(())
}

/// Format reservations as JSON.
fn format_as_json(reservations: &[Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, reservations)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;

    writeln!(handle)?;

    Ok(())
}

/// Convert `csv::Error` to `CliError`.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

/// Format reservations as CSV.
fn format_as_csv(reservations: &[Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::Writer::from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for res in reservations {
        writer
            .write_record(&[
                res.reference().to_string(),
                res.destination().to_string(),
                res.departure().to_string(),
                res.num_adults().to_string(),
                res.num_kids().to_string(),
                passenger_names(res),
                res.total_price().to_string(),
                res.discount_applied().to_string(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}

fn passenger_names(reservation: &Reservation) -> String {
    reservation
        .passengers()
        .iter()
        .map(raub::Passenger::name)
        .collect::<Vec<_>>()
        .join("; ")
}
