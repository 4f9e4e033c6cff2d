//! Package command implementation.
//!
//! This module implements the `package` command, which books one of the
//! fixed family packages for two adults and two kids.

use crate::error::CliError;
use crate::utils::{
    format_timestamp, load_configuration, open_store, parse_departure, parse_package,
    render_reservation, save_store, GlobalOptions, PassengerArg,
};
use clap::Args;
use raub::package::{PACKAGE_ADULTS, PACKAGE_KIDS};
use raub::{OutputFormat, PackageBooking};
use std::time::SystemTime;

/// Book a family package.
#[derive(Args)]
pub struct PackageCommand {
    /// Package letter (A-C)
    #[arg(long, short = 'k', value_name = "LETTER")]
    pub package: String,

    /// Passenger as NAME:AGE:SEAT (two adults and two kids)
    #[arg(long = "passenger", short = 'p', value_name = "NAME:AGE:SEAT", required = true)]
    pub passengers: Vec<PassengerArg>,

    /// Departure slot letter (A-D) or time
    #[arg(long, short = 't', value_name = "SLOT")]
    pub departure: String,

    /// Boarding pass format
    #[arg(long, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

impl PackageCommand {
    /// Execute the package command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let package = parse_package(&self.package)?;
        let departure = parse_departure(&self.departure)?;
        let party = PACKAGE_ADULTS + PACKAGE_KIDS;
        if self.passengers.len() != party {
            return Err(CliError::InvalidArguments(format!(
                "package {package} needs exactly {party} passengers ({PACKAGE_ADULTS} adults and {PACKAGE_KIDS} kids), got {}",
                self.passengers.len()
            )));
        }

        let mut booking = PackageBooking::new(package);
        for passenger in &self.passengers {
            booking.add_passenger(&passenger.name, passenger.age, passenger.seat)?;
        }
        booking.set_departure(departure);

        let mut store = open_store(global, &config)?;
        let reservation = booking.finish(&mut rand::thread_rng(), &store)?;
        store.add(reservation.clone());
        save_store(&mut store, global)?;

        println!("{}", render_reservation(self.format, &config, &reservation)?);
        if !global.quiet {
            eprintln!(
                "Booked package {} as {} on {}",
                package.letter(),
                reservation.reference(),
                format_timestamp(SystemTime::now())
            );
        }

        Ok(())
    }
}
