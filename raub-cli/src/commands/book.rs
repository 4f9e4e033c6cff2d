//! Book command implementation.
//!
//! This module implements the `book` command, which records a manual
//! reservation: a destination, one to four passengers, a departure slot
//! and an optional coupon. An unknown coupon code is reported and the
//! booking goes ahead without a discount.

use crate::error::CliError;
use crate::utils::{
    format_timestamp, load_configuration, open_store, parse_departure, parse_destination,
    render_reservation, save_store, GlobalOptions, PassengerArg,
};
use clap::Args;
use raub::{CouponTable, Error as LibError, ManualBooking, OutputFormat, TicketCount};
use std::time::SystemTime;

/// Book seats on a flight.
#[derive(Args)]
pub struct BookCommand {
    /// Destination id (1-7) or name
    #[arg(long, short = 'd', value_name = "DESTINATION")]
    pub destination: String,

    /// Passenger as NAME:AGE:SEAT (repeat once per ticket, up to four)
    #[arg(long = "passenger", short = 'p', value_name = "NAME:AGE:SEAT", required = true)]
    pub passengers: Vec<PassengerArg>,

    /// Departure slot letter (A-D) or time
    #[arg(long, short = 't', value_name = "SLOT")]
    pub departure: String,

    /// Coupon code (an unknown code books at full price)
    #[arg(long, value_name = "CODE")]
    pub coupon: Option<String>,

    /// Boarding pass format
    #[arg(long, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Validate the choices that need no store access
        let destination = parse_destination(&self.destination)?;
        let departure = parse_departure(&self.departure)?;
        let count = i64::try_from(self.passengers.len()).unwrap_or(i64::MAX);
        let tickets = TicketCount::try_from(count)?;

        // 3. Fill in the booking
        let mut booking = ManualBooking::new(destination, tickets);
        for passenger in &self.passengers {
            booking.add_passenger(&passenger.name, passenger.age, passenger.seat)?;
        }
        booking.set_departure(departure);

        if let Some(ref code) = self.coupon {
            match booking.apply_coupon(&CouponTable::default(), code) {
                Ok(discount) => {
                    if !global.quiet {
                        eprintln!(
                            "Coupon {code} applied: {}{discount} off",
                            config.currency()
                        );
                    }
                }
                Err(e @ LibError::UnknownCoupon { .. }) => {
                    if !global.quiet {
                        eprintln!("Warning: {e}, booking at full price");
                    }
                }
                Err(e) => return Err(e.into()),
            }
        }

        // 4. Finish against the stored references and persist
        let mut store = open_store(global, &config)?;
        let reservation = booking.finish(&mut rand::thread_rng(), &store)?;
        store.add(reservation.clone());
        save_store(&mut store, global)?;

        // 5. Print the boarding pass to stdout
        println!("{}", render_reservation(self.format, &config, &reservation)?);
        if !global.quiet {
            eprintln!(
                "Booked {} on {}",
                reservation.reference(),
                format_timestamp(SystemTime::now())
            );
        }

        Ok(())
    }
}
