//! Fares command implementation.
//!
//! Prints the fare table for every destination and the daily departure
//! slots.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use raub::{DepartureSlot, Destination};
use std::io::Write;

/// Show destinations, fares and departure times.
#[derive(Args)]
pub struct FaresCommand {}

impl FaresCommand {
    /// Execute the fares command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let currency = config.currency();

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        writeln!(handle, "ID\tDESTINATION\tADULT\tKID\tBUSINESS")?;
        for destination in Destination::ALL {
            let fare = destination.fare();
            writeln!(
                handle,
                "{}\t{}\t{currency}{}\t{currency}{}\t+{currency}{}",
                destination.id(),
                destination,
                fare.adult,
                fare.kid,
                fare.business_surcharge,
            )?;
        }

        writeln!(handle)?;
        writeln!(handle, "SLOT\tDEPARTS")?;
        for slot in DepartureSlot::ALL {
            writeln!(handle, "{}\t{}", slot.letter(), slot)?;
        }

        Ok(())
    }
}
