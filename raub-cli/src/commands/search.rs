//! Search command implementation.
//!
//! This module implements the `search` command, which finds a reservation
//! by its reference number and prints its boarding pass. A miss is reported
//! with exit code 1.

use crate::error::CliError;
use crate::utils::{
    format_elapsed, load_configuration, open_store, render_reservation, GlobalOptions,
};
use clap::Args;
use raub::{OutputFormat, SearchAlgorithm};
use std::time::Instant;

/// Find a reservation by reference number.
#[derive(Args)]
pub struct SearchCommand {
    /// Reference number, e.g. RB3X9K2A
    #[arg(value_name = "REFERENCE")]
    pub reference: String,

    /// Search algorithm (linear or binary)
    #[arg(long, short = 'a', value_name = "ALGORITHM", default_value_t = SearchAlgorithm::Binary)]
    pub algorithm: SearchAlgorithm,

    /// Boarding pass format
    #[arg(long, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

impl SearchCommand {
    /// Execute the search command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;
        let reference = self.reference.trim();

        let started = Instant::now();
        let found = self.algorithm.find(store.all(), reference);
        let elapsed = started.elapsed();

        if !global.quiet {
            eprintln!(
                "Searched {} reservation(s) using {} search in {}",
                store.len(),
                self.algorithm,
                format_elapsed(elapsed)
            );
        }

        let reservation = found.ok_or_else(|| {
            CliError::SemanticFailure(format!("No reservation found with reference {reference}"))
        })?;
        println!("{}", render_reservation(self.format, &config, &reservation)?);

        Ok(())
    }
}
