//! Sort command implementation.
//!
//! This module implements the `sort` command, which orders the stored
//! reservations by total price with the chosen algorithm and reports how
//! long the sort took. The stored order is left untouched.

use crate::commands::list::write_reservations;
use crate::error::CliError;
use crate::utils::{format_elapsed, load_configuration, open_store, GlobalOptions};
use clap::Args;
use raub::config::ListFormat;
use raub::SortAlgorithm;
use std::time::Instant;

/// Show reservations ordered by total price.
#[derive(Args)]
pub struct SortCommand {
    /// Sorting algorithm (bubble or merge)
    #[arg(long, short = 'a', value_name = "ALGORITHM", default_value_t = SortAlgorithm::Merge)]
    pub algorithm: SortAlgorithm,

    /// Output format (table, json or csv; defaults to the configured format)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<ListFormat>,
}

impl SortCommand {
    /// Execute the sort command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let started = Instant::now();
        let sorted = self.algorithm.sort_by_price(store.all());
        let elapsed = started.elapsed();

        let format = self.format.unwrap_or_else(|| config.list_format());
        write_reservations(format, &sorted, config.currency())?;

        if !global.quiet {
            eprintln!(
                "Sorted {} reservation(s) by price using {} sort in {}",
                sorted.len(),
                self.algorithm,
                format_elapsed(elapsed)
            );
        }

        Ok(())
    }
}
