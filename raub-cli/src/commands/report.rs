//! Report command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::Args;
use raub::{OutputFormat, Report};

/// Summarise ticket sales and revenue.
#[derive(Args)]
pub struct ReportCommand {
    /// Report format (human or json)
    #[arg(long, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

impl ReportCommand {
    /// Execute the report command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let report = Report::from_records(store.all());
        let formatter = self.format.create_formatter(config.flight_details());
        println!("{}", formatter.format_report(&report)?);

        Ok(())
    }
}
