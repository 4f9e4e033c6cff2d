//! Packages command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use raub::package::{PACKAGE_ADULTS, PACKAGE_KIDS};
use raub::Package;
use std::io::Write;

/// Show the family packages on offer.
#[derive(Args)]
pub struct PackagesCommand {}

impl PackagesCommand {
    /// Execute the packages command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let origin = config.origin();
        let currency = config.currency();

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        for package in Package::ALL {
            let (adult_add_on, kid_add_on) = package.add_ons();
            writeln!(
                handle,
                "Package {}: {origin} to {} for {PACKAGE_ADULTS} adults and {PACKAGE_KIDS} kids",
                package.letter(),
                package.destination(),
            )?;
            writeln!(
                handle,
                "    Add-ons {currency}{adult_add_on} per adult, {currency}{kid_add_on} per kid"
            )?;
            writeln!(
                handle,
                "    {currency}{} less {} = {currency}{}",
                package.pre_discount_price(),
                package.discount_percent(),
                package.final_price(),
            )?;
        }

        Ok(())
    }
}
