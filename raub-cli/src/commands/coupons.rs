//! Coupons command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use raub::CouponTable;

/// Show the coupon codes accepted by `book`.
#[derive(Args)]
pub struct CouponsCommand {}

impl CouponsCommand {
    /// Execute the coupons command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        for coupon in CouponTable::default().iter() {
            println!("{}\t{}", coupon.code, coupon.percent);
        }
        Ok(())
    }
}
