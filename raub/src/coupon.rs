//! Coupon codes for manual reservations.

use serde::Serialize;

use crate::money::Percent;

/// A coupon code and the discount it grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coupon {
    /// The exact, case-sensitive code.
    pub code: &'static str,
    /// Discount off the reservation total.
    pub percent: Percent,
}

const COUPONS: [Coupon; 4] = [
    Coupon {
        code: "CAPTAINAFIQ",
        percent: Percent::of(5),
    },
    Coupon {
        code: "COPILOTAMIR",
        percent: Percent::of(10),
    },
    Coupon {
        code: "AEROAMEEN",
        percent: Percent::of(15),
    },
    Coupon {
        code: "STEWARDFARIS",
        percent: Percent::of(10),
    },
];

/// Lookup table of the coupons accepted by manual reservations.
///
/// # Examples
///
/// ```
/// use raub::CouponTable;
///
/// let table = CouponTable::default();
/// assert_eq!(table.lookup("AEROAMEEN").unwrap().value(), 15);
/// assert!(table.lookup("aeroameen").is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CouponTable;

impl CouponTable {
    /// Returns the discount for `code`, or `None` if the code is unknown.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<Percent> {
        COUPONS.iter().find(|c| c.code == code).map(|c| c.percent)
    }

    /// Iterates over every coupon in display order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Coupon> {
        COUPONS.iter()
    }
}
