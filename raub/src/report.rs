//! Sales totals over a set of reservations.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::money::Money;
use crate::reservation::Reservation;

/// Aggregate figures for a set of reservations.
///
/// # Examples
///
/// ```
/// use raub::{Money, Report};
///
/// let report = Report::from_records(&[]);
/// assert_eq!(report.total_tickets, 0);
/// assert_eq!(report.gross_before_discount(), Money::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Number of reservations.
    pub total_reservations: usize,
    /// Number of passengers across all reservations.
    pub total_tickets: usize,
    /// Number of adult passengers.
    pub total_adults: usize,
    /// Number of kid passengers.
    pub total_kids: usize,
    /// Sum of prices charged, after discounts.
    pub total_revenue: Money,
    /// Sum of discounts given.
    pub total_discount: Money,
    gross_before_discount: Money,
    /// Reservation count per destination name, in name order.
    pub by_destination: BTreeMap<String, usize>,
}

impl Report {
    /// Folds `records` into totals.
    #[must_use]
    pub fn from_records(records: &[Reservation]) -> Self {
        let mut report = records.iter().fold(Self::default(), |mut acc, r| {
            acc.total_reservations += 1;
            acc.total_tickets += r.passengers().len();
            acc.total_adults += r.num_adults();
            acc.total_kids += r.num_kids();
            acc.total_revenue += r.total_price();
            acc.total_discount += r.discount_applied();
            *acc
                .by_destination
                .entry(r.destination().name().to_string())
                .or_default() += 1;
            acc
        });
        report.gross_before_discount = report.total_revenue + report.total_discount;
        report
    }

    /// Revenue that would have been taken without any discount.
    #[must_use]
    pub const fn gross_before_discount(&self) -> Money {
        self.gross_before_discount
    }
}
