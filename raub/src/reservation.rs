//! Reservation records.
//!
//! This module provides the reservation record produced by the booking
//! flows and the reference number that identifies it.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;

use crate::catalog::{DepartureSlot, Destination};
use crate::error::{Error, Result};
use crate::money::Money;
use crate::passenger::{AgeGroup, Passenger};

/// Most passengers a single reservation may hold.
pub const MAX_PASSENGERS: usize = 4;

/// Largest pre-discount price a single reservation may carry.
pub const MAX_RESERVATION_AMOUNT: Money = Money::from_units(1_000_000_000);

const REFERENCE_PREFIX: &str = "RB";
const REFERENCE_SUFFIX_LEN: usize = 6;
const REFERENCE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A reservation's identity: `RB` followed by six characters from `[0-9A-Z]`.
///
/// # Examples
///
/// ```
/// use raub::ReferenceNumber;
///
/// let reference: ReferenceNumber = "RB3X9K2A".parse().unwrap();
/// assert_eq!(reference.as_str(), "RB3X9K2A");
///
/// assert!("RB3X9K2".parse::<ReferenceNumber>().is_err());
/// assert!("XX3X9K2A".parse::<ReferenceNumber>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ReferenceNumber(String);

impl ReferenceNumber {
    /// Generates a random reference number.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let suffix: String = (0..REFERENCE_SUFFIX_LEN)
            .map(|_| char::from(REFERENCE_ALPHABET[rng.gen_range(0..REFERENCE_ALPHABET.len())]))
            .collect();
        Self(format!("{REFERENCE_PREFIX}{suffix}"))
    }

    /// Returns the reference number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ReferenceNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let valid = s
            .strip_prefix(REFERENCE_PREFIX)
            .is_some_and(|suffix| {
                suffix.len() == REFERENCE_SUFFIX_LEN
                    && suffix.bytes().all(|b| REFERENCE_ALPHABET.contains(&b))
            });
        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(Error::InvalidReference {
                value: s.to_string(),
            })
        }
    }
}

impl fmt::Display for ReferenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A completed booking for 1-4 passengers on one flight.
///
/// Reservations are created by [`ManualBooking`](crate::ManualBooking) or
/// [`PackageBooking`](crate::PackageBooking), or decoded from a saved
/// store, and are never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    reference: ReferenceNumber,
    destination: Destination,
    departure: DepartureSlot,
    total_price: Money,
    discount_applied: Money,
    num_adults: usize,
    num_kids: usize,
    passengers: Vec<Passenger>,
}

impl Reservation {
    /// Assembles a reservation, checking the invariants every record holds.
    ///
    /// Adult and kid counts are derived from the passengers.
    pub(crate) fn from_parts(
        reference: ReferenceNumber,
        destination: Destination,
        departure: DepartureSlot,
        total_price: Money,
        discount_applied: Money,
        passengers: Vec<Passenger>,
    ) -> Result<Self> {
        if passengers.is_empty() || passengers.len() > MAX_PASSENGERS {
            return Err(Error::Validation {
                field: "passengers".into(),
                message: format!(
                    "a reservation holds 1-{MAX_PASSENGERS} passengers, found {}",
                    passengers.len()
                ),
            });
        }

        let pre_discount = total_price
            .checked_add(discount_applied)
            .filter(|amount| *amount <= MAX_RESERVATION_AMOUNT);
        if pre_discount.is_none() {
            return Err(Error::Validation {
                field: "price".into(),
                message: format!(
                    "price {total_price} plus discount {discount_applied} exceeds {MAX_RESERVATION_AMOUNT}"
                ),
            });
        }

        let mut seats = HashSet::new();
        for passenger in &passengers {
            if !seats.insert(passenger.seat()) {
                return Err(Error::SeatTaken {
                    seat: passenger.seat().value(),
                });
            }
        }

        let num_adults = passengers
            .iter()
            .filter(|p| p.age_group() == AgeGroup::Adult)
            .count();
        let num_kids = passengers.len() - num_adults;

        Ok(Self {
            reference,
            destination,
            departure,
            total_price,
            discount_applied,
            num_adults,
            num_kids,
            passengers,
        })
    }

    /// Returns the reference number.
    #[must_use]
    pub const fn reference(&self) -> &ReferenceNumber {
        &self.reference
    }

    /// Returns the destination.
    #[must_use]
    pub const fn destination(&self) -> Destination {
        self.destination
    }

    /// Returns the departure slot.
    #[must_use]
    pub const fn departure(&self) -> DepartureSlot {
        self.departure
    }

    /// Returns the price charged, after any discount.
    #[must_use]
    pub const fn total_price(&self) -> Money {
        self.total_price
    }

    /// Returns the amount taken off by a coupon or package discount.
    #[must_use]
    pub const fn discount_applied(&self) -> Money {
        self.discount_applied
    }

    /// Returns the price before any discount.
    #[must_use]
    pub fn pre_discount_price(&self) -> Money {
        self.total_price + self.discount_applied
    }

    /// Returns the passengers in booking order.
    #[must_use]
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// Returns the number of adult passengers.
    #[must_use]
    pub const fn num_adults(&self) -> usize {
        self.num_adults
    }

    /// Returns the number of kid passengers.
    #[must_use]
    pub const fn num_kids(&self) -> usize {
        self.num_kids
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Builds a one-passenger economy reservation with the given price.
    pub(crate) fn sample(reference: &str, total_cents: u64) -> Reservation {
        Reservation::from_parts(
            reference.parse().unwrap(),
            Destination::Jakarta,
            DepartureSlot::A,
            Money::from_cents(total_cents),
            Money::ZERO,
            vec![Passenger::new("Sample", 30, 20).unwrap()],
        )
        .unwrap()
    }

    #[test]
    fn test_generated_reference_format() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let reference = ReferenceNumber::generate(&mut rng);
            assert_eq!(reference.as_str().len(), 8);
            assert!(reference.as_str().starts_with("RB"));
            assert_eq!(
                reference.as_str().parse::<ReferenceNumber>().unwrap(),
                reference
            );
        }
    }

    #[test]
    fn test_generation_is_seed_deterministic() {
        let a = ReferenceNumber::generate(&mut StdRng::seed_from_u64(42));
        let b = ReferenceNumber::generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_reference_rejects_lowercase() {
        assert!("RBabcdef".parse::<ReferenceNumber>().is_err());
        assert!("rb123456".parse::<ReferenceNumber>().is_err());
        assert!("RB1234567".parse::<ReferenceNumber>().is_err());
    }

    #[test]
    fn test_counts_derived_from_passengers() {
        let reservation = Reservation::from_parts(
            "RB000001".parse().unwrap(),
            Destination::Paris,
            DepartureSlot::B,
            Money::from_units(4200),
            Money::ZERO,
            vec![
                Passenger::new("Adult One", 40, 20).unwrap(),
                Passenger::new("Kid One", 8, 21).unwrap(),
                Passenger::new("Adult Two", 18, 22).unwrap(),
            ],
        )
        .unwrap();

        assert_eq!(reservation.num_adults(), 2);
        assert_eq!(reservation.num_kids(), 1);
        assert_eq!(
            reservation.num_adults() + reservation.num_kids(),
            reservation.passengers().len()
        );
    }

    #[test]
    fn test_duplicate_seats_rejected() {
        let result = Reservation::from_parts(
            "RB000002".parse().unwrap(),
            Destination::Paris,
            DepartureSlot::B,
            Money::from_units(2800),
            Money::ZERO,
            vec![
                Passenger::new("One", 40, 20).unwrap(),
                Passenger::new("Two", 41, 20).unwrap(),
            ],
        );
        assert!(matches!(result, Err(Error::SeatTaken { seat: 20 })));
    }

    #[test]
    fn test_passenger_count_bounds() {
        let none = Reservation::from_parts(
            "RB000003".parse().unwrap(),
            Destination::Paris,
            DepartureSlot::B,
            Money::ZERO,
            Money::ZERO,
            Vec::new(),
        );
        assert!(none.is_err());

        let five = (0..5)
            .map(|i| Passenger::new("P", 30, 20 + i).unwrap())
            .collect();
        let too_many = Reservation::from_parts(
            "RB000004".parse().unwrap(),
            Destination::Paris,
            DepartureSlot::B,
            Money::ZERO,
            Money::ZERO,
            five,
        );
        assert!(too_many.is_err());
    }

    #[test]
    fn test_pre_discount_price() {
        let reservation = Reservation::from_parts(
            "RB000005".parse().unwrap(),
            Destination::Jakarta,
            DepartureSlot::C,
            Money::from_units(850),
            Money::from_units(150),
            vec![Passenger::new("Afiq", 30, 20).unwrap()],
        )
        .unwrap();
        assert_eq!(reservation.pre_discount_price(), Money::from_units(1000));
    }

    #[test]
    fn test_oversized_amounts_rejected() {
        let build = |price: Money, discount: Money| {
            Reservation::from_parts(
                "RB000006".parse().unwrap(),
                Destination::Jakarta,
                DepartureSlot::A,
                price,
                discount,
                vec![Passenger::new("Afiq", 30, 20).unwrap()],
            )
        };

        let overflow = build(Money::from_cents(u64::MAX), Money::from_units(1));
        assert!(matches!(overflow, Err(Error::Validation { ref field, .. }) if *field == "price"));
        assert!(build(MAX_RESERVATION_AMOUNT, Money::from_cents(1)).is_err());
        assert!(build(MAX_RESERVATION_AMOUNT, Money::ZERO).is_ok());
    }

    #[test]
    fn test_reservation_json() {
        let json = serde_json::to_value(sample("RB00000A", 100_000)).unwrap();
        assert_eq!(json["reference"], "RB00000A");
        assert_eq!(json["destination"], "JAKARTA");
        assert_eq!(json["departure"], "8.00AM");
        assert_eq!(json["total_price"], "1000.00");
        assert_eq!(json["passengers"][0]["seat"], 20);
        assert_eq!(json["passengers"][0]["travel_class"], "Economy");
    }
}
