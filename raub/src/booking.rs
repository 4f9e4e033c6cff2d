//! Booking flows that assemble reservations.
//!
//! There are two flows: [`ManualBooking`] prices each passenger from the
//! destination fares and accepts a single coupon, while [`PackageBooking`]
//! sells a fixed 2 adults / 2 kids bundle at a package discount.
//!
//! Each step validates its input and returns a recoverable [`Error`] without
//! changing the booking when the input is rejected, so the caller can ask for
//! the value again and retry the same step. Nothing reaches the store until
//! [`finish`](ManualBooking::finish) succeeds.
//!
//! # Examples
//!
//! ```
//! use raub::{CouponTable, DepartureSlot, Destination, ManualBooking, Money, ReservationStore, TicketCount};
//! use rand::SeedableRng;
//!
//! let mut store = ReservationStore::new();
//! let mut booking = ManualBooking::new(Destination::Jakarta, TicketCount::try_from(1).unwrap());
//! booking.add_passenger("Afiq", 30, 20).unwrap();
//! booking.set_departure(DepartureSlot::A);
//! booking.apply_coupon(&CouponTable::default(), "AEROAMEEN").unwrap();
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let reservation = booking.finish(&mut rng, &store).unwrap();
//! assert_eq!(reservation.total_price(), Money::from_units(850));
//! store.add(reservation);
//! ```

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use rand::Rng;

use crate::catalog::{DepartureSlot, Destination};
use crate::coupon::CouponTable;
use crate::error::{Error, Result};
use crate::money::{Money, Percent};
use crate::package::{Package, PACKAGE_ADULTS, PACKAGE_KIDS};
use crate::passenger::{AgeGroup, Passenger};
use crate::reservation::{ReferenceNumber, Reservation, MAX_PASSENGERS};
use crate::store::ReservationStore;

/// Number of tickets on a manual reservation (1-4).
///
/// # Examples
///
/// ```
/// use raub::TicketCount;
///
/// assert_eq!(TicketCount::try_from(4).unwrap().value(), 4);
/// assert!(TicketCount::try_from(0).is_err());
/// assert!(TicketCount::try_from(5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketCount(usize);

impl TicketCount {
    /// Returns the number of tickets.
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for TicketCount {
    type Error = Error;

    fn try_from(count: i64) -> Result<Self> {
        usize::try_from(count)
            .ok()
            .filter(|n| (1..=MAX_PASSENGERS).contains(n))
            .map(Self)
            .ok_or(Error::InvalidTicketCount { count })
    }
}

/// Passengers entered so far, with seat uniqueness enforced.
#[derive(Debug, Clone, Default)]
struct PassengerList {
    passengers: Vec<Passenger>,
}

impl PassengerList {
    fn validate(&self, name: &str, age: i64, seat: i32) -> Result<Passenger> {
        let passenger = Passenger::new(name, age, seat)?;
        if self.passengers.iter().any(|p| p.seat() == passenger.seat()) {
            return Err(Error::SeatTaken {
                seat: passenger.seat().value(),
            });
        }
        Ok(passenger)
    }

    fn count(&self, group: AgeGroup) -> usize {
        self.passengers
            .iter()
            .filter(|p| p.age_group() == group)
            .count()
    }

    fn taken_seats(&self) -> Vec<u8> {
        self.passengers.iter().map(|p| p.seat().value()).collect()
    }
}

/// Generates a reference number not already used in `existing`.
fn fresh_reference<R: Rng + ?Sized>(rng: &mut R, existing: &ReservationStore) -> ReferenceNumber {
    loop {
        let reference = ReferenceNumber::generate(rng);
        if !existing.contains_reference(reference.as_str()) {
            return reference;
        }
        log::debug!("Reference {reference} already in use, generating another");
    }
}

/// A manual reservation in progress.
#[derive(Debug, Clone)]
pub struct ManualBooking {
    destination: Destination,
    tickets: TicketCount,
    passengers: PassengerList,
    departure: Option<DepartureSlot>,
    coupon: Option<Percent>,
}

impl ManualBooking {
    /// Starts a manual booking for `tickets` passengers to `destination`.
    #[must_use]
    pub fn new(destination: Destination, tickets: TicketCount) -> Self {
        Self {
            destination,
            tickets,
            passengers: PassengerList::default(),
            departure: None,
            coupon: None,
        }
    }

    /// Returns the destination.
    #[must_use]
    pub const fn destination(&self) -> Destination {
        self.destination
    }

    /// Returns the passengers entered so far.
    #[must_use]
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers.passengers
    }

    /// Returns the seats already chosen on this booking.
    #[must_use]
    pub fn taken_seats(&self) -> Vec<u8> {
        self.passengers.taken_seats()
    }

    /// Returns how many passengers are still to be entered.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tickets.value() - self.passengers.passengers.len()
    }

    /// Validates and adds the next passenger.
    ///
    /// # Errors
    ///
    /// Returns a recoverable error if the name, age or seat is invalid or the
    /// seat is already taken on this booking, and
    /// [`Error::PassengersComplete`] once every ticket has a passenger.
    pub fn add_passenger(&mut self, name: &str, age: i64, seat: i32) -> Result<&Passenger> {
        if self.remaining() == 0 {
            return Err(Error::PassengersComplete {
                expected: self.tickets.value(),
            });
        }
        let passenger = self.passengers.validate(name, age, seat)?;
        self.passengers.passengers.push(passenger);
        Ok(&self.passengers.passengers[self.passengers.passengers.len() - 1])
    }

    /// Chooses the departure slot.
    pub fn set_departure(&mut self, slot: DepartureSlot) {
        self.departure = Some(slot);
    }

    /// Sum of the ticket prices before any coupon.
    ///
    /// Each passenger pays the adult or kid fare, plus the business
    /// surcharge for seats 1-15.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        let fare = self.destination.fare();
        self.passengers()
            .iter()
            .map(|p| fare.price_for(p.age_group(), p.travel_class()))
            .sum()
    }

    /// Applies a coupon to the reservation and returns the discount it gives.
    ///
    /// A coupon may be applied once, after every passenger has been entered.
    /// An unknown code leaves the booking without a discount.
    ///
    /// # Errors
    ///
    /// - [`Error::CouponAlreadyApplied`] if a coupon was already accepted
    /// - [`Error::UnknownCoupon`] if the code is not in `table`
    /// - [`Error::Incomplete`] if passengers are still missing
    pub fn apply_coupon(&mut self, table: &CouponTable, code: &str) -> Result<Money> {
        if self.coupon.is_some() {
            return Err(Error::CouponAlreadyApplied);
        }
        if self.remaining() > 0 {
            return Err(Error::Incomplete {
                missing: format!("{} passenger(s)", self.remaining()),
            });
        }
        let percent = table.lookup(code).ok_or_else(|| Error::UnknownCoupon {
            code: code.to_string(),
        })?;
        self.coupon = Some(percent);
        log::debug!("Coupon {code} applied: {percent} off");
        Ok(self.discount())
    }

    /// Returns the coupon discount, zero if none was applied.
    #[must_use]
    pub fn discount(&self) -> Money {
        self.coupon
            .map_or(Money::ZERO, |percent| self.subtotal().percent_of(percent))
    }

    /// Returns the price to be charged.
    #[must_use]
    pub fn total(&self) -> Money {
        self.subtotal().saturating_sub(self.discount())
    }

    /// Completes the booking and produces the reservation.
    ///
    /// The reference number is regenerated if it collides with one already
    /// in `existing`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Incomplete`] if passengers or the departure slot are
    /// missing.
    pub fn finish<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        existing: &ReservationStore,
    ) -> Result<Reservation> {
        if self.remaining() > 0 {
            return Err(Error::Incomplete {
                missing: format!("{} passenger(s)", self.remaining()),
            });
        }
        let departure = self.departure.ok_or_else(|| Error::Incomplete {
            missing: "departure time".into(),
        })?;

        let reservation = Reservation::from_parts(
            fresh_reference(rng, existing),
            self.destination,
            departure,
            self.total(),
            self.discount(),
            self.passengers.passengers.clone(),
        )?;
        log::debug!(
            "Manual reservation {} to {} completed for {}",
            reservation.reference(),
            reservation.destination(),
            reservation.total_price()
        );
        Ok(reservation)
    }
}

/// A package reservation in progress.
#[derive(Debug, Clone)]
pub struct PackageBooking {
    package: Package,
    passengers: PassengerList,
    departure: Option<DepartureSlot>,
}

impl PackageBooking {
    /// Starts booking `package`.
    #[must_use]
    pub fn new(package: Package) -> Self {
        Self {
            package,
            passengers: PassengerList::default(),
            departure: None,
        }
    }

    /// Returns the package being booked.
    #[must_use]
    pub const fn package(&self) -> Package {
        self.package
    }

    /// Returns the passengers entered so far.
    #[must_use]
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers.passengers
    }

    /// Returns the seats already chosen on this booking.
    #[must_use]
    pub fn taken_seats(&self) -> Vec<u8> {
        self.passengers.taken_seats()
    }

    /// Returns how many passengers are still to be entered.
    #[must_use]
    pub fn remaining(&self) -> usize {
        PACKAGE_ADULTS + PACKAGE_KIDS - self.passengers.passengers.len()
    }

    /// Validates and adds the next passenger.
    ///
    /// On top of the checks every booking makes, a passenger whose age group
    /// is already full (two adults or two kids) is rejected.
    ///
    /// # Errors
    ///
    /// Returns a recoverable error for invalid input, a taken seat or a
    /// [`Error::PackageMix`] violation, and [`Error::PassengersComplete`]
    /// once all four passengers are in.
    pub fn add_passenger(&mut self, name: &str, age: i64, seat: i32) -> Result<&Passenger> {
        if self.remaining() == 0 {
            return Err(Error::PassengersComplete {
                expected: PACKAGE_ADULTS + PACKAGE_KIDS,
            });
        }
        let passenger = self.passengers.validate(name, age, seat)?;

        let adults = self.passengers.count(AgeGroup::Adult);
        let kids = self.passengers.count(AgeGroup::Kid);
        let full = match passenger.age_group() {
            AgeGroup::Adult => adults >= PACKAGE_ADULTS,
            AgeGroup::Kid => kids >= PACKAGE_KIDS,
        };
        if full {
            return Err(Error::PackageMix { adults, kids });
        }

        self.passengers.passengers.push(passenger);
        Ok(&self.passengers.passengers[self.passengers.passengers.len() - 1])
    }

    /// Chooses the departure slot.
    pub fn set_departure(&mut self, slot: DepartureSlot) {
        self.departure = Some(slot);
    }

    /// Completes the booking and produces the reservation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Incomplete`] if passengers or the departure slot are
    /// missing.
    pub fn finish<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        existing: &ReservationStore,
    ) -> Result<Reservation> {
        if self.remaining() > 0 {
            return Err(Error::Incomplete {
                missing: format!("{} passenger(s)", self.remaining()),
            });
        }
        let departure = self.departure.ok_or_else(|| Error::Incomplete {
            missing: "departure time".into(),
        })?;

        let reservation = Reservation::from_parts(
            fresh_reference(rng, existing),
            self.package.destination(),
            departure,
            self.package.final_price(),
            self.package.discount(),
            self.passengers.passengers.clone(),
        )?;
        log::debug!(
            "Package {} reservation {} completed for {}",
            self.package,
            reservation.reference(),
            reservation.total_price()
        );
        Ok(reservation)
    }
}
