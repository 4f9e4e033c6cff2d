//! Common test utilities for integration tests.
//!
//! This module provides helpers for booking reservations through the public
//! flows and for working with temporary reservation files.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
use raub::{
    CouponTable, DepartureSlot, Destination, ManualBooking, Package, PackageBooking, Reservation,
    ReservationStore, TicketCount,
};

/// Creates a deterministic random source.
#[allow(dead_code)]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a temporary directory and the reservation file path inside it.
///
/// The directory is removed when the returned `TempDir` is dropped.
#[allow(dead_code)]
pub fn temp_store_path() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reservations.txt");
    (dir, path)
}

/// Books a manual reservation and adds it to `store`.
///
/// Each passenger is given as `(name, age, seat)`.
#[allow(dead_code)]
pub fn book_manual(
    store: &mut ReservationStore,
    rng: &mut StdRng,
    destination: Destination,
    passengers: &[(&str, i64, i32)],
    departure: DepartureSlot,
    coupon: Option<&str>,
) -> Reservation {
    let tickets = TicketCount::try_from(i64::try_from(passengers.len()).unwrap()).unwrap();
    let mut booking = ManualBooking::new(destination, tickets);
    for (name, age, seat) in passengers {
        booking.add_passenger(name, *age, *seat).unwrap();
    }
    booking.set_departure(departure);
    if let Some(code) = coupon {
        booking.apply_coupon(&CouponTable::default(), code).unwrap();
    }
    let reservation = booking.finish(rng, store).unwrap();
    store.add(reservation.clone());
    reservation
}

/// Books a package for a family of two adults and two kids and adds it to `store`.
#[allow(dead_code)]
pub fn book_family_package(
    store: &mut ReservationStore,
    rng: &mut StdRng,
    package: Package,
    first_seat: i32,
) -> Reservation {
    let mut booking = PackageBooking::new(package);
    booking.add_passenger("Mother", 41, first_seat).unwrap();
    booking.add_passenger("Father", 44, first_seat + 1).unwrap();
    booking.add_passenger("Daughter", 12, first_seat + 2).unwrap();
    booking.add_passenger("Son", 7, first_seat + 3).unwrap();
    booking.set_departure(DepartureSlot::C);
    let reservation = booking.finish(rng, store).unwrap();
    store.add(reservation.clone());
    reservation
}

/// Fills `store` with `count` single-passenger bookings across every destination.
#[allow(dead_code)]
pub fn populate(store: &mut ReservationStore, rng: &mut StdRng, count: usize) {
    for i in 0..count {
        let destination = Destination::ALL[i % Destination::ALL.len()];
        let slot = DepartureSlot::ALL[i % DepartureSlot::ALL.len()];
        let seat = i32::try_from(i % 81).unwrap() + 1;
        let age = i64::try_from(i % 60).unwrap() + 1;
        book_manual(store, rng, destination, &[("Traveller", age, seat)], slot, None);
    }
}
