//! Property-based tests for the booking flows.

use super::{ManualBooking, PackageBooking, TicketCount};
use crate::catalog::{DepartureSlot, Destination};
use crate::coupon::CouponTable;
use crate::money::Money;
use crate::package::{Package, PACKAGE_ADULTS, PACKAGE_KIDS};
use crate::passenger::AgeGroup;
use crate::store::ReservationStore;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn destination_strategy() -> impl Strategy<Value = Destination> {
    prop::sample::select(Destination::ALL.to_vec())
}

fn package_strategy() -> impl Strategy<Value = Package> {
    prop::sample::select(Package::ALL.to_vec())
}

// 1-4 passengers with distinct seats.
fn party_strategy() -> impl Strategy<Value = Vec<(i64, i32)>> {
    (1usize..=4).prop_flat_map(|n| {
        (
            prop::collection::vec(0i64..100, n),
            prop::sample::subsequence((1..=81).collect::<Vec<i32>>(), n),
        )
            .prop_map(|(ages, seats)| ages.into_iter().zip(seats).collect())
    })
}

fn coupon_strategy() -> impl Strategy<Value = Option<&'static str>> {
    prop::option::of(prop::sample::select(
        CouponTable::default().iter().map(|c| c.code).collect::<Vec<_>>(),
    ))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Charged price plus discount always equals the ticket subtotal
    #[test]
    fn manual_price_decomposes(
        destination in destination_strategy(),
        party in party_strategy(),
        coupon in coupon_strategy(),
        seed in any::<u64>(),
    ) {
        let tickets = TicketCount::try_from(party.len() as i64).unwrap();
        let mut booking = ManualBooking::new(destination, tickets);
        for (age, seat) in &party {
            booking.add_passenger("Prop", *age, *seat).unwrap();
        }
        booking.set_departure(DepartureSlot::A);
        if let Some(code) = coupon {
            booking.apply_coupon(&CouponTable::default(), code).unwrap();
        }

        let subtotal = booking.subtotal();
        let reservation = booking
            .finish(&mut StdRng::seed_from_u64(seed), &ReservationStore::new())
            .unwrap();

        prop_assert!(reservation.discount_applied() <= subtotal);
        prop_assert_eq!(reservation.pre_discount_price(), subtotal);
        prop_assert_eq!(reservation.num_adults() + reservation.num_kids(), party.len());
        if coupon.is_none() {
            prop_assert_eq!(reservation.discount_applied(), Money::ZERO);
        }
    }

    // Rejected passengers never change the booking
    #[test]
    fn rejected_seat_leaves_booking_unchanged(
        destination in destination_strategy(),
        age in 0i64..100,
        seat in 1i32..=81,
    ) {
        let mut booking = ManualBooking::new(destination, TicketCount::try_from(2).unwrap());
        booking.add_passenger("First", age, seat).unwrap();
        let before = booking.subtotal();

        prop_assert!(booking.add_passenger("Second", age, seat).is_err());
        prop_assert_eq!(booking.passengers().len(), 1);
        prop_assert_eq!(booking.subtotal(), before);
        prop_assert_eq!(booking.remaining(), 1);
    }

    // A package never holds more adults or kids than its fixed mix
    #[test]
    fn package_mix_never_exceeded(
        package in package_strategy(),
        ages in prop::collection::vec(0i64..80, 1..12),
    ) {
        let mut booking = PackageBooking::new(package);
        let mut seat = 1;
        for age in ages {
            if booking.remaining() == 0 {
                break;
            }
            let _ = booking.add_passenger("Prop", age, seat);
            seat += 1;
        }

        let adults = booking
            .passengers()
            .iter()
            .filter(|p| p.age_group() == AgeGroup::Adult)
            .count();
        prop_assert!(adults <= PACKAGE_ADULTS);
        prop_assert!(booking.passengers().len() - adults <= PACKAGE_KIDS);
    }

    // Finished packages are always charged the package's fixed price
    #[test]
    fn package_price_is_fixed(package in package_strategy(), seed in any::<u64>()) {
        let mut booking = PackageBooking::new(package);
        for (age, seat) in [(40, 50), (38, 51), (9, 52), (4, 53)] {
            booking.add_passenger("Prop", age, seat).unwrap();
        }
        booking.set_departure(DepartureSlot::D);

        let reservation = booking
            .finish(&mut StdRng::seed_from_u64(seed), &ReservationStore::new())
            .unwrap();
        prop_assert_eq!(reservation.destination(), package.destination());
        prop_assert_eq!(reservation.total_price(), package.final_price());
        prop_assert_eq!(reservation.discount_applied(), package.discount());
    }
}
