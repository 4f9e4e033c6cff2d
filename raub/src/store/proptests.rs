//! Property-based tests for the reservation text format.

use super::codec::{decode, decode_strict, encode};
use crate::catalog::{DepartureSlot, Destination};
use crate::money::Money;
use crate::passenger::Passenger;
use crate::reservation::Reservation;
use proptest::prelude::*;

// Names that survive trimming, including the characters that need escaping
fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ,\\\\.'-]{0,15}[A-Za-z]"
}

// Strategy for generating valid reservations with distinct seats
pub(crate) fn reservation_strategy() -> impl Strategy<Value = Reservation> {
    (
        "RB[0-9A-Z]{6}",
        0..Destination::ALL.len(),
        0..DepartureSlot::ALL.len(),
        0u64..10_000_000,
        0u64..1_000_000,
        prop::sample::subsequence((1..=81).collect::<Vec<i32>>(), 1..=4),
        prop::collection::vec((name_strategy(), 0i64..100), 4),
    )
        .prop_map(|(reference, dest, slot, total, discount, seats, people)| {
            let passengers = seats
                .into_iter()
                .zip(people)
                .map(|(seat, (name, age))| Passenger::new(&name, age, seat).unwrap())
                .collect();
            Reservation::from_parts(
                reference.parse().unwrap(),
                Destination::ALL[dest],
                DepartureSlot::ALL[slot],
                Money::from_cents(total),
                Money::from_cents(discount),
                passengers,
            )
            .unwrap()
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Decoding an encoded sequence yields the same sequence
    #[test]
    fn encode_decode_preserves_records(records in prop::collection::vec(reservation_strategy(), 0..8)) {
        let text = encode(&records);
        prop_assert_eq!(decode_strict(&text).unwrap(), records.clone());
        prop_assert_eq!(decode(&text), records);
    }

    // Encoding is stable across a decode
    #[test]
    fn encode_is_stable(records in prop::collection::vec(reservation_strategy(), 0..8)) {
        let text = encode(&records);
        prop_assert_eq!(encode(&decode(&text)), text);
    }

    // Lenient decoding never panics on arbitrary input
    #[test]
    fn decode_never_panics(text in "(REF:|DEST:|PRICE:|PASSENGER:|END_RESERVATION|[A-Z0-9,.:\\\\ \n]){0,64}") {
        let lenient = decode(&text);
        if let Ok(strict) = decode_strict(&text) {
            prop_assert_eq!(strict, lenient);
        }
    }
}
