//! Property-based tests for the price sorts.

use super::{bubble_sort_by_key, merge_sort_by_key, SortAlgorithm};
use crate::store::proptests::reservation_strategy;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Both sorts produce the same order as the standard stable sort
    #[test]
    fn sorts_match_stable_sort(data in prop::collection::vec((0u8..20, any::<u16>()), 0..64)) {
        let mut expected = data.clone();
        expected.sort_by_key(|p| p.0);

        let mut bubbled = data.clone();
        bubble_sort_by_key(&mut bubbled, |p| p.0);
        prop_assert_eq!(&bubbled, &expected);

        let mut merged = data;
        merge_sort_by_key(&mut merged, |p| p.0);
        prop_assert_eq!(&merged, &expected);
    }

    // Sorting reservations by price agrees between algorithms and is ascending
    #[test]
    fn price_sorts_agree(records in prop::collection::vec(reservation_strategy(), 0..16)) {
        let bubbled = SortAlgorithm::Bubble.sort_by_price(&records);
        let merged = SortAlgorithm::Merge.sort_by_price(&records);
        prop_assert_eq!(&bubbled, &merged);
        prop_assert_eq!(bubbled.len(), records.len());
        prop_assert!(bubbled.windows(2).all(|w| w[0].total_price() <= w[1].total_price()));
    }
}
