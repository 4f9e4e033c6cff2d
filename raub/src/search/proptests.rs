//! Property-based tests for reference lookups.

use super::{binary_search, linear_search, SearchAlgorithm};
use crate::sort::sorted_by_reference;
use crate::store::proptests::reservation_strategy;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Linear and binary search agree on every present reference
    #[test]
    fn searches_agree_on_hits(records in prop::collection::vec(reservation_strategy(), 1..16)) {
        let sorted = sorted_by_reference(&records);
        for record in &records {
            let reference = record.reference().as_str();
            let linear = linear_search(&records, reference).map(|i| records[i].reference());
            let binary = binary_search(&sorted, reference).map(|i| sorted[i].reference());
            prop_assert_eq!(linear, binary);
        }
    }

    // Linear and binary search agree on arbitrary queries
    #[test]
    fn searches_agree_on_queries(
        records in prop::collection::vec(reservation_strategy(), 0..16),
        query in "RB[0-9A-Z]{6}"
    ) {
        let linear = SearchAlgorithm::Linear.find(&records, &query).is_some();
        let binary = SearchAlgorithm::Binary.find(&records, &query).is_some();
        prop_assert_eq!(linear, binary);
    }
}
