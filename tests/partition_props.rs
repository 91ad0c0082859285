//! Property tests for the partitioning family

use proptest::prelude::*;
use strider::partition::{
    is_partitioned, partition, partition_point, stable_partition, stable_partition_forward,
};
use strider::seq::{ForwardOnly, Slots};

mod test_helpers;
use test_helpers::*;

proptest! {
    #[test]
    fn partition_splits_the_multiset(values in proptest::collection::vec(-50i32..50, 0..64)) {
        let s = slots_of(&values);
        let point = partition(s.begin(), s.end(), is_even);
        let after = s.snapshot();
        prop_assert!(same_multiset(&values, &after));
        prop_assert!(is_partitioned(s.begin(), s.end(), is_even));

        let expected_true = values.iter().filter(|x| is_even(x)).count();
        prop_assert_eq!(point, s.cursor_at(expected_true));
    }

    #[test]
    fn stable_partition_preserves_relative_order(
        keys in proptest::collection::vec(-50i32..50, 0..64),
    ) {
        let tagged = tag_all(&keys);
        let s = Slots::from(tagged.clone());
        stable_partition(s.begin(), s.end(), even_key);
        let after = s.snapshot();

        // Same split as the unstable partition, but each side keeps the
        // original tag order.
        let expected: Vec<_> = tagged
            .iter()
            .filter(|t| even_key(t))
            .chain(tagged.iter().filter(|t| !even_key(t)))
            .copied()
            .collect();
        prop_assert_eq!(after, expected);
    }

    #[test]
    fn forward_variant_agrees_with_bidirectional(
        keys in proptest::collection::vec(-50i32..50, 0..48),
    ) {
        let a = Slots::from(tag_all(&keys));
        let b = Slots::from(tag_all(&keys));
        stable_partition(a.begin(), a.end(), even_key);
        stable_partition_forward(ForwardOnly(b.begin()), ForwardOnly(b.end()), even_key);
        prop_assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn partition_point_finds_the_partition_boundary(
        values in proptest::collection::vec(-50i32..50, 0..64),
    ) {
        let s = slots_of(&values);
        let point = partition(s.begin(), s.end(), is_even);
        let found = partition_point(s.begin(), s.end(), is_even);
        prop_assert_eq!(point, found);
    }
}
