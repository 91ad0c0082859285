//! Scan identities and fold round-trips

use proptest::prelude::*;
use strider::numeric::{
    accumulate, adjacent_difference, exclusive_scan, inclusive_scan, inner_product, partial_sum,
    transform_exclusive_scan, transform_inclusive_scan,
};

mod test_helpers;
use test_helpers::slots_of;

proptest! {
    #[test]
    fn exclusive_plus_last_input_equals_inclusive(
        values in proptest::collection::vec(-100i32..100, 1..48),
        init in -100i32..100,
    ) {
        let s = slots_of(&values);
        let mut inc = Vec::new();
        inclusive_scan(s.begin(), s.end(), &mut inc, init).unwrap();
        let mut exc = Vec::new();
        exclusive_scan(s.begin(), s.end(), &mut exc, init).unwrap();

        let last_in = *values.last().unwrap();
        prop_assert_eq!(exc.last().unwrap() + last_in, *inc.last().unwrap());
        // Exclusive output is the inclusive output shifted right by one.
        prop_assert_eq!(&exc[1..], &inc[..inc.len() - 1]);
        prop_assert_eq!(exc[0], init);
    }

    #[test]
    fn adjacent_difference_inverts_partial_sum(
        values in proptest::collection::vec(-100i32..100, 0..48),
    ) {
        let s = slots_of(&values);
        let mut sums = Vec::new();
        partial_sum(s.begin(), s.end(), &mut sums).unwrap();
        let ss = slots_of(&sums);
        let mut back = Vec::new();
        adjacent_difference(ss.begin(), ss.end(), &mut back).unwrap();
        prop_assert_eq!(back, values);
    }

    #[test]
    fn accumulate_is_the_last_partial_sum(
        values in proptest::collection::vec(-100i32..100, 1..48),
    ) {
        let s = slots_of(&values);
        let total = accumulate(s.begin(), s.end(), 0);
        let mut sums = Vec::new();
        partial_sum(s.begin(), s.end(), &mut sums).unwrap();
        prop_assert_eq!(total, *sums.last().unwrap());
    }

    #[test]
    fn transform_scans_match_mapping_first(
        values in proptest::collection::vec(-20i32..20, 0..32),
    ) {
        let s = slots_of(&values);
        let mut tinc = Vec::new();
        transform_inclusive_scan(s.begin(), s.end(), &mut tinc, 0, |a, b| a + b, |x| x * x)
            .unwrap();
        let mut texc = Vec::new();
        transform_exclusive_scan(s.begin(), s.end(), &mut texc, 0, |a, b| a + b, |x| x * x)
            .unwrap();

        let mapped: Vec<i32> = values.iter().map(|x| x * x).collect();
        let sm = slots_of(&mapped);
        let mut inc = Vec::new();
        inclusive_scan(sm.begin(), sm.end(), &mut inc, 0).unwrap();
        let mut exc = Vec::new();
        exclusive_scan(sm.begin(), sm.end(), &mut exc, 0).unwrap();
        prop_assert_eq!(tinc, inc);
        prop_assert_eq!(texc, exc);
    }
}

#[test]
fn inner_product_of_unit_vectors() {
    let a = slots_of(&[1, 0, 2]);
    let b = slots_of(&[3, 9, 4]);
    assert_eq!(inner_product(a.begin(), a.end(), b.begin(), 0), 11);
}
