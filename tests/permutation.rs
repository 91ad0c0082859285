//! Permutation stepping round-trips

use std::collections::HashSet;

use strider::permute::{next_permutation, prev_permutation};
use strider::seq::Slots;
use test_case::test_case;

mod test_helpers;
use test_helpers::slots_of;

fn factorial(n: usize) -> usize {
    (1..=n).product()
}

#[test_case(&[1]; "single element")]
#[test_case(&[1, 2, 3]; "three distinct")]
#[test_case(&[1, 2, 3, 4]; "four distinct")]
#[test_case(&[1, 2, 3, 4, 5]; "five distinct")]
fn next_permutation_visits_n_factorial_orders(start: &[i32]) {
    let s = slots_of(start);
    let mut seen = HashSet::new();
    seen.insert(s.snapshot());
    while next_permutation(s.begin(), s.end()) {
        assert!(seen.insert(s.snapshot()), "permutation repeated");
    }
    assert_eq!(seen.len(), factorial(start.len()));
    // The failed step reset the range to sorted order.
    assert_eq!(s.snapshot(), start.to_vec());
}

#[test]
fn duplicates_shrink_the_orbit() {
    // 3 elements with one duplicate pair: 3!/2! = 3 distinct orders.
    let s = Slots::from(vec![1, 1, 2]);
    let mut count = 1;
    while next_permutation(s.begin(), s.end()) {
        count += 1;
    }
    assert_eq!(count, 3);
}

#[test]
fn descending_input_wraps_to_ascending() {
    let s = Slots::from(vec![3, 2, 1]);
    assert!(!next_permutation(s.begin(), s.end()));
    assert_eq!(s.snapshot(), vec![1, 2, 3]);
}

#[test]
fn prev_permutation_retraces_next() {
    let s = Slots::from(vec![1, 3, 4, 2]);
    let before = s.snapshot();
    assert!(next_permutation(s.begin(), s.end()));
    assert!(prev_permutation(s.begin(), s.end()));
    assert_eq!(s.snapshot(), before);
}

#[test]
fn full_cycle_returns_to_start() {
    let s = Slots::from(vec![2, 1, 3]);
    let start = s.snapshot();
    let mut steps = 0;
    loop {
        let wrapped = !next_permutation(s.begin(), s.end());
        steps += 1;
        if wrapped {
            break;
        }
        assert!(steps <= 6, "cycle longer than 3! ");
    }
    // Continue from the reset until we meet the starting order again.
    while s.snapshot() != start {
        assert!(next_permutation(s.begin(), s.end()));
    }
    assert_eq!(s.snapshot(), start);
}
