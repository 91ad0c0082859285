//! Query and modify families, including the randomized algorithms

use rand::rngs::StdRng;
use rand::SeedableRng;
use strider::cursor::{retreat, Readable};
use strider::modify::{
    copy_if, copy_n, fill_n, generate_n, remove_copy_if, replace, sample, shuffle, swap_ranges,
    transform, transform_binary,
};
use strider::partition::is_partitioned;
use strider::query::{adjacent_find, all_of, any_of, equal, for_each_n, mismatch, none_of, search};
use strider::seq::{BidirOnly, ForwardOnly, RangeOutput, Slots};

mod test_helpers;
use test_helpers::*;

#[test]
fn mismatch_reports_both_positions() {
    let a = Slots::from(vec![1, 2, 3, 4]);
    let b = Slots::from(vec![1, 2, 9, 4]);
    let (ma, mb) = mismatch(a.begin(), a.end(), b.begin());
    assert_eq!(ma, a.cursor_at(2));
    assert_eq!(mb, b.cursor_at(2));
    assert!(!equal(a.begin(), a.end(), b.begin()));
}

#[test]
fn quantifiers_on_the_empty_range() {
    let e = Slots::from(Vec::<i32>::new());
    assert!(all_of(e.begin(), e.end(), is_even));
    assert!(!any_of(e.begin(), e.end(), is_even));
    assert!(none_of(e.begin(), e.end(), is_even));
}

#[test]
fn adjacent_find_spots_the_first_pair() {
    let s = Slots::from(vec![1, 2, 2, 3, 3]);
    assert_eq!(adjacent_find(s.begin(), s.end()), s.cursor_at(1));
}

#[test]
fn search_misses_cleanly() {
    let hay = Slots::from(vec![1, 2, 3]);
    let needle = Slots::from(vec![2, 4]);
    assert_eq!(
        search(hay.begin(), hay.end(), needle.begin(), needle.end()),
        hay.end()
    );
}

#[test]
fn copying_into_bounded_and_unbounded_sinks() {
    let src = Slots::from(vec![1, 2, 3, 4, 5, 6]);
    let mut evens = Vec::new();
    copy_if(src.begin(), src.end(), &mut evens, is_even).unwrap();
    assert_eq!(evens, vec![2, 4, 6]);

    let dst = Slots::from(vec![0; 4]);
    let mut out = RangeOutput::new(dst.begin(), dst.end());
    let rest = copy_n(src.begin(), 4, &mut out).unwrap();
    assert_eq!(rest, src.cursor_at(4));
    assert_eq!(dst.snapshot(), vec![1, 2, 3, 4]);
}

#[test]
fn transform_maps_and_zips() {
    let s = Slots::from(vec![1, 2, 3]);
    let mut doubled = Vec::new();
    transform(s.begin(), s.end(), &mut doubled, |x| x * 2).unwrap();
    assert_eq!(doubled, vec![2, 4, 6]);

    let t = Slots::from(vec![10, 20, 30]);
    let mut sums = Vec::new();
    transform_binary(s.begin(), s.end(), t.begin(), &mut sums, |a, b| a + b).unwrap();
    assert_eq!(sums, vec![11, 22, 33]);
}

#[test]
fn fill_and_generate_count_variants() {
    let s = Slots::from(vec![0; 5]);
    let past = fill_n(s.begin(), 3, &7);
    assert_eq!(past, s.cursor_at(3));
    let mut n = 0;
    generate_n(past, 2, || {
        n += 1;
        n * 10
    });
    assert_eq!(s.snapshot(), vec![7, 7, 7, 10, 20]);
}

#[test]
fn shuffle_permutes_reproducibly() {
    let a = Slots::from((0..32).collect::<Vec<i32>>());
    let b = Slots::from((0..32).collect::<Vec<i32>>());
    let mut rng_a = StdRng::seed_from_u64(42);
    let mut rng_b = StdRng::seed_from_u64(42);
    shuffle(a.begin(), a.end(), &mut rng_a);
    shuffle(b.begin(), b.end(), &mut rng_b);
    // Same seed, same permutation; still the same multiset.
    assert_eq!(a.snapshot(), b.snapshot());
    assert!(same_multiset(&a.snapshot(), &(0..32).collect::<Vec<i32>>()));
    assert_ne!(a.snapshot(), (0..32).collect::<Vec<i32>>());
}

#[test]
fn sample_selection_arm_preserves_source_order() {
    let src = Slots::from((0..50).collect::<Vec<i32>>());
    let mut rng = StdRng::seed_from_u64(7);
    let mut picked = Vec::new();
    let n = sample(src.begin(), src.end(), 10, &mut picked, &mut rng).unwrap();
    assert_eq!(n, 10);
    assert_eq!(picked.len(), 10);
    // Selection sampling emits in source order.
    assert!(picked.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn sample_reservoir_arm_handles_forward_only_sources() {
    let src = Slots::from((0..50).collect::<Vec<i32>>());
    let mut rng = StdRng::seed_from_u64(7);
    let mut picked = Vec::new();
    let n = sample(
        ForwardOnly(src.begin()),
        ForwardOnly(src.end()),
        10,
        &mut picked,
        &mut rng,
    )
    .unwrap();
    assert_eq!(n, 10);
    let mut dedup = picked.clone();
    dedup.sort_unstable();
    dedup.dedup();
    assert_eq!(dedup.len(), 10, "sampling is without replacement");
}

#[test]
fn sample_larger_than_source_returns_everything() {
    let src = Slots::from(vec![1, 2, 3]);
    let mut rng = StdRng::seed_from_u64(0);
    let mut picked = Vec::new();
    let n = sample(src.begin(), src.end(), 10, &mut picked, &mut rng).unwrap();
    assert_eq!(n, 3);
    assert_eq!(picked, vec![1, 2, 3]);
}

#[test]
fn replace_and_remove_copy() {
    let s = Slots::from(vec![1, 0, 2, 0, 3]);
    replace(s.begin(), s.end(), &0, &9);
    assert_eq!(s.snapshot(), vec![1, 9, 2, 9, 3]);

    let mut kept = Vec::new();
    remove_copy_if(s.begin(), s.end(), &mut kept, |x| *x == 9).unwrap();
    assert_eq!(kept, vec![1, 2, 3]);
    assert_eq!(s.snapshot(), vec![1, 9, 2, 9, 3]);
}

#[test]
fn swap_ranges_exchanges_across_backings() {
    let a = Slots::from(vec![1, 2, 3, 4]);
    let b = Slots::from(vec![9, 8, 7]);
    let past = swap_ranges(a.begin(), a.cursor_at(3), b.begin());
    assert_eq!(past, b.end());
    assert_eq!(a.snapshot(), vec![9, 8, 7, 4]);
    assert_eq!(b.snapshot(), vec![1, 2, 3]);
}

#[test]
fn for_each_n_stops_at_the_count() {
    let s = Slots::from(vec![10, 20, 30, 40]);
    let mut sum = 0;
    let past = for_each_n(s.begin(), 2, |x| sum += x);
    assert_eq!(sum, 30);
    assert_eq!(past, s.cursor_at(2));
}

#[test]
fn retreat_walks_prev_without_a_fast_path() {
    let s = Slots::from(vec![1, 2, 3, 4]);
    let end = BidirOnly(s.end());
    assert_eq!(retreat(end, 3).read(), 2);
}

#[test]
fn partitioned_probe_after_manual_layout() {
    let s = Slots::from(vec![2, 4, 6, 1, 3]);
    assert!(is_partitioned(s.begin(), s.end(), is_even));
    assert!(!is_partitioned(s.begin(), s.end(), |x: &i32| *x < 3));
}
