//! Shared helpers for the integration tests

#![allow(dead_code)]

use strider::seq::Slots;

/// Payload carrying its original position, for stability checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tagged {
    pub key: i32,
    pub tag: usize,
}

/// Tag each key with its index.
pub fn tag_all(keys: &[i32]) -> Vec<Tagged> {
    keys.iter()
        .enumerate()
        .map(|(tag, &key)| Tagged { key, tag })
        .collect()
}

/// Compare tagged payloads by key only, ignoring tags.
pub fn by_key(a: &Tagged, b: &Tagged) -> bool {
    a.key < b.key
}

pub fn is_even(x: &i32) -> bool {
    x % 2 == 0
}

pub fn even_key(t: &Tagged) -> bool {
    t.key % 2 == 0
}

/// Sorted copy of a slice, as the oracle for order-statistic checks.
pub fn sorted_copy(values: &[i32]) -> Vec<i32> {
    let mut v = values.to_vec();
    v.sort_unstable();
    v
}

/// Multiset equality, order-insensitive.
pub fn same_multiset(a: &[i32], b: &[i32]) -> bool {
    sorted_copy(a) == sorted_copy(b)
}

/// Fresh contiguous backing from a slice.
pub fn slots_of(values: &[i32]) -> Slots<i32> {
    Slots::from(values.to_vec())
}
