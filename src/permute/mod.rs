//! Lexicographic permutation stepping
//!
//! The classic algorithm over a bidirectional range: find the longest
//! non-increasing suffix, swap the pivot just before it with the
//! smallest suffix element exceeding it, reverse the suffix. Stepping off
//! the last (resp. first) permutation returns `false` and resets the
//! range to the first (resp. last) one.

use crate::compare::{flip, natural_less};
use crate::cursor::{Bidirectional, Writable};
use crate::modify::reverse;
use crate::swap_at;

/// Advance the range to its next permutation under `less`; `false` (and a
/// reset to the sorted order) when it was already the last.
pub fn next_permutation_by<C, F>(first: C, last: C, mut less: F) -> bool
where
    C: Writable + Bidirectional,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    if first == last {
        return false;
    }
    let mut i = last.prev();
    if i == first {
        return false;
    }
    loop {
        let suffix = i.clone();
        i = i.prev();
        if less(&i.read(), &suffix.read()) {
            // `i` is the pivot; find the rightmost suffix element above it.
            let mut j = last.prev();
            while !less(&i.read(), &j.read()) {
                j = j.prev();
            }
            swap_at(&i, &j);
            reverse(suffix, last);
            return true;
        }
        if i == first {
            // Already the last permutation: reset to the first.
            reverse(first, last);
            return false;
        }
    }
}

/// [`next_permutation_by`] under the natural order.
pub fn next_permutation<C>(first: C, last: C) -> bool
where
    C: Writable + Bidirectional,
    C::Item: Ord,
{
    next_permutation_by(first, last, natural_less)
}

/// Step the range back to its previous permutation under `less`; `false`
/// (and a reset to the last permutation) when it was already the first.
pub fn prev_permutation_by<C, F>(first: C, last: C, less: F) -> bool
where
    C: Writable + Bidirectional,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    // The previous permutation is the next one under the flipped order.
    next_permutation_by(first, last, flip(less))
}

/// [`prev_permutation_by`] under the natural order.
pub fn prev_permutation<C>(first: C, last: C) -> bool
where
    C: Writable + Bidirectional,
    C::Item: Ord,
{
    prev_permutation_by(first, last, natural_less)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::Slots;

    #[test]
    fn steps_in_lexicographic_order() {
        let s = Slots::from(vec![1, 2, 3]);
        assert!(next_permutation(s.begin(), s.end()));
        assert_eq!(s.snapshot(), vec![1, 3, 2]);
        assert!(next_permutation(s.begin(), s.end()));
        assert_eq!(s.snapshot(), vec![2, 1, 3]);
    }

    #[test]
    fn wraps_at_the_last_permutation() {
        let s = Slots::from(vec![3, 2, 1]);
        assert!(!next_permutation(s.begin(), s.end()));
        assert_eq!(s.snapshot(), vec![1, 2, 3]);
    }

    #[test]
    fn prev_is_the_inverse_of_next() {
        let s = Slots::from(vec![2, 1, 3]);
        assert!(prev_permutation(s.begin(), s.end()));
        assert_eq!(s.snapshot(), vec![1, 3, 2]);
        assert!(prev_permutation(s.begin(), s.end()));
        assert_eq!(s.snapshot(), vec![1, 2, 3]);
        assert!(!prev_permutation(s.begin(), s.end()));
        assert_eq!(s.snapshot(), vec![3, 2, 1]);
    }

    #[test]
    fn trivial_ranges_have_no_next() {
        let empty = Slots::from(Vec::<i32>::new());
        assert!(!next_permutation(empty.begin(), empty.end()));
        let one = Slots::from(vec![7]);
        assert!(!next_permutation(one.begin(), one.end()));
    }
}
