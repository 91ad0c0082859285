//! Unstable and stable partitioning
//!
//! [`partition`] is the one-pass unstable swap scan. [`stable_partition`]
//! preserves relative order within each side and comes in two capability
//! flavours: the bidirectional variant narrows from both ends before
//! dividing, the forward variant divides immediately. Both merge their two
//! recursively partitioned halves with a rotation, which is what keeps the
//! whole thing O(n log n) time and O(log n) recursion depth with no
//! auxiliary storage.

use tracing::trace;

use crate::cursor::{advance, distance, Bidirectional, Forward, Readable, Writable};
use crate::modify::rotate;
use crate::swap_at;

/// Whether the range is partitioned by `pred`: every element satisfying
/// `pred` appears before every element that does not.
pub fn is_partitioned<C, P>(first: C, last: C, mut pred: P) -> bool
where
    C: Readable + Forward,
    P: FnMut(&C::Item) -> bool,
{
    let boundary = crate::query::find_if_not(first, last.clone(), &mut pred);
    crate::query::none_of(boundary, last, pred)
}

/// Move every element satisfying `pred` before every element that does
/// not, in one forward pass. Unstable; O(1) extra space; returns the
/// partition point (first element not satisfying `pred`).
pub fn partition<C, P>(first: C, last: C, mut pred: P) -> C
where
    C: Writable + Forward,
    P: FnMut(&C::Item) -> bool,
{
    // Scan to the first failing element; everything before it is settled.
    let mut boundary = crate::query::find_if_not(first, last.clone(), &mut pred);
    if boundary == last {
        return boundary;
    }
    let mut it = boundary.next();
    while it != last {
        if pred(&it.read()) {
            swap_at(&boundary, &it);
            boundary = boundary.next();
        }
        it = it.next();
    }
    boundary
}

/// Partition boundary of a range assumed already partitioned by `pred`:
/// the first position whose element does not satisfy it.
///
/// Halving on `distance`, so O(log n) predicate calls; correctness needs
/// only forward movement, the claimed complexity needs random access.
pub fn partition_point<C, P>(first: C, last: C, mut pred: P) -> C
where
    C: Readable + Forward,
    P: FnMut(&C::Item) -> bool,
{
    let mut first = first;
    let mut len = distance(&first, &last);
    while len > 0 {
        let half = len / 2;
        let mid = advance(first.clone(), half);
        if pred(&mid.read()) {
            first = mid.next();
            len -= half + 1;
        } else {
            len = half;
        }
    }
    first
}

/// Stable partition over a bidirectional range. Returns the partition
/// point; relative order is preserved within each side.
///
/// Narrows from both ends first (skipping an already-true prefix and an
/// already-false suffix), then divides at the midpoint and merges the two
/// partitioned halves with a rotation. Recursion depth O(log n).
pub fn stable_partition<C, P>(first: C, last: C, mut pred: P) -> C
where
    C: Writable + Bidirectional,
    P: FnMut(&C::Item) -> bool,
{
    stable_bidir(first, last, &mut pred, 0)
}

fn stable_bidir<C, P>(first: C, last: C, pred: &mut P, depth: usize) -> C
where
    C: Writable + Bidirectional,
    P: FnMut(&C::Item) -> bool,
{
    // Skip the true-prefix.
    let mut first = first;
    while first != last && pred(&first.read()) {
        first = first.next();
    }
    if first == last {
        return first;
    }
    // Skip the false-suffix; afterwards the element before `last` is true.
    let mut last = last;
    loop {
        let back = last.prev();
        if back == first {
            // Single element, known false.
            return first;
        }
        if pred(&back.read()) {
            break;
        }
        last = back;
    }

    // Now !pred(first) and pred(last - 1).
    let n = distance(&first, &last);
    trace!(depth, width = n, "stable_partition divide");
    if n == 2 {
        let back = last.prev();
        swap_at(&first, &back);
        return back;
    }
    if n == 3 {
        let mid = first.next();
        let back = last.prev();
        if pred(&mid.read()) {
            // false true true -> true true false
            swap_at(&first, &mid);
            swap_at(&mid, &back);
            return back;
        }
        // false false true -> true false false
        swap_at(&mid, &back);
        swap_at(&first, &mid);
        return mid;
    }

    let mid = advance(first.clone(), n / 2);
    let first_false = stable_bidir(first, mid.clone(), pred, depth + 1);
    let second_false = stable_bidir(mid.clone(), last, pred, depth + 1);
    rotate(first_false, mid, second_false)
}

/// Stable partition needing only forward movement: divide-and-conquer
/// with a rotation merging each pair of partitioned halves.
pub fn stable_partition_forward<C, P>(first: C, last: C, mut pred: P) -> C
where
    C: Writable + Forward,
    P: FnMut(&C::Item) -> bool,
{
    let n = distance(&first, &last);
    stable_fwd(first, n, &mut pred)
}

fn stable_fwd<C, P>(first: C, n: isize, pred: &mut P) -> C
where
    C: Writable + Forward,
    P: FnMut(&C::Item) -> bool,
{
    if n == 0 {
        return first;
    }
    if n == 1 {
        return if pred(&first.read()) {
            first.next()
        } else {
            first
        };
    }
    let half = n / 2;
    let mid = advance(first.clone(), half);
    let first_false = stable_fwd(first, half, pred);
    let second_false = stable_fwd(mid.clone(), n - half, pred);
    rotate(first_false, mid, second_false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::{ForwardOnly, Slots};

    fn is_even(x: &i32) -> bool {
        x % 2 == 0
    }

    #[test]
    fn stable_partition_keeps_relative_order() {
        let s = Slots::from(vec![1, 2, 3, 4, 5, 6]);
        let point = stable_partition(s.begin(), s.end(), is_even);
        assert_eq!(s.snapshot(), vec![2, 4, 6, 1, 3, 5]);
        assert_eq!(point, s.cursor_at(3));
    }

    #[test]
    fn forward_variant_matches_bidirectional() {
        let a = Slots::from(vec![1, 2, 3, 4, 5, 6]);
        stable_partition_forward(ForwardOnly(a.begin()), ForwardOnly(a.end()), is_even);
        assert_eq!(a.snapshot(), vec![2, 4, 6, 1, 3, 5]);
    }

    #[test]
    fn partition_point_after_partition_is_idempotent() {
        let s = Slots::from(vec![7, 4, 9, 2, 8, 1, 6]);
        let point = partition(s.begin(), s.end(), is_even);
        let found = partition_point(s.begin(), s.end(), is_even);
        assert_eq!(point, found);
        assert!(is_partitioned(s.begin(), s.end(), is_even));
    }

    #[test]
    fn already_partitioned_input_is_untouched() {
        let s = Slots::from(vec![2, 4, 1, 3]);
        let point = stable_partition(s.begin(), s.end(), is_even);
        assert_eq!(s.snapshot(), vec![2, 4, 1, 3]);
        assert_eq!(point, s.cursor_at(2));
    }

    #[test]
    fn all_true_and_all_false_edges() {
        let t = Slots::from(vec![2, 4, 6]);
        assert_eq!(stable_partition(t.begin(), t.end(), is_even), t.end());
        let f = Slots::from(vec![1, 3, 5]);
        assert_eq!(stable_partition(f.begin(), f.end(), is_even), f.begin());
        let e = Slots::from(Vec::<i32>::new());
        assert_eq!(partition(e.begin(), e.end(), is_even), e.end());
    }
}
