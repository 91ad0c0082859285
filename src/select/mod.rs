//! Order statistics and the sort family
//!
//! [`nth_element`] is an iterative quickselect with restart: median-of-
//! three pivots, a three-way-aware Hoare scan, and a `maybe_sorted`
//! shortcut that bails out when an undisturbed side turns out to already
//! be in order. `sort`/`stable_sort` delegate to the host comparison
//! sorts through a cursor-read buffer; `partial_sort` keeps the k
//! smallest seen in a max-heap.

use tracing::trace;

use crate::compare::{natural_less, ordering_from_less};
use crate::cursor::{Forward, MultiPass, RandomAccess, Readable, Writable};
use crate::heap::{sort_heap_by, HeapView};
use crate::swap_at;

/// Direct comparison sort for short spans; offsets are relative to `base`.
fn insertion_sort<C, F>(base: &C, lo: isize, hi: isize, less: &mut F)
where
    C: Writable + RandomAccess,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let mut i = lo + 1;
    while i < hi {
        let mut j = i;
        while j > lo {
            let prev = base.advance_by(j - 1);
            let cur = base.advance_by(j);
            if !less(&cur.read(), &prev.read()) {
                break;
            }
            swap_at(&prev, &cur);
            j -= 1;
        }
        i += 1;
    }
}

fn sorted_span<C, F>(base: &C, lo: isize, hi: isize, less: &mut F) -> bool
where
    C: Writable + RandomAccess,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let mut i = lo + 1;
    while i < hi {
        if less(&base.advance_by(i).read(), &base.advance_by(i - 1).read()) {
            return false;
        }
        i += 1;
    }
    true
}

/// Rearrange the range so the element at `nth` is the one a full sort
/// would put there, with everything before it ordered no later and
/// everything after it no earlier.
///
/// Iterative quickselect: each round partitions around a median-of-three
/// pivot and restarts on whichever side still contains `nth`, so stack
/// depth stays constant. An out-of-range `nth` leaves the range untouched
/// (precondition violation, handled as a no-op).
pub fn nth_element_by<C, F>(first: C, nth: C, last: C, mut less: F)
where
    C: Writable + RandomAccess,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let len = first.distance_to(&last);
    let nth_i = first.distance_to(&nth);
    if nth_i < 0 || nth_i >= len {
        return;
    }
    let base = first;
    let mut lo = 0isize;
    let mut hi = len;
    loop {
        if hi - lo <= 7 {
            insertion_sort(&base, lo, hi, &mut less);
            return;
        }
        trace!(lo, hi, nth = nth_i, "nth_element restart");

        // Median-of-three over the landmarks, pre-sorting them so the
        // ends double as scan bounds.
        let mid = lo + (hi - lo) / 2;
        let a = base.advance_by(lo);
        let m = base.advance_by(mid);
        let z = base.advance_by(hi - 1);
        if less(&m.read(), &a.read()) {
            swap_at(&a, &m);
        }
        if less(&z.read(), &m.read()) {
            swap_at(&m, &z);
            if less(&m.read(), &a.read()) {
                swap_at(&a, &m);
            }
        }
        let pivot = m.read();

        // Hoare two-pointer scan, three-way aware: pointers stop on
        // elements equal to the pivot, so duplicate-heavy inputs split
        // near the middle instead of degenerating.
        let mut i = lo;
        let mut j = hi - 1;
        let mut disturbed = false;
        while i <= j {
            while less(&base.advance_by(i).read(), &pivot) {
                i += 1;
            }
            while less(&pivot, &base.advance_by(j).read()) {
                j -= 1;
            }
            if i <= j {
                let ci = base.advance_by(i);
                let cj = base.advance_by(j);
                if i != j {
                    let vi = ci.read();
                    let vj = cj.read();
                    if less(&vi, &vj) || less(&vj, &vi) {
                        disturbed = true;
                    }
                    ci.write(vj);
                    cj.write(vi);
                }
                i += 1;
                j -= 1;
            }
        }

        // [lo, j] <= pivot, [i, hi) >= pivot, (j, i) equals the pivot.
        if nth_i <= j {
            hi = j + 1;
        } else if nth_i >= i {
            lo = i;
        } else {
            // nth landed in the run of pivot-equal elements.
            return;
        }
        // A side the scan never reordered may already be sorted; one
        // linear check then lets the whole restart become a no-op.
        if !disturbed && sorted_span(&base, lo, hi, &mut less) {
            return;
        }
    }
}

/// [`nth_element_by`] under the natural order.
pub fn nth_element<C>(first: C, nth: C, last: C)
where
    C: Writable + RandomAccess,
    C::Item: Ord,
{
    nth_element_by(first, nth, last, natural_less);
}

/// Sort the range ascending under `less`. Unstable; delegates to the host
/// unstable slice sort over a cursor-read buffer.
pub fn sort_by<C, F>(first: C, last: C, mut less: F)
where
    C: Writable + RandomAccess,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let mut buf = read_out(&first, &last);
    buf.sort_unstable_by(ordering_from_less(|a: &C::Item, b: &C::Item| less(a, b)));
    write_back(&first, buf);
}

/// [`sort_by`] under the natural order.
pub fn sort<C>(first: C, last: C)
where
    C: Writable + RandomAccess,
    C::Item: Ord,
{
    sort_by(first, last, natural_less);
}

/// Sort the range ascending, preserving the relative order of equal
/// elements. Delegates to the host stable slice sort.
pub fn stable_sort_by<C, F>(first: C, last: C, mut less: F)
where
    C: Writable + RandomAccess,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let mut buf = read_out(&first, &last);
    buf.sort_by(ordering_from_less(|a: &C::Item, b: &C::Item| less(a, b)));
    write_back(&first, buf);
}

/// [`stable_sort_by`] under the natural order.
pub fn stable_sort<C>(first: C, last: C)
where
    C: Writable + RandomAccess,
    C::Item: Ord,
{
    stable_sort_by(first, last, natural_less);
}

fn read_out<C>(first: &C, last: &C) -> Vec<C::Item>
where
    C: Readable + RandomAccess,
{
    let len = first.distance_to(last).max(0) as usize;
    let mut buf = Vec::with_capacity(len);
    for i in 0..len {
        buf.push(first.advance_by(i as isize).read());
    }
    buf
}

fn write_back<C>(first: &C, buf: Vec<C::Item>)
where
    C: Writable + RandomAccess,
{
    for (i, v) in buf.into_iter().enumerate() {
        first.advance_by(i as isize).write(v);
    }
}

/// Sort the smallest `middle - first` elements of the range into
/// `[first, middle)`; the remainder ends up in unspecified order.
///
/// Max-heap over the prefix, then each element of `[middle, last)` that
/// beats the heap maximum displaces it. O(n log k), k = `middle - first`.
pub fn partial_sort_by<C, F>(first: C, middle: C, last: C, mut less: F)
where
    C: Writable + RandomAccess,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let k = first.distance_to(&middle).max(0) as usize;
    if k == 0 {
        return;
    }
    let heap = HeapView::new(first.clone(), k);
    heap.build(&mut less);
    let mut it = middle.clone();
    while it != last {
        if less(&it.read(), &first.read()) {
            swap_at(&it, &first);
            heap.sift_down(0, &mut less);
        }
        it = it.next();
    }
    sort_heap_by(first, middle, less);
}

/// [`partial_sort_by`] under the natural order.
pub fn partial_sort<C>(first: C, middle: C, last: C)
where
    C: Writable + RandomAccess,
    C::Item: Ord,
{
    partial_sort_by(first, middle, last, natural_less);
}

/// Copy the smallest `min(source len, destination len)` elements of the
/// source into the destination in ascending order; returns the cursor
/// past the sorted prefix actually produced.
///
/// Same heap algorithm as [`partial_sort_by`], but the heap lives in the
/// destination, so the source only needs forward reads.
pub fn partial_sort_copy_by<C, D, F>(first: C, last: C, d_first: D, d_last: D, mut less: F) -> D
where
    C: Readable + Forward,
    D: Writable<Item = C::Item> + RandomAccess,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let cap = d_first.distance_to(&d_last).max(0) as usize;
    if cap == 0 {
        return d_first;
    }
    let mut it = first;
    let mut filled = 0usize;
    while it != last && filled < cap {
        d_first.advance_by(filled as isize).write(it.read());
        filled += 1;
        it = it.next();
    }
    let heap = HeapView::new(d_first.clone(), filled);
    heap.build(&mut less);
    while it != last {
        let v = it.read();
        if less(&v, &d_first.read()) {
            d_first.write(v);
            heap.sift_down(0, &mut less);
        }
        it = it.next();
    }
    let d_end = d_first.advance_by(filled as isize);
    sort_heap_by(d_first, d_end.clone(), less);
    d_end
}

/// [`partial_sort_copy_by`] under the natural order.
pub fn partial_sort_copy<C, D>(first: C, last: C, d_first: D, d_last: D) -> D
where
    C: Readable + Forward,
    D: Writable<Item = C::Item> + RandomAccess,
    C::Item: Ord,
{
    partial_sort_copy_by(first, last, d_first, d_last, natural_less)
}

/// Cursor one past the longest sorted prefix.
pub fn is_sorted_until_by<C, F>(first: C, last: C, mut less: F) -> C
where
    C: Readable + MultiPass,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    if first == last {
        return last;
    }
    let mut it = first;
    let mut ahead = it.next();
    while ahead != last {
        if less(&ahead.read(), &it.read()) {
            return ahead;
        }
        it = ahead.clone();
        ahead = ahead.next();
    }
    last
}

/// Whether the range is sorted ascending under `less`.
pub fn is_sorted_by<C, F>(first: C, last: C, less: F) -> bool
where
    C: Readable + MultiPass,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    is_sorted_until_by(first, last.clone(), less) == last
}

/// [`is_sorted_by`] under the natural order.
pub fn is_sorted<C>(first: C, last: C) -> bool
where
    C: Readable + MultiPass,
    C::Item: Ord,
{
    is_sorted_by(first, last, natural_less)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::Slots;

    #[test]
    fn nth_element_places_the_order_statistic() {
        let s = Slots::from(vec![3, 1, 4, 1, 5, 9, 2, 6]);
        nth_element(s.begin(), s.cursor_at(3), s.end());
        // sorted = [1, 1, 2, 3, 4, 5, 6, 9]
        assert_eq!(s.cursor_at(3).read(), 3);
        let v = s.snapshot();
        assert!(v[..3].iter().all(|x| *x <= v[3]));
        assert!(v[4..].iter().all(|x| *x >= v[3]));
    }

    #[test]
    fn nth_out_of_range_is_a_no_op() {
        let s = Slots::from(vec![5, 3, 1]);
        nth_element(s.begin(), s.end(), s.end());
        assert_eq!(s.snapshot(), vec![5, 3, 1]);
    }

    #[test]
    fn duplicate_heavy_input_selects_correctly() {
        let s = Slots::from(vec![2; 64]);
        nth_element(s.begin(), s.cursor_at(20), s.end());
        assert_eq!(s.cursor_at(20).read(), 2);
    }

    #[test]
    fn partial_sort_orders_the_prefix() {
        let s = Slots::from(vec![9, 7, 5, 3, 1, 8, 6, 4, 2, 0]);
        partial_sort(s.begin(), s.cursor_at(4), s.end());
        assert_eq!(s.snapshot()[..4], [0, 1, 2, 3]);
    }

    #[test]
    fn sort_family_agrees_with_the_host_sort() {
        let s = Slots::from(vec![5, 2, 8, 1, 9, 3]);
        sort(s.begin(), s.end());
        assert_eq!(s.snapshot(), vec![1, 2, 3, 5, 8, 9]);
        assert!(is_sorted(s.begin(), s.end()));
    }
}
