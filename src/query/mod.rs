//! Non-modifying algorithms
//!
//! Single-pass scans over `[first, last)` cursor ranges: searching,
//! counting, comparing, and the sorted-range bound searches. Not-found is
//! reported by returning `last` (or `false`/`0`), never by an error.

use crate::compare::{natural_equal, natural_less};
use crate::cursor::{Forward, MultiPass, Readable};
use crate::partition::partition_point;

/// Apply `f` to every element in order.
pub fn for_each<C, F>(first: C, last: C, mut f: F)
where
    C: Readable + Forward,
    F: FnMut(C::Item),
{
    let mut it = first;
    while it != last {
        f(it.read());
        it = it.next();
    }
}

/// Apply `f` to the first `n` elements; returns the cursor past them.
///
/// The count-limited variant exists for unbounded sources, which must not
/// be walked to an end sentinel they may not have.
pub fn for_each_n<C, F>(first: C, n: usize, mut f: F) -> C
where
    C: Readable + Forward,
    F: FnMut(C::Item),
{
    let mut it = first;
    for _ in 0..n {
        f(it.read());
        it = it.next();
    }
    it
}

/// First position whose element equals `value`, or `last`.
pub fn find<C>(first: C, last: C, value: &C::Item) -> C
where
    C: Readable + Forward,
    C::Item: PartialEq,
{
    find_if(first, last, |x| x == value)
}

/// First position satisfying `pred`, or `last`.
pub fn find_if<C, P>(first: C, last: C, mut pred: P) -> C
where
    C: Readable + Forward,
    P: FnMut(&C::Item) -> bool,
{
    let mut it = first;
    while it != last && !pred(&it.read()) {
        it = it.next();
    }
    it
}

/// First position failing `pred`, or `last`.
pub fn find_if_not<C, P>(first: C, last: C, mut pred: P) -> C
where
    C: Readable + Forward,
    P: FnMut(&C::Item) -> bool,
{
    find_if(first, last, move |x| !pred(x))
}

/// First position where two adjacent elements are equal under `eq`, or
/// `last`.
pub fn adjacent_find_by<C, F>(first: C, last: C, mut eq: F) -> C
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
        if eq(&it.read(), &ahead.read()) {
            return it;
        }
        it = ahead.clone();
        ahead = ahead.next();
    }
    last
}

/// [`adjacent_find_by`] under natural equality.
pub fn adjacent_find<C>(first: C, last: C) -> C
where
    C: Readable + MultiPass,
    C::Item: PartialEq,
{
    adjacent_find_by(first, last, natural_equal)
}

/// Number of elements equal to `value`.
pub fn count<C>(first: C, last: C, value: &C::Item) -> usize
where
    C: Readable + Forward,
    C::Item: PartialEq,
{
    count_if(first, last, |x| x == value)
}

/// Number of elements satisfying `pred`.
pub fn count_if<C, P>(first: C, last: C, mut pred: P) -> usize
where
    C: Readable + Forward,
    P: FnMut(&C::Item) -> bool,
{
    let mut it = first;
    let mut n = 0;
    while it != last {
        if pred(&it.read()) {
            n += 1;
        }
        it = it.next();
    }
    n
}

/// First position pair where the two ranges disagree under `eq`.
///
/// The second range is taken head-only and must be at least as long as
/// the first.
pub fn mismatch_by<C1, C2, F>(first1: C1, last1: C1, first2: C2, mut eq: F) -> (C1, C2)
where
    C1: Readable + Forward,
    C2: Readable<Item = C1::Item> + Forward,
    F: FnMut(&C1::Item, &C1::Item) -> bool,
{
    let mut it1 = first1;
    let mut it2 = first2;
    while it1 != last1 && eq(&it1.read(), &it2.read()) {
        it1 = it1.next();
        it2 = it2.next();
    }
    (it1, it2)
}

/// [`mismatch_by`] under natural equality.
pub fn mismatch<C1, C2>(first1: C1, last1: C1, first2: C2) -> (C1, C2)
where
    C1: Readable + Forward,
    C2: Readable<Item = C1::Item> + Forward,
    C1::Item: PartialEq,
{
    mismatch_by(first1, last1, first2, natural_equal)
}

/// Whether the two ranges are element-wise equal under `eq`.
pub fn equal_by<C1, C2, F>(first1: C1, last1: C1, first2: C2, eq: F) -> bool
where
    C1: Readable + Forward,
    C2: Readable<Item = C1::Item> + Forward,
    F: FnMut(&C1::Item, &C1::Item) -> bool,
{
    mismatch_by(first1, last1.clone(), first2, eq).0 == last1
}

/// [`equal_by`] under natural equality.
pub fn equal<C1, C2>(first1: C1, last1: C1, first2: C2) -> bool
where
    C1: Readable + Forward,
    C2: Readable<Item = C1::Item> + Forward,
    C1::Item: PartialEq,
{
    equal_by(first1, last1, first2, natural_equal)
}

/// First occurrence of the needle range inside the haystack, or `last`.
pub fn search_by<C1, C2, F>(first: C1, last: C1, n_first: C2, n_last: C2, mut eq: F) -> C1
where
    C1: Readable + MultiPass,
    C2: Readable<Item = C1::Item> + MultiPass,
    F: FnMut(&C1::Item, &C1::Item) -> bool,
{
    if n_first == n_last {
        return first;
    }
    let mut base = first;
    loop {
        // Try to match the needle starting at `base`.
        let mut h = base.clone();
        let mut n = n_first.clone();
        loop {
            if n == n_last {
                return base;
            }
            if h == last {
                return last;
            }
            if !eq(&h.read(), &n.read()) {
                break;
            }
            h = h.next();
            n = n.next();
        }
        base = base.next();
    }
}

/// [`search_by`] under natural equality.
pub fn search<C1, C2>(first: C1, last: C1, n_first: C2, n_last: C2) -> C1
where
    C1: Readable + MultiPass,
    C2: Readable<Item = C1::Item> + MultiPass,
    C1::Item: PartialEq,
{
    search_by(first, last, n_first, n_last, natural_equal)
}

/// Last occurrence of the needle range inside the haystack, or `last`.
///
/// Repeated forward [`search_by`] keeping the latest hit; requires
/// multi-pass cursors because every candidate window is reread.
pub fn find_end_by<C1, C2, F>(first: C1, last: C1, n_first: C2, n_last: C2, mut eq: F) -> C1
where
    C1: Readable + MultiPass,
    C2: Readable<Item = C1::Item> + MultiPass,
    F: FnMut(&C1::Item, &C1::Item) -> bool,
{
    if n_first == n_last {
        return last;
    }
    let mut found = last.clone();
    let mut from = first;
    loop {
        let hit = search_by(from, last.clone(), n_first.clone(), n_last.clone(), &mut eq);
        if hit == last {
            return found;
        }
        found = hit.clone();
        from = hit.next();
    }
}

/// [`find_end_by`] under natural equality.
pub fn find_end<C1, C2>(first: C1, last: C1, n_first: C2, n_last: C2) -> C1
where
    C1: Readable + MultiPass,
    C2: Readable<Item = C1::Item> + MultiPass,
    C1::Item: PartialEq,
{
    find_end_by(first, last, n_first, n_last, natural_equal)
}

/// Whether every element satisfies `pred`. True on the empty range.
pub fn all_of<C, P>(first: C, last: C, pred: P) -> bool
where
    C: Readable + Forward,
    P: FnMut(&C::Item) -> bool,
{
    find_if_not(first, last.clone(), pred) == last
}

/// Whether at least one element satisfies `pred`.
pub fn any_of<C, P>(first: C, last: C, pred: P) -> bool
where
    C: Readable + Forward,
    P: FnMut(&C::Item) -> bool,
{
    find_if(first, last.clone(), pred) != last
}

/// Whether no element satisfies `pred`. True on the empty range.
pub fn none_of<C, P>(first: C, last: C, pred: P) -> bool
where
    C: Readable + Forward,
    P: FnMut(&C::Item) -> bool,
{
    !any_of(first, last, pred)
}

/// Position of the smallest element under `less`; `last` on empty input.
/// Ties go to the earliest occurrence.
pub fn min_element_by<C, F>(first: C, last: C, mut less: F) -> C
where
    C: Readable + MultiPass,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    if first == last {
        return last;
    }
    let mut best = first.clone();
    let mut it = first.next();
    while it != last {
        if less(&it.read(), &best.read()) {
            best = it.clone();
        }
        it = it.next();
    }
    best
}

/// [`min_element_by`] under the natural order.
pub fn min_element<C>(first: C, last: C) -> C
where
    C: Readable + MultiPass,
    C::Item: Ord,
{
    min_element_by(first, last, natural_less)
}

/// Position of the largest element under `less`; `last` on empty input.
/// Ties go to the earliest occurrence.
pub fn max_element_by<C, F>(first: C, last: C, mut less: F) -> C
where
    C: Readable + MultiPass,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    if first == last {
        return last;
    }
    let mut best = first.clone();
    let mut it = first.next();
    while it != last {
        if less(&best.read(), &it.read()) {
            best = it.clone();
        }
        it = it.next();
    }
    best
}

/// [`max_element_by`] under the natural order.
pub fn max_element<C>(first: C, last: C) -> C
where
    C: Readable + MultiPass,
    C::Item: Ord,
{
    max_element_by(first, last, natural_less)
}

/// Positions of the smallest and largest elements (min ties earliest,
/// max ties latest, matching the classic contract).
pub fn minmax_element_by<C, F>(first: C, last: C, mut less: F) -> (C, C)
where
    C: Readable + MultiPass,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let mut min = first.clone();
    let mut max = first.clone();
    if first == last {
        return (min, max);
    }
    let mut it = first.next();
    while it != last {
        let v = it.read();
        if less(&v, &min.read()) {
            min = it.clone();
        }
        if !less(&v, &max.read()) {
            max = it.clone();
        }
        it = it.next();
    }
    (min, max)
}

/// [`minmax_element_by`] under the natural order.
pub fn minmax_element<C>(first: C, last: C) -> (C, C)
where
    C: Readable + MultiPass,
    C::Item: Ord,
{
    minmax_element_by(first, last, natural_less)
}

/// First position whose element is not less than `value`, in a range
/// sorted under `less`. O(log n) comparisons via halving on `distance`.
pub fn lower_bound_by<C, F>(first: C, last: C, value: &C::Item, mut less: F) -> C
where
    C: Readable + Forward,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    partition_point(first, last, |x| less(x, value))
}

/// [`lower_bound_by`] under the natural order.
pub fn lower_bound<C>(first: C, last: C, value: &C::Item) -> C
where
    C: Readable + Forward,
    C::Item: Ord,
{
    lower_bound_by(first, last, value, natural_less)
}

/// First position whose element is greater than `value`, in a range
/// sorted under `less`.
pub fn upper_bound_by<C, F>(first: C, last: C, value: &C::Item, mut less: F) -> C
where
    C: Readable + Forward,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    partition_point(first, last, |x| !less(value, x))
}

/// [`upper_bound_by`] under the natural order.
pub fn upper_bound<C>(first: C, last: C, value: &C::Item) -> C
where
    C: Readable + Forward,
    C::Item: Ord,
{
    upper_bound_by(first, last, value, natural_less)
}

/// The `[lower_bound, upper_bound)` window for `value`.
pub fn equal_range_by<C, F>(first: C, last: C, value: &C::Item, mut less: F) -> (C, C)
where
    C: Readable + Forward,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let lo = lower_bound_by(first, last.clone(), value, &mut less);
    let hi = upper_bound_by(lo.clone(), last, value, &mut less);
    (lo, hi)
}

/// [`equal_range_by`] under the natural order.
pub fn equal_range<C>(first: C, last: C, value: &C::Item) -> (C, C)
where
    C: Readable + Forward,
    C::Item: Ord,
{
    equal_range_by(first, last, value, natural_less)
}

/// Whether a sorted range contains an element equivalent to `value`.
pub fn binary_search_by<C, F>(first: C, last: C, value: &C::Item, mut less: F) -> bool
where
    C: Readable + Forward,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let lo = lower_bound_by(first, last.clone(), value, &mut less);
    lo != last && !less(value, &lo.read())
}

/// [`binary_search_by`] under the natural order.
pub fn binary_search<C>(first: C, last: C, value: &C::Item) -> bool
where
    C: Readable + Forward,
    C::Item: Ord,
{
    binary_search_by(first, last, value, natural_less)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::Slots;

    #[test]
    fn find_family_returns_last_when_absent() {
        let s = Slots::from(vec![1, 3, 5]);
        assert_eq!(find(s.begin(), s.end(), &4), s.end());
        assert_eq!(find(s.begin(), s.end(), &5), s.cursor_at(2));
    }

    #[test]
    fn search_locates_a_window() {
        let hay = Slots::from(vec![1, 2, 3, 2, 3, 4]);
        let needle = Slots::from(vec![2, 3, 4]);
        let hit = search(hay.begin(), hay.end(), needle.begin(), needle.end());
        assert_eq!(hit, hay.cursor_at(3));
    }

    #[test]
    fn find_end_picks_the_last_window() {
        let hay = Slots::from(vec![1, 2, 1, 2, 1]);
        let needle = Slots::from(vec![1, 2]);
        let hit = find_end(hay.begin(), hay.end(), needle.begin(), needle.end());
        assert_eq!(hit, hay.cursor_at(2));
    }

    #[test]
    fn bounds_bracket_duplicates() {
        let s = Slots::from(vec![1, 2, 2, 2, 3]);
        let (lo, hi) = equal_range(s.begin(), s.end(), &2);
        assert_eq!(lo, s.cursor_at(1));
        assert_eq!(hi, s.cursor_at(4));
        assert!(binary_search(s.begin(), s.end(), &2));
        assert!(!binary_search(s.begin(), s.end(), &4));
    }

    #[test]
    fn minmax_tie_breaking() {
        let s = Slots::from(vec![2, 1, 1, 2]);
        let (min, max) = minmax_element(s.begin(), s.end());
        assert_eq!(min, s.cursor_at(1)); // earliest min
        assert_eq!(max, s.cursor_at(3)); // latest max
    }
}
