//! Sorted-range set algebra
//!
//! Each operation is a single forward walk over two sorted ranges: a
//! three-way comparison of the current heads decides which pointer
//! advances and whether an element is emitted. O(n + m), stable, and on
//! ties the element from the first range is the one kept.

use std::cmp::Ordering;

use crate::compare::{natural_less, ordering_from_less};
use crate::cursor::{Forward, Output, Readable};
use crate::EngineError;

fn heads_ordering<C1, C2, F>(it1: &C1, it2: &C2, ord: &mut F) -> Ordering
where
    C1: Readable,
    C2: Readable<Item = C1::Item>,
    F: FnMut(&C1::Item, &C1::Item) -> Ordering,
{
    ord(&it1.read(), &it2.read())
}

/// Whether every element of the sorted second range appears in the sorted
/// first range (multiset containment).
pub fn includes_by<C1, C2, F>(first1: C1, last1: C1, first2: C2, last2: C2, less: F) -> bool
where
    C1: Readable + Forward,
    C2: Readable<Item = C1::Item> + Forward,
    F: FnMut(&C1::Item, &C1::Item) -> bool,
{
    let mut ord = ordering_from_less(less);
    let mut it1 = first1;
    let mut it2 = first2;
    while it2 != last2 {
        if it1 == last1 {
            return false;
        }
        match heads_ordering(&it1, &it2, &mut ord) {
            Ordering::Greater => return false,
            Ordering::Less => it1 = it1.next(),
            Ordering::Equal => {
                it1 = it1.next();
                it2 = it2.next();
            }
        }
    }
    true
}

/// [`includes_by`] under the natural order.
pub fn includes<C1, C2>(first1: C1, last1: C1, first2: C2, last2: C2) -> bool
where
    C1: Readable + Forward,
    C2: Readable<Item = C1::Item> + Forward,
    C1::Item: Ord,
{
    includes_by(first1, last1, first2, last2, natural_less)
}

/// Emit the sorted union; on ties the first range's copy is kept.
pub fn set_union_by<C1, C2, O, F>(
    first1: C1,
    last1: C1,
    first2: C2,
    last2: C2,
    out: &mut O,
    less: F,
) -> Result<usize, EngineError>
where
    C1: Readable + Forward,
    C2: Readable<Item = C1::Item> + Forward,
    O: Output<Item = C1::Item>,
    F: FnMut(&C1::Item, &C1::Item) -> bool,
{
    let mut ord = ordering_from_less(less);
    let mut it1 = first1;
    let mut it2 = first2;
    let mut n = 0;
    while it1 != last1 && it2 != last2 {
        match heads_ordering(&it1, &it2, &mut ord) {
            Ordering::Less => {
                out.put(it1.read())?;
                it1 = it1.next();
            }
            Ordering::Greater => {
                out.put(it2.read())?;
                it2 = it2.next();
            }
            Ordering::Equal => {
                out.put(it1.read())?;
                it1 = it1.next();
                it2 = it2.next();
            }
        }
        n += 1;
    }
    n += crate::modify::copy(it1, last1, out)?;
    n += crate::modify::copy(it2, last2, out)?;
    Ok(n)
}

/// [`set_union_by`] under the natural order.
pub fn set_union<C1, C2, O>(
    first1: C1,
    last1: C1,
    first2: C2,
    last2: C2,
    out: &mut O,
) -> Result<usize, EngineError>
where
    C1: Readable + Forward,
    C2: Readable<Item = C1::Item> + Forward,
    O: Output<Item = C1::Item>,
    C1::Item: Ord,
{
    set_union_by(first1, last1, first2, last2, out, natural_less)
}

/// Emit the sorted intersection, taking elements from the first range.
pub fn set_intersection_by<C1, C2, O, F>(
    first1: C1,
    last1: C1,
    first2: C2,
    last2: C2,
    out: &mut O,
    less: F,
) -> Result<usize, EngineError>
where
    C1: Readable + Forward,
    C2: Readable<Item = C1::Item> + Forward,
    O: Output<Item = C1::Item>,
    F: FnMut(&C1::Item, &C1::Item) -> bool,
{
    let mut ord = ordering_from_less(less);
    let mut it1 = first1;
    let mut it2 = first2;
    let mut n = 0;
    while it1 != last1 && it2 != last2 {
        match heads_ordering(&it1, &it2, &mut ord) {
            Ordering::Less => it1 = it1.next(),
            Ordering::Greater => it2 = it2.next(),
            Ordering::Equal => {
                out.put(it1.read())?;
                n += 1;
                it1 = it1.next();
                it2 = it2.next();
            }
        }
    }
    Ok(n)
}

/// [`set_intersection_by`] under the natural order.
pub fn set_intersection<C1, C2, O>(
    first1: C1,
    last1: C1,
    first2: C2,
    last2: C2,
    out: &mut O,
) -> Result<usize, EngineError>
where
    C1: Readable + Forward,
    C2: Readable<Item = C1::Item> + Forward,
    O: Output<Item = C1::Item>,
    C1::Item: Ord,
{
    set_intersection_by(first1, last1, first2, last2, out, natural_less)
}

/// Emit the sorted elements of the first range absent from the second.
pub fn set_difference_by<C1, C2, O, F>(
    first1: C1,
    last1: C1,
    first2: C2,
    last2: C2,
    out: &mut O,
    less: F,
) -> Result<usize, EngineError>
where
    C1: Readable + Forward,
    C2: Readable<Item = C1::Item> + Forward,
    O: Output<Item = C1::Item>,
    F: FnMut(&C1::Item, &C1::Item) -> bool,
{
    let mut ord = ordering_from_less(less);
    let mut it1 = first1;
    let mut it2 = first2;
    let mut n = 0;
    while it1 != last1 && it2 != last2 {
        match heads_ordering(&it1, &it2, &mut ord) {
            Ordering::Less => {
                out.put(it1.read())?;
                n += 1;
                it1 = it1.next();
            }
            Ordering::Greater => it2 = it2.next(),
            Ordering::Equal => {
                it1 = it1.next();
                it2 = it2.next();
            }
        }
    }
    n += crate::modify::copy(it1, last1, out)?;
    Ok(n)
}

/// [`set_difference_by`] under the natural order.
pub fn set_difference<C1, C2, O>(
    first1: C1,
    last1: C1,
    first2: C2,
    last2: C2,
    out: &mut O,
) -> Result<usize, EngineError>
where
    C1: Readable + Forward,
    C2: Readable<Item = C1::Item> + Forward,
    O: Output<Item = C1::Item>,
    C1::Item: Ord,
{
    set_difference_by(first1, last1, first2, last2, out, natural_less)
}

/// Emit the sorted elements present in exactly one of the two ranges.
pub fn set_symmetric_difference_by<C1, C2, O, F>(
    first1: C1,
    last1: C1,
    first2: C2,
    last2: C2,
    out: &mut O,
    less: F,
) -> Result<usize, EngineError>
where
    C1: Readable + Forward,
    C2: Readable<Item = C1::Item> + Forward,
    O: Output<Item = C1::Item>,
    F: FnMut(&C1::Item, &C1::Item) -> bool,
{
    let mut ord = ordering_from_less(less);
    let mut it1 = first1;
    let mut it2 = first2;
    let mut n = 0;
    while it1 != last1 && it2 != last2 {
        match heads_ordering(&it1, &it2, &mut ord) {
            Ordering::Less => {
                out.put(it1.read())?;
                n += 1;
                it1 = it1.next();
            }
            Ordering::Greater => {
                out.put(it2.read())?;
                n += 1;
                it2 = it2.next();
            }
            Ordering::Equal => {
                it1 = it1.next();
                it2 = it2.next();
            }
        }
    }
    n += crate::modify::copy(it1, last1, out)?;
    n += crate::modify::copy(it2, last2, out)?;
    Ok(n)
}

/// [`set_symmetric_difference_by`] under the natural order.
pub fn set_symmetric_difference<C1, C2, O>(
    first1: C1,
    last1: C1,
    first2: C2,
    last2: C2,
    out: &mut O,
) -> Result<usize, EngineError>
where
    C1: Readable + Forward,
    C2: Readable<Item = C1::Item> + Forward,
    O: Output<Item = C1::Item>,
    C1::Item: Ord,
{
    set_symmetric_difference_by(first1, last1, first2, last2, out, natural_less)
}
