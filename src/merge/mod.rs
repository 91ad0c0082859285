//! Copying merge and in-place merge
//!
//! [`merge`] is the standard two-pointer merge into a sink, stable with
//! ties favouring the first range. [`inplace_merge`] fuses two sorted,
//! adjacent sub-ranges of one bidirectional range with no auxiliary
//! storage: divide-and-balance recursion where each level bisects the
//! longer half, binary-searches the matching cut in the shorter, and
//! rotates the two cut segments into order. Recursing into the smaller
//! piece and looping on the larger keeps the depth at O(log n).
//!
//! Inputs must already be sorted under the comparer; if they are not, the
//! output is unspecified but the call stays memory-safe.

use tracing::trace;

use crate::compare::natural_less;
use crate::cursor::{advance, distance, Bidirectional, Forward, Output, Readable, Writable};
use crate::modify::rotate;
use crate::query::{lower_bound_by, upper_bound_by};
use crate::swap_at;
use crate::EngineError;

/// Merge two sorted ranges into `out`. Stable: on ties the element from
/// the first range is emitted first. O(n + m).
pub fn merge_by<C1, C2, O, F>(
    first1: C1,
    last1: C1,
    first2: C2,
    last2: C2,
    out: &mut O,
    mut less: F,
) -> Result<usize, EngineError>
where
    C1: Readable + Forward,
    C2: Readable<Item = C1::Item> + Forward,
    O: Output<Item = C1::Item>,
    F: FnMut(&C1::Item, &C1::Item) -> bool,
{
    let mut it1 = first1;
    let mut it2 = first2;
    let mut n = 0;
    while it1 != last1 && it2 != last2 {
        let v2 = it2.read();
        if less(&v2, &it1.read()) {
            out.put(v2)?;
            it2 = it2.next();
        } else {
            out.put(it1.read())?;
            it1 = it1.next();
        }
        n += 1;
    }
    n += crate::modify::copy(it1, last1, out)?;
    n += crate::modify::copy(it2, last2, out)?;
    Ok(n)
}

/// [`merge_by`] under the natural order.
pub fn merge<C1, C2, O>(
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
    merge_by(first1, last1, first2, last2, out, natural_less)
}

/// Merge the two sorted sub-ranges `[first, middle)` and `[middle, last)`
/// in place, stably, with no sequence-sized scratch.
pub fn inplace_merge_by<C, F>(first: C, middle: C, last: C, mut less: F)
where
    C: Writable + Bidirectional,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let len1 = distance(&first, &middle);
    let len2 = distance(&middle, &last);
    merge_without_buffer(first, middle, last, len1, len2, &mut less, 0);
}

/// [`inplace_merge_by`] under the natural order.
pub fn inplace_merge<C>(first: C, middle: C, last: C)
where
    C: Writable + Bidirectional,
    C::Item: Ord,
{
    inplace_merge_by(first, middle, last, natural_less);
}

fn merge_without_buffer<C, F>(
    first: C,
    middle: C,
    last: C,
    len1: isize,
    len2: isize,
    less: &mut F,
    depth: usize,
) where
    C: Writable + Bidirectional,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let mut first = first;
    let mut middle = middle;
    let mut last = last;
    let mut len1 = len1;
    let mut len2 = len2;
    loop {
        if len1 == 0 || len2 == 0 {
            return;
        }
        // Fast path on nearly-sorted input: the left prefix already no
        // later than the right head needs no work at all.
        let head2 = middle.read();
        while len1 > 0 && !less(&head2, &first.read()) {
            first = first.next();
            len1 -= 1;
        }
        if len1 == 0 {
            return;
        }
        if len1 + len2 == 2 {
            // Both sides length 1 and out of order: one swap finishes.
            swap_at(&first, &middle);
            return;
        }
        trace!(depth, len1, len2, "inplace_merge divide");

        // Bisect the longer half; binary-search the matching cut in the
        // shorter so sortedness is preserved across the rotation.
        let (cut1, cut2, cut_len1, cut_len2);
        if len1 >= len2 {
            cut_len1 = len1 / 2;
            let c1 = advance(first.clone(), cut_len1);
            let probe = c1.read();
            let c2 = lower_bound_by(middle.clone(), last.clone(), &probe, &mut *less);
            cut_len2 = distance(&middle, &c2);
            cut1 = c1;
            cut2 = c2;
        } else {
            cut_len2 = len2 / 2;
            let c2 = advance(middle.clone(), cut_len2);
            let probe = c2.read();
            let c1 = upper_bound_by(first.clone(), middle.clone(), &probe, &mut *less);
            cut_len1 = distance(&first, &c1);
            cut1 = c1;
            cut2 = c2;
        }
        let new_middle = rotate(cut1.clone(), middle.clone(), cut2.clone());

        // Recurse into the smaller piece; continue the loop on the larger
        // one so stack depth never doubles.
        let left = (cut_len1, cut_len2);
        let right = (len1 - cut_len1, len2 - cut_len2);
        if left.0 + left.1 <= right.0 + right.1 {
            merge_without_buffer(
                first.clone(),
                cut1,
                new_middle.clone(),
                left.0,
                left.1,
                less,
                depth + 1,
            );
            first = new_middle;
            middle = cut2;
            len1 = right.0;
            len2 = right.1;
        } else {
            merge_without_buffer(
                new_middle.clone(),
                cut2,
                last.clone(),
                right.0,
                right.1,
                less,
                depth + 1,
            );
            last = new_middle;
            middle = cut1;
            len1 = left.0;
            len2 = left.1;
        }
    }
}
