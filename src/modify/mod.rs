//! Modifying algorithms
//!
//! In-place rearrangement (reverse, rotate, remove, unique, shuffle) and
//! copying emission through [`Output`] sinks (copy, transform, sample).
//! Copying algorithms return the count emitted; a bounded sink that runs
//! out of room surfaces [`crate::EngineError::DestinationFull`].

use rand::Rng;

use crate::cursor::{Bidirectional, Forward, MultiPass, Output, Readable, Writable};
use crate::swap_at;
use crate::EngineError;

/// Emit every element of `[first, last)` in order.
pub fn copy<C, O>(first: C, last: C, out: &mut O) -> Result<usize, EngineError>
where
    C: Readable + Forward,
    O: Output<Item = C::Item>,
{
    let mut it = first;
    let mut n = 0;
    while it != last {
        out.put(it.read())?;
        n += 1;
        it = it.next();
    }
    Ok(n)
}

/// Emit the elements satisfying `pred`, preserving order.
pub fn copy_if<C, O, P>(first: C, last: C, out: &mut O, mut pred: P) -> Result<usize, EngineError>
where
    C: Readable + Forward,
    O: Output<Item = C::Item>,
    P: FnMut(&C::Item) -> bool,
{
    let mut it = first;
    let mut n = 0;
    while it != last {
        let v = it.read();
        if pred(&v) {
            out.put(v)?;
            n += 1;
        }
        it = it.next();
    }
    Ok(n)
}

/// Emit exactly `n` elements starting at `first`; the bounded variant for
/// sources without a reachable end sentinel. Returns the cursor past the
/// consumed prefix.
pub fn copy_n<C, O>(first: C, n: usize, out: &mut O) -> Result<C, EngineError>
where
    C: Readable + Forward,
    O: Output<Item = C::Item>,
{
    let mut it = first;
    for _ in 0..n {
        out.put(it.read())?;
        it = it.next();
    }
    Ok(it)
}

/// Overwrite every element with `value`.
pub fn fill<C>(first: C, last: C, value: &C::Item)
where
    C: Writable + Forward,
{
    let mut it = first;
    while it != last {
        it.write(value.clone());
        it = it.next();
    }
}

/// Overwrite the `n` elements from `first`; returns the cursor past them.
pub fn fill_n<C>(first: C, n: usize, value: &C::Item) -> C
where
    C: Writable + Forward,
{
    let mut it = first;
    for _ in 0..n {
        it.write(value.clone());
        it = it.next();
    }
    it
}

/// Overwrite every element with successive results of `gen`.
pub fn generate<C, G>(first: C, last: C, mut gen: G)
where
    C: Writable + Forward,
    G: FnMut() -> C::Item,
{
    let mut it = first;
    while it != last {
        it.write(gen());
        it = it.next();
    }
}

/// Overwrite `n` elements from `first` with successive results of `gen`.
pub fn generate_n<C, G>(first: C, n: usize, mut gen: G) -> C
where
    C: Writable + Forward,
    G: FnMut() -> C::Item,
{
    let mut it = first;
    for _ in 0..n {
        it.write(gen());
        it = it.next();
    }
    it
}

/// Emit `op(x)` for every element `x`.
pub fn transform<C, O, U, F>(first: C, last: C, out: &mut O, mut op: F) -> Result<usize, EngineError>
where
    C: Readable + Forward,
    O: Output<Item = U>,
    F: FnMut(C::Item) -> U,
{
    let mut it = first;
    let mut n = 0;
    while it != last {
        out.put(op(it.read()))?;
        n += 1;
        it = it.next();
    }
    Ok(n)
}

/// Emit `op(x, y)` pairwise over two ranges; the second is head-only and
/// must be at least as long as the first.
pub fn transform_binary<C1, C2, O, U, F>(
    first1: C1,
    last1: C1,
    first2: C2,
    out: &mut O,
    mut op: F,
) -> Result<usize, EngineError>
where
    C1: Readable + Forward,
    C2: Readable + Forward,
    O: Output<Item = U>,
    F: FnMut(C1::Item, C2::Item) -> U,
{
    let mut it1 = first1;
    let mut it2 = first2;
    let mut n = 0;
    while it1 != last1 {
        out.put(op(it1.read(), it2.read()))?;
        n += 1;
        it1 = it1.next();
        it2 = it2.next();
    }
    Ok(n)
}

/// Replace every element equal to `old` with `new`.
pub fn replace<C>(first: C, last: C, old: &C::Item, new: &C::Item)
where
    C: Writable + Forward,
    C::Item: PartialEq,
{
    replace_if(first, last, |x| x == old, new);
}

/// Replace every element satisfying `pred` with `new`.
pub fn replace_if<C, P>(first: C, last: C, mut pred: P, new: &C::Item)
where
    C: Writable + Forward,
    P: FnMut(&C::Item) -> bool,
{
    let mut it = first;
    while it != last {
        if pred(&it.read()) {
            it.write(new.clone());
        }
        it = it.next();
    }
}

/// Compact the range by dropping elements satisfying `pred`; returns the
/// new logical end. Elements at and past it are unspecified leftovers.
pub fn remove_if<C, P>(first: C, last: C, mut pred: P) -> C
where
    C: Writable + Forward,
    P: FnMut(&C::Item) -> bool,
{
    let mut write = crate::query::find_if(first, last.clone(), &mut pred);
    if write == last {
        return write;
    }
    let mut it = write.next();
    while it != last {
        let v = it.read();
        if !pred(&v) {
            write.write(v);
            write = write.next();
        }
        it = it.next();
    }
    write
}

/// Emit the elements not satisfying `pred`, preserving order.
pub fn remove_copy_if<C, O, P>(
    first: C,
    last: C,
    out: &mut O,
    mut pred: P,
) -> Result<usize, EngineError>
where
    C: Readable + Forward,
    O: Output<Item = C::Item>,
    P: FnMut(&C::Item) -> bool,
{
    copy_if(first, last, out, move |x| !pred(x))
}

/// Collapse consecutive runs equal under `eq` to their first element;
/// returns the new logical end.
pub fn unique_by<C, F>(first: C, last: C, mut eq: F) -> C
where
    C: Writable + MultiPass,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let first = crate::query::adjacent_find_by(first, last.clone(), &mut eq);
    if first == last {
        return last;
    }
    let mut keep = first;
    let mut it = keep.next();
    while it != last {
        let v = it.read();
        if !eq(&keep.read(), &v) {
            keep = keep.next();
            keep.write(v);
        }
        it = it.next();
    }
    keep.next()
}

/// [`unique_by`] under natural equality.
pub fn unique<C>(first: C, last: C) -> C
where
    C: Writable + MultiPass,
    C::Item: PartialEq,
{
    unique_by(first, last, crate::compare::natural_equal)
}

/// Exchange the elements of `[first1, last1)` with the equally long range
/// at `first2`; returns the cursor past the second range.
pub fn swap_ranges<C1, C2>(first1: C1, last1: C1, first2: C2) -> C2
where
    C1: Writable + Forward,
    C2: Writable<Item = C1::Item> + Forward,
{
    let mut it1 = first1;
    let mut it2 = first2;
    while it1 != last1 {
        let v1 = it1.read();
        it1.write(it2.read());
        it2.write(v1);
        it1 = it1.next();
        it2 = it2.next();
    }
    it2
}

/// Reverse the range in place.
pub fn reverse<C>(first: C, last: C)
where
    C: Writable + Bidirectional,
{
    let mut first = first;
    let mut last = last;
    loop {
        if first == last {
            return;
        }
        last = last.prev();
        if first == last {
            return;
        }
        swap_at(&first, &last);
        first = first.next();
    }
}

/// Rotate `[first, last)` left so the element at `middle` comes first.
/// Returns the new position of the old first element, i.e. the boundary
/// where the rotated-off prefix now starts.
///
/// Cycle-walking forward implementation: repeatedly swaps the tail block
/// into place, then continues on the remainder. O(n) swaps, O(1) space,
/// needs only forward movement.
pub fn rotate<C>(first: C, middle: C, last: C) -> C
where
    C: Writable + Forward,
{
    let mut first = first;
    let mut middle = middle;
    let mut ret: Option<C> = None;
    loop {
        if first == middle {
            return ret.unwrap_or(last);
        }
        if middle == last {
            return ret.unwrap_or(first);
        }
        let mut write = first.clone();
        let mut next_read = first.clone();
        let mut read = middle.clone();
        while read != last {
            if write == next_read {
                next_read = read.clone();
            }
            swap_at(&write, &read);
            write = write.next();
            read = read.next();
        }
        if ret.is_none() {
            ret = Some(write.clone());
        }
        // Un-rotated remainder: [write, last) with its own split point.
        first = write;
        middle = next_read;
    }
}

/// Uniformly permute the range with the caller's random source.
/// Fisher-Yates over a random-access range.
pub fn shuffle<C, R>(first: C, last: C, rng: &mut R)
where
    C: Writable + crate::cursor::RandomAccess,
    R: Rng + ?Sized,
{
    let n = first.distance_to(&last).max(0) as usize;
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        if j != i {
            swap_at(&first.advance_by(i as isize), &first.advance_by(j as isize));
        }
    }
}

/// Emit `n` elements drawn uniformly without replacement.
///
/// Strategy is chosen by one probe of the source's capability: a
/// random-access source uses selection sampling (order-preserving, no
/// scratch); a forward-only source falls back to reservoir sampling with
/// an `n`-slot buffer. Both give every element equal probability.
pub fn sample<C, O, R>(
    first: C,
    last: C,
    n: usize,
    out: &mut O,
    rng: &mut R,
) -> Result<usize, EngineError>
where
    C: Readable + Forward,
    O: Output<Item = C::Item>,
    R: Rng + ?Sized,
{
    if let Some(total) = first.fast_distance_to(&last) {
        // Selection sampling (Knuth's Algorithm S).
        let mut remaining = total.max(0) as usize;
        let mut needed = n.min(remaining);
        let mut emitted = 0;
        let mut it = first;
        while needed > 0 {
            if rng.random_range(0..remaining) < needed {
                out.put(it.read())?;
                emitted += 1;
                needed -= 1;
            }
            remaining -= 1;
            it = it.next();
        }
        Ok(emitted)
    } else {
        let mut reservoir: Vec<C::Item> = Vec::with_capacity(n);
        let mut it = first;
        let mut seen = 0usize;
        while it != last {
            let v = it.read();
            if reservoir.len() < n {
                reservoir.push(v);
            } else if n > 0 {
                let j = rng.random_range(0..=seen);
                if j < n {
                    reservoir[j] = v;
                }
            }
            seen += 1;
            it = it.next();
        }
        let emitted = reservoir.len();
        for v in reservoir {
            out.put(v)?;
        }
        Ok(emitted)
    }
}
