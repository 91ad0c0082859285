//! Folds and prefix scans
//!
//! Straight-line single-pass numeric algorithms. The one subtlety is
//! exclusive versus inclusive indexing: the i-th exclusive output omits
//! the i-th input, so the exclusive variants save the accumulator before
//! emitting and fold the element in afterwards, decoupling write order
//! from accumulation order.

use crate::cursor::{Forward, Output, Readable, Writable};
use crate::EngineError;

/// Fold the range into `init` with `op`, left to right.
pub fn accumulate_by<C, T, F>(first: C, last: C, init: T, mut op: F) -> T
where
    C: Readable + Forward,
    F: FnMut(T, C::Item) -> T,
{
    let mut acc = init;
    let mut it = first;
    while it != last {
        acc = op(acc, it.read());
        it = it.next();
    }
    acc
}

/// Sum the range onto `init`.
pub fn accumulate<C>(first: C, last: C, init: C::Item) -> C::Item
where
    C: Readable + Forward,
    C::Item: std::ops::Add<Output = C::Item>,
{
    accumulate_by(first, last, init, |acc, x| acc + x)
}

/// Generalized dot product: fold `combine(acc, join(x, y))` over the
/// pairwise elements. The second range is head-only and must be at least
/// as long as the first.
pub fn inner_product_by<C1, C2, T, FC, FJ>(
    first1: C1,
    last1: C1,
    first2: C2,
    init: T,
    mut combine: FC,
    mut join: FJ,
) -> T
where
    C1: Readable + Forward,
    C2: Readable + Forward,
    FC: FnMut(T, T) -> T,
    FJ: FnMut(C1::Item, C2::Item) -> T,
{
    let mut acc = init;
    let mut it1 = first1;
    let mut it2 = first2;
    while it1 != last1 {
        acc = combine(acc, join(it1.read(), it2.read()));
        it1 = it1.next();
        it2 = it2.next();
    }
    acc
}

/// Plain dot product over `+` and `*`.
pub fn inner_product<C1, C2>(first1: C1, last1: C1, first2: C2, init: C1::Item) -> C1::Item
where
    C1: Readable + Forward,
    C2: Readable<Item = C1::Item> + Forward,
    C1::Item: std::ops::Add<Output = C1::Item> + std::ops::Mul<Output = C1::Item>,
{
    inner_product_by(first1, last1, first2, init, |a, b| a + b, |x, y| x * y)
}

/// Emit `x0, x1 - x0, x2 - x1, ...` under `diff`.
pub fn adjacent_difference_by<C, O, F>(
    first: C,
    last: C,
    out: &mut O,
    mut diff: F,
) -> Result<usize, EngineError>
where
    C: Readable + Forward,
    O: Output<Item = C::Item>,
    F: FnMut(C::Item, C::Item) -> C::Item,
{
    if first == last {
        return Ok(0);
    }
    let mut prev = first.read();
    out.put(prev.clone())?;
    let mut n = 1;
    let mut it = first.next();
    while it != last {
        let cur = it.read();
        out.put(diff(cur.clone(), prev))?;
        prev = cur;
        n += 1;
        it = it.next();
    }
    Ok(n)
}

/// [`adjacent_difference_by`] under subtraction.
pub fn adjacent_difference<C, O>(first: C, last: C, out: &mut O) -> Result<usize, EngineError>
where
    C: Readable + Forward,
    O: Output<Item = C::Item>,
    C::Item: std::ops::Sub<Output = C::Item>,
{
    adjacent_difference_by(first, last, out, |cur, prev| cur - prev)
}

/// Emit running totals under `op`: the i-th output includes the i-th
/// input. The un-seeded inclusive scan.
pub fn partial_sum_by<C, O, F>(first: C, last: C, out: &mut O, mut op: F) -> Result<usize, EngineError>
where
    C: Readable + Forward,
    O: Output<Item = C::Item>,
    F: FnMut(C::Item, C::Item) -> C::Item,
{
    if first == last {
        return Ok(0);
    }
    let mut acc = first.read();
    out.put(acc.clone())?;
    let mut n = 1;
    let mut it = first.next();
    while it != last {
        acc = op(acc, it.read());
        out.put(acc.clone())?;
        n += 1;
        it = it.next();
    }
    Ok(n)
}

/// [`partial_sum_by`] under addition.
pub fn partial_sum<C, O>(first: C, last: C, out: &mut O) -> Result<usize, EngineError>
where
    C: Readable + Forward,
    O: Output<Item = C::Item>,
    C::Item: std::ops::Add<Output = C::Item>,
{
    partial_sum_by(first, last, out, |a, b| a + b)
}

/// Seeded inclusive scan: the i-th output is `init op x0 op ... op xi`.
pub fn inclusive_scan_with<C, O, F>(
    first: C,
    last: C,
    out: &mut O,
    init: C::Item,
    mut op: F,
) -> Result<usize, EngineError>
where
    C: Readable + Forward,
    O: Output<Item = C::Item>,
    F: FnMut(C::Item, C::Item) -> C::Item,
{
    let mut acc = init;
    let mut n = 0;
    let mut it = first;
    while it != last {
        acc = op(acc, it.read());
        out.put(acc.clone())?;
        n += 1;
        it = it.next();
    }
    Ok(n)
}

/// Inclusive scan under addition with a zero-equivalent seed.
pub fn inclusive_scan<C, O>(
    first: C,
    last: C,
    out: &mut O,
    init: C::Item,
) -> Result<usize, EngineError>
where
    C: Readable + Forward,
    O: Output<Item = C::Item>,
    C::Item: std::ops::Add<Output = C::Item>,
{
    inclusive_scan_with(first, last, out, init, |a, b| a + b)
}

/// Exclusive scan: the i-th output is `init op x0 op ... op x(i-1)`, so
/// the first output is `init` itself and the last input never appears.
pub fn exclusive_scan_by<C, O, F>(
    first: C,
    last: C,
    out: &mut O,
    init: C::Item,
    mut op: F,
) -> Result<usize, EngineError>
where
    C: Readable + Forward,
    O: Output<Item = C::Item>,
    F: FnMut(C::Item, C::Item) -> C::Item,
{
    let mut acc = init;
    let mut n = 0;
    let mut it = first;
    while it != last {
        // Save before emitting: the element folds in only after the write,
        // so an aliased destination cannot corrupt the accumulation.
        let x = it.read();
        let saved = acc.clone();
        out.put(saved)?;
        acc = op(acc, x);
        n += 1;
        it = it.next();
    }
    Ok(n)
}

/// [`exclusive_scan_by`] under addition.
pub fn exclusive_scan<C, O>(
    first: C,
    last: C,
    out: &mut O,
    init: C::Item,
) -> Result<usize, EngineError>
where
    C: Readable + Forward,
    O: Output<Item = C::Item>,
    C::Item: std::ops::Add<Output = C::Item>,
{
    exclusive_scan_by(first, last, out, init, |a, b| a + b)
}

/// Inclusive scan over `map(x)` instead of `x`.
pub fn transform_inclusive_scan<C, O, T, FO, FM>(
    first: C,
    last: C,
    out: &mut O,
    init: T,
    mut op: FO,
    mut map: FM,
) -> Result<usize, EngineError>
where
    C: Readable + Forward,
    O: Output<Item = T>,
    T: Clone,
    FO: FnMut(T, T) -> T,
    FM: FnMut(C::Item) -> T,
{
    let mut acc = init;
    let mut n = 0;
    let mut it = first;
    while it != last {
        acc = op(acc, map(it.read()));
        out.put(acc.clone())?;
        n += 1;
        it = it.next();
    }
    Ok(n)
}

/// Exclusive scan over `map(x)` instead of `x`.
pub fn transform_exclusive_scan<C, O, T, FO, FM>(
    first: C,
    last: C,
    out: &mut O,
    init: T,
    mut op: FO,
    mut map: FM,
) -> Result<usize, EngineError>
where
    C: Readable + Forward,
    O: Output<Item = T>,
    T: Clone,
    FO: FnMut(T, T) -> T,
    FM: FnMut(C::Item) -> T,
{
    let mut acc = init;
    let mut n = 0;
    let mut it = first;
    while it != last {
        let mapped = map(it.read());
        let saved = acc.clone();
        out.put(saved)?;
        acc = op(acc, mapped);
        n += 1;
        it = it.next();
    }
    Ok(n)
}

/// Fill the range with successively incremented values starting at
/// `value`.
pub fn iota<C>(first: C, last: C, value: C::Item)
where
    C: Writable + Forward,
    C::Item: std::ops::Add<Output = C::Item> + From<u8>,
{
    let mut v = value;
    let mut it = first;
    while it != last {
        it.write(v.clone());
        v = v + C::Item::from(1u8);
        it = it.next();
    }
}
