//! Cursor capability model
//!
//! A cursor is an opaque position inside a sequence. Capabilities are
//! expressed as a ladder of traits so each algorithm can demand exactly
//! the movement and access it needs:
//!
//! - [`Cursor`]: position equality (the base capability)
//! - [`Readable`] / [`Writable`]: element access through the position
//! - [`Forward`] → [`MultiPass`] → [`Bidirectional`] → [`RandomAccess`]:
//!   movement, from single-pass stepping up to O(1) jumps
//! - [`Output`]: a write-only sink whose advance is folded into `put`
//!
//! [`distance`] and [`advance`] dispatch over whichever capability the
//! concrete cursor exposes. The probe (`fast_distance_to`/`fast_advance`)
//! happens once per call, never per element, so the walking loops stay
//! branch-free over longer ranges.

use crate::EngineError;

/// Base capability: a position-denoting value.
///
/// Two cursors are equal iff they denote the same position in the same
/// sequence. Cursors are cheap to clone; a cursor's identity is its
/// position, not its allocation. No algorithm mutates a cursor value in
/// place - every positional step returns a new cursor.
pub trait Cursor: Clone + PartialEq {}

/// Read capability: the element at the cursor's position can be observed.
///
/// Reading an end sentinel is a programming error and panics.
pub trait Readable: Cursor {
    /// Element type produced by [`read`](Readable::read).
    type Item: Clone;

    /// Return a copy of the element at this position.
    fn read(&self) -> Self::Item;
}

/// Write capability: the element at the cursor's position can be replaced.
///
/// The cursor value itself stays immutable; the write goes to the storage
/// the cursor references. Writing an end sentinel panics.
pub trait Writable: Readable {
    /// Replace the element at this position.
    fn write(&self, value: Self::Item);
}

/// Forward movement: the cursor can step one position later.
pub trait Forward: Cursor {
    /// The position one step later. Total whenever `self` is not the end
    /// sentinel; stepping past the end panics.
    fn next(&self) -> Self;

    /// O(1) signed distance to `other`, if this cursor is random-access.
    ///
    /// [`distance`] probes this once at its call head; the default says
    /// "no fast path" and forces the counted walk.
    #[inline]
    fn fast_distance_to(&self, _other: &Self) -> Option<isize> {
        None
    }

    /// O(1) jump by `n` (possibly negative), if this cursor is
    /// random-access. Probed once by [`advance`].
    #[inline]
    fn fast_advance(&self, _n: isize) -> Option<Self> {
        None
    }
}

/// Marker for multi-pass cursors: copies of the cursor may be advanced and
/// re-dereferenced independently without invalidating each other.
///
/// Algorithms that must reread a position (`adjacent_find`, `search`,
/// `find_end`, `unique`, `inplace_merge`) are bounded on this marker so a
/// single-pass backing (e.g. a channel-fed cursor) cannot be handed to
/// them by mistake.
pub trait MultiPass: Forward {}

/// Backward movement, the inverse of [`Forward::next`].
pub trait Bidirectional: MultiPass {
    /// The position one step earlier. Stepping before the first position
    /// panics.
    fn prev(&self) -> Self;
}

/// Random access: O(1) jumps, signed distances, and a position order.
///
/// Implementors must also override [`Forward::fast_distance_to`] and
/// [`Forward::fast_advance`] so the free-function dispatch can find the
/// O(1) path.
pub trait RandomAccess: Bidirectional {
    /// The position `n` steps away; `n` may be negative. Jumping outside
    /// `[begin, end]` panics.
    fn advance_by(&self, n: isize) -> Self;

    /// Signed position difference `other - self`.
    fn distance_to(&self, other: &Self) -> isize;

    /// Position order: `true` iff `self` is strictly earlier than `other`.
    fn precedes(&self, other: &Self) -> bool;
}

/// Write-only output sink. Advancing is folded into [`put`](Output::put),
/// matching appending destinations that have no standalone position.
///
/// Bounded sinks convert overrun into [`EngineError::DestinationFull`]
/// instead of silently overrunning.
pub trait Output {
    /// Element type the sink accepts.
    type Item;

    /// Emit one element.
    fn put(&mut self, value: Self::Item) -> Result<(), EngineError>;
}

/// Number of steps from `first` to `last`.
///
/// Random-access cursors answer in O(1); otherwise the walk counts
/// `next()` calls, which requires `last` to be reachable from `first`.
/// The result is negative only on the O(1) path, when `last` precedes
/// `first`.
pub fn distance<C: Forward>(first: &C, last: &C) -> isize {
    if let Some(d) = first.fast_distance_to(last) {
        return d;
    }
    let mut it = first.clone();
    let mut n = 0;
    while it != *last {
        it = it.next();
        n += 1;
    }
    n
}

/// The cursor `n` steps after `it`.
///
/// Random-access cursors jump in O(1) and accept negative `n`. A cursor
/// without a fast path walks `next()` and supports only `n >= 0`; asking
/// it to move backward is a capability violation and panics.
pub fn advance<C: Forward>(it: C, n: isize) -> C {
    if let Some(jumped) = it.fast_advance(n) {
        return jumped;
    }
    assert!(
        n >= 0,
        "advance by {n}: cursor has no backward movement capability"
    );
    let mut it = it;
    for _ in 0..n {
        it = it.next();
    }
    it
}

/// The cursor `n` steps before `it`, for backward-movable cursors.
pub fn retreat<C: Bidirectional>(it: C, n: usize) -> C {
    if let Some(jumped) = it.fast_advance(-(n as isize)) {
        return jumped;
    }
    let mut it = it;
    for _ in 0..n {
        it = it.prev();
    }
    it
}

/// Exchange the elements at two positions.
pub fn swap_at<C: Writable>(a: &C, b: &C) {
    let va = a.read();
    let vb = b.read();
    a.write(vb);
    b.write(va);
}
