//! Implicit binary heap over random-access ranges
//!
//! A max-heap (under the supplied "less") laid out in place via index
//! arithmetic: `parent = (i - 1) / 2`, `children = 2i + 1, 2i + 2`. One
//! sift engine serves `make_heap` (O(n) bottom-up build), `push_heap` /
//! `pop_heap` (O(log n)), and `sort_heap` (repeated pop, O(n log n)),
//! which is also what `partial_sort` runs on.
//!
//! [`HeapView`] is a thin adapter: a borrowed base cursor plus a logical
//! length, never an owned copy of the range.

use crate::compare::natural_less;
use crate::cursor::{RandomAccess, Readable, Writable};
use crate::swap_at;

/// Implicit-heap view of the `len` elements starting at `base`.
#[derive(Debug)]
pub(crate) struct HeapView<C> {
    base: C,
    len: usize,
}

impl<C> HeapView<C>
where
    C: Writable + RandomAccess,
{
    pub(crate) fn new(base: C, len: usize) -> Self {
        Self { base, len }
    }

    fn at(&self, i: usize) -> C {
        self.base.advance_by(i as isize)
    }

    /// Restore the heap at `node`, assuming both subtrees are heaps.
    pub(crate) fn sift_down<F>(&self, mut node: usize, less: &mut F)
    where
        F: FnMut(&C::Item, &C::Item) -> bool,
    {
        loop {
            let left = 2 * node + 1;
            if left >= self.len {
                break;
            }
            let right = left + 1;
            let mut top = left;
            if right < self.len && less(&self.at(left).read(), &self.at(right).read()) {
                top = right;
            }
            if !less(&self.at(node).read(), &self.at(top).read()) {
                break;
            }
            swap_at(&self.at(node), &self.at(top));
            node = top;
        }
    }

    /// Bubble the element at `node` toward the root while it outranks its
    /// parent.
    pub(crate) fn sift_up<F>(&self, mut node: usize, less: &mut F)
    where
        F: FnMut(&C::Item, &C::Item) -> bool,
    {
        while node > 0 {
            let parent = (node - 1) / 2;
            if !less(&self.at(parent).read(), &self.at(node).read()) {
                break;
            }
            swap_at(&self.at(parent), &self.at(node));
            node = parent;
        }
    }

    /// Bottom-up heapify in O(n).
    pub(crate) fn build<F>(&self, less: &mut F)
    where
        F: FnMut(&C::Item, &C::Item) -> bool,
    {
        for i in (0..self.len / 2).rev() {
            self.sift_down(i, less);
        }
    }
}

/// Arrange `[first, last)` into a max-heap under `less`.
pub fn make_heap_by<C, F>(first: C, last: C, mut less: F)
where
    C: Writable + RandomAccess,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let len = first.distance_to(&last).max(0) as usize;
    HeapView::new(first, len).build(&mut less);
}

/// [`make_heap_by`] under the natural order.
pub fn make_heap<C>(first: C, last: C)
where
    C: Writable + RandomAccess,
    C::Item: Ord,
{
    make_heap_by(first, last, natural_less);
}

/// Absorb the element at `last - 1` into the heap `[first, last - 1)`.
pub fn push_heap_by<C, F>(first: C, last: C, mut less: F)
where
    C: Writable + RandomAccess,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let len = first.distance_to(&last).max(0) as usize;
    if len > 1 {
        HeapView::new(first, len).sift_up(len - 1, &mut less);
    }
}

/// [`push_heap_by`] under the natural order.
pub fn push_heap<C>(first: C, last: C)
where
    C: Writable + RandomAccess,
    C::Item: Ord,
{
    push_heap_by(first, last, natural_less);
}

/// Move the heap maximum to `last - 1` and restore the heap on the rest.
pub fn pop_heap_by<C, F>(first: C, last: C, mut less: F)
where
    C: Writable + RandomAccess,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let len = first.distance_to(&last).max(0) as usize;
    if len > 1 {
        swap_at(&first, &first.advance_by(len as isize - 1));
        HeapView::new(first, len - 1).sift_down(0, &mut less);
    }
}

/// [`pop_heap_by`] under the natural order.
pub fn pop_heap<C>(first: C, last: C)
where
    C: Writable + RandomAccess,
    C::Item: Ord,
{
    pop_heap_by(first, last, natural_less);
}

/// Sort a heap range ascending by repeatedly popping the maximum.
pub fn sort_heap_by<C, F>(first: C, last: C, mut less: F)
where
    C: Writable + RandomAccess,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let len = first.distance_to(&last).max(0) as usize;
    for i in (1..len).rev() {
        swap_at(&first, &first.advance_by(i as isize));
        HeapView::new(first.clone(), i).sift_down(0, &mut less);
    }
}

/// [`sort_heap_by`] under the natural order.
pub fn sort_heap<C>(first: C, last: C)
where
    C: Writable + RandomAccess,
    C::Item: Ord,
{
    sort_heap_by(first, last, natural_less);
}

/// Length of the longest heap prefix, as a cursor one past it.
pub fn is_heap_until_by<C, F>(first: C, last: C, mut less: F) -> C
where
    C: Readable + RandomAccess,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let len = first.distance_to(&last).max(0) as usize;
    for i in 1..len {
        let parent = first.advance_by(((i - 1) / 2) as isize);
        if less(&parent.read(), &first.advance_by(i as isize).read()) {
            return first.advance_by(i as isize);
        }
    }
    last
}

/// [`is_heap_until_by`] under the natural order.
pub fn is_heap_until<C>(first: C, last: C) -> C
where
    C: Readable + RandomAccess,
    C::Item: Ord,
{
    is_heap_until_by(first, last, natural_less)
}

/// Whether the whole range satisfies the heap invariant.
pub fn is_heap_by<C, F>(first: C, last: C, less: F) -> bool
where
    C: Readable + RandomAccess,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    is_heap_until_by(first, last.clone(), less) == last
}

/// [`is_heap_by`] under the natural order.
pub fn is_heap<C>(first: C, last: C) -> bool
where
    C: Readable + RandomAccess,
    C::Item: Ord,
{
    is_heap_by(first, last, natural_less)
}
