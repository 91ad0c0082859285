//! Contiguous backing with random-access cursors
//!
//! `Slots<T>` owns its elements behind a `RefCell` so that several live
//! cursor values can write through it during a single-threaded algorithm
//! call. Each `SlotCursor` is a borrowed backing pointer plus an index;
//! position `len` is the end sentinel.

use std::cell::RefCell;
use std::fmt;

use crate::cursor::{Bidirectional, Cursor, Forward, MultiPass, RandomAccess, Readable, Writable};

/// Contiguous sequence storage. The array backing of the engine.
pub struct Slots<T> {
    cells: RefCell<Vec<T>>,
}

impl<T: Clone> Slots<T> {
    /// Number of elements.
    pub fn len(&self) -> usize {
        self.cells.borrow().len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.borrow().is_empty()
    }

    /// Cursor at the first position.
    pub fn begin(&self) -> SlotCursor<'_, T> {
        self.cursor_at(0)
    }

    /// End sentinel cursor, one past the last position. Never dereferenced.
    pub fn end(&self) -> SlotCursor<'_, T> {
        self.cursor_at(self.len())
    }

    /// Cursor at position `at`; `at == len()` is the end sentinel.
    pub fn cursor_at(&self, at: usize) -> SlotCursor<'_, T> {
        assert!(at <= self.len(), "cursor position {at} outside sequence");
        SlotCursor { seq: self, at }
    }

    /// Copy of the current contents, for inspection.
    pub fn snapshot(&self) -> Vec<T> {
        self.cells.borrow().clone()
    }

    /// Consume the backing and return its contents.
    pub fn into_vec(self) -> Vec<T> {
        self.cells.into_inner()
    }
}

impl<T> From<Vec<T>> for Slots<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            cells: RefCell::new(values),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Slots<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slots").field(&self.cells.borrow()).finish()
    }
}

/// Random-access cursor into a [`Slots`] backing.
pub struct SlotCursor<'a, T> {
    seq: &'a Slots<T>,
    at: usize,
}

impl<T: fmt::Debug> fmt::Debug for SlotCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotCursor").field("at", &self.at).finish()
    }
}

impl<T> Clone for SlotCursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq,
            at: self.at,
        }
    }
}

impl<T> PartialEq for SlotCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.seq, other.seq) && self.at == other.at
    }
}

impl<T: Clone> Cursor for SlotCursor<'_, T> {}

impl<T: Clone> Readable for SlotCursor<'_, T> {
    type Item = T;

    fn read(&self) -> T {
        let cells = self.seq.cells.borrow();
        assert!(self.at < cells.len(), "read at end sentinel");
        cells[self.at].clone()
    }
}

impl<T: Clone> Writable for SlotCursor<'_, T> {
    fn write(&self, value: T) {
        let mut cells = self.seq.cells.borrow_mut();
        assert!(self.at < cells.len(), "write at end sentinel");
        cells[self.at] = value;
    }
}

impl<T: Clone> Forward for SlotCursor<'_, T> {
    fn next(&self) -> Self {
        self.advance_by(1)
    }

    #[inline]
    fn fast_distance_to(&self, other: &Self) -> Option<isize> {
        Some(self.distance_to(other))
    }

    #[inline]
    fn fast_advance(&self, n: isize) -> Option<Self> {
        Some(self.advance_by(n))
    }
}

impl<T: Clone> MultiPass for SlotCursor<'_, T> {}

impl<T: Clone> Bidirectional for SlotCursor<'_, T> {
    fn prev(&self) -> Self {
        self.advance_by(-1)
    }
}

impl<T: Clone> RandomAccess for SlotCursor<'_, T> {
    fn advance_by(&self, n: isize) -> Self {
        let target = self.at as isize + n;
        assert!(
            target >= 0 && target as usize <= self.seq.len(),
            "advance_by {n} from position {} leaves the sequence",
            self.at
        );
        Self {
            seq: self.seq,
            at: target as usize,
        }
    }

    fn distance_to(&self, other: &Self) -> isize {
        debug_assert!(std::ptr::eq(self.seq, other.seq));
        other.at as isize - self.at as isize
    }

    fn precedes(&self, other: &Self) -> bool {
        self.at < other.at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursors_are_positions_not_allocations() {
        let s = Slots::from(vec![1, 2, 3]);
        assert_eq!(s.cursor_at(1), s.begin().next());
        assert_ne!(s.begin(), s.end());
    }

    #[test]
    fn writes_through_one_cursor_are_seen_by_another() {
        let s = Slots::from(vec![1, 2, 3]);
        let a = s.cursor_at(1);
        let b = s.cursor_at(1);
        a.write(9);
        assert_eq!(b.read(), 9);
    }

    #[test]
    #[should_panic(expected = "end sentinel")]
    fn reading_the_end_sentinel_panics() {
        let s = Slots::from(vec![1]);
        let _ = s.end().read();
    }

    #[test]
    #[should_panic(expected = "leaves the sequence")]
    fn jumping_outside_the_sequence_panics() {
        let s = Slots::from(vec![1, 2]);
        let _ = s.begin().advance_by(5);
    }
}
