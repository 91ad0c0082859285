//! Capability-downgrade wrappers
//!
//! Wrap any cursor to hide its richer capabilities. `ForwardOnly` keeps
//! read/write/next but drops backward movement and, critically, does not
//! forward the `fast_*` probes - so `distance`/`advance` take their
//! walking paths and the forward-only algorithm variants get exercised
//! over a random-access backing.

use crate::cursor::{Bidirectional, Cursor, Forward, MultiPass, Readable, Writable};

/// A cursor stripped down to the forward (multi-pass) capability set.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardOnly<C>(pub C);

impl<C: Cursor> Cursor for ForwardOnly<C> {}

impl<C: Readable> Readable for ForwardOnly<C> {
    type Item = C::Item;

    fn read(&self) -> Self::Item {
        self.0.read()
    }
}

impl<C: Writable> Writable for ForwardOnly<C> {
    fn write(&self, value: Self::Item) {
        self.0.write(value);
    }
}

impl<C: Forward> Forward for ForwardOnly<C> {
    fn next(&self) -> Self {
        ForwardOnly(self.0.next())
    }
    // fast_* probes intentionally left at their None defaults
}

impl<C: MultiPass> MultiPass for ForwardOnly<C> {}

/// A cursor stripped down to the bidirectional capability set.
#[derive(Debug, Clone, PartialEq)]
pub struct BidirOnly<C>(pub C);

impl<C: Cursor> Cursor for BidirOnly<C> {}

impl<C: Readable> Readable for BidirOnly<C> {
    type Item = C::Item;

    fn read(&self) -> Self::Item {
        self.0.read()
    }
}

impl<C: Writable> Writable for BidirOnly<C> {
    fn write(&self, value: Self::Item) {
        self.0.write(value);
    }
}

impl<C: Forward> Forward for BidirOnly<C> {
    fn next(&self) -> Self {
        BidirOnly(self.0.next())
    }
}

impl<C: MultiPass> MultiPass for BidirOnly<C> {}

impl<C: Bidirectional> Bidirectional for BidirOnly<C> {
    fn prev(&self) -> Self {
        BidirOnly(self.0.prev())
    }
}
