//! Concrete sequence backings and output sinks
//!
//! The algorithm library never sees these types by name - it only sees the
//! capability traits from [`crate::cursor`]. The backings here exist so
//! the crate is usable and testable end to end:
//!
//! - [`Slots`]: contiguous storage, random-access cursors
//! - [`Chain`]: arena-backed doubly-linked list, bidirectional cursors
//! - [`ForwardOnly`] / [`BidirOnly`]: capability-downgrade wrappers, for
//!   driving the weaker-capability algorithm variants over any backing
//! - [`RangeOutput`] and the `Vec<T>` impl of [`crate::cursor::Output`]:
//!   bounded and appending sinks
//!
//! A backing outlives every cursor derived from it for the duration of an
//! algorithm call; cursors borrow, they never own.

mod chain;
mod output;
mod restrict;
mod slots;

pub use chain::{Chain, ChainCursor};
pub use output::RangeOutput;
pub use restrict::{BidirOnly, ForwardOnly};
pub use slots::{SlotCursor, Slots};
