//! # Capability-Typed Sequence Algorithms
//!
//! This library implements a generic sequence-algorithm engine: a small set
//! of orthogonal cursor capabilities (read, write, forward, backward,
//! random access) and a library of in-place and copying algorithms that are
//! generic over them, so the same `stable_partition` or `inplace_merge`
//! runs unchanged over arrays, linked lists, and synthetic sequences.
//!
//! ## Core model
//!
//! 1. **Cursors are values**: a cursor denotes a position; movement returns
//!    a new cursor, it never mutates one in place.
//! 2. **Capabilities are traits**: an algorithm states the weakest cursor it
//!    can work with as a trait bound, checked at instantiation.
//! 3. **Fast paths are probed once**: [`cursor::distance`] and
//!    [`cursor::advance`] ask the cursor for an O(1) path a single time at
//!    the call head; element-wise loops never re-dispatch.
//!
//! ## Usage example
//!
//! ```
//! use strider::seq::Slots;
//! use strider::select::nth_element;
//! use strider::cursor::Readable;
//!
//! let s = Slots::from(vec![3, 1, 4, 1, 5, 9, 2, 6]);
//! nth_element(s.begin(), s.cursor_at(3), s.end());
//! assert_eq!(s.cursor_at(3).read(), 3);
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules - leaves first, algorithms layered on the capability model
pub mod cursor;    // Capability model: traits + distance/advance dispatch
pub mod compare;   // Comparator and functor vocabulary
pub mod seq;       // Concrete sequence backings and output sinks
pub mod query;     // Non-modifying algorithms
pub mod modify;    // Modifying algorithms
pub mod partition; // Unstable and stable partitioning
pub mod heap;      // Implicit binary heap over random-access ranges
pub mod select;    // Order statistics and the sort family
pub mod merge;     // Copying merge and in-place merge
pub mod set_ops;   // Sorted-range set algebra
pub mod permute;   // Lexicographic permutation stepping
pub mod numeric;   // Folds and prefix scans

// Re-exports for convenience
pub use cursor::{
    advance, distance, retreat, swap_at, Bidirectional, Cursor, Forward, MultiPass,
    Output, RandomAccess, Readable, Writable,
};
pub use seq::{Chain, Slots};

use thiserror::Error;

/// Errors surfaced by copying algorithms that target a bounded destination.
///
/// The engine has no retryable failures: every algorithm is a synchronous
/// pure computation, so an error is immediate and local to the call.
/// Capability violations (e.g. a negative [`advance`] on a forward-only
/// cursor) are programming errors and panic instead; precondition
/// violations (unsorted input to a sorted-range algorithm) yield
/// unspecified but memory-safe output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A bounded destination ran out of room mid-algorithm.
    #[error("destination range exhausted after {written} writes")]
    DestinationFull {
        /// Elements emitted before the destination filled up.
        written: usize,
    },
}
