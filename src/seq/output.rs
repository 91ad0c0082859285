//! Output sinks
//!
//! Copying algorithms emit through [`Output`]. `Vec<T>` is the unbounded
//! appending sink; [`RangeOutput`] bounds emission by a writable cursor
//! range and turns overrun into an explicit error instead of writing past
//! the destination.

use crate::cursor::{Forward, Output, Writable};
use crate::EngineError;

impl<T> Output for Vec<T> {
    type Item = T;

    fn put(&mut self, value: T) -> Result<(), EngineError> {
        self.push(value);
        Ok(())
    }
}

/// Bounded sink over a writable cursor range `[at, last)`.
#[derive(Debug, Clone)]
pub struct RangeOutput<C> {
    at: C,
    last: C,
    written: usize,
}

impl<C: Writable + Forward> RangeOutput<C> {
    /// Sink that writes into `[first, last)` front to back.
    pub fn new(first: C, last: C) -> Self {
        Self {
            at: first,
            last,
            written: 0,
        }
    }

    /// Number of elements written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// The cursor one past the last written position.
    pub fn position(&self) -> C {
        self.at.clone()
    }
}

impl<C: Writable + Forward> Output for RangeOutput<C> {
    type Item = C::Item;

    fn put(&mut self, value: Self::Item) -> Result<(), EngineError> {
        if self.at == self.last {
            return Err(EngineError::DestinationFull {
                written: self.written,
            });
        }
        self.at.write(value);
        self.at = self.at.next();
        self.written += 1;
        Ok(())
    }
}
