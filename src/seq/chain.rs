//! Doubly-linked backing with bidirectional cursors
//!
//! `Chain<T>` stores nodes in an arena `Vec` and links them by index, with
//! node 0 as a circular sentinel: `sentinel.next` is the first element,
//! `sentinel.prev` the last. A `ChainCursor` is a borrowed arena pointer
//! plus a node index, so cursor equality is node identity. There is no
//! random access - `distance`/`advance` fall back to their walking paths,
//! which is exactly what the linked backing is for in tests.

use std::cell::RefCell;
use std::fmt;

use crate::cursor::{Bidirectional, Cursor, Forward, MultiPass, Readable, Writable};

struct Node<T> {
    value: Option<T>, // None only at the sentinel
    prev: usize,
    next: usize,
}

/// Arena-backed doubly-linked sequence.
pub struct Chain<T> {
    nodes: RefCell<Vec<Node<T>>>,
}

const SENTINEL: usize = 0;

impl<T: Clone> Chain<T> {
    /// Build an empty chain.
    pub fn new() -> Self {
        Self {
            nodes: RefCell::new(vec![Node {
                value: None,
                prev: SENTINEL,
                next: SENTINEL,
            }]),
        }
    }

    /// Append a value at the back.
    pub fn push_back(&self, value: T) {
        let mut nodes = self.nodes.borrow_mut();
        let tail = nodes[SENTINEL].prev;
        let id = nodes.len();
        nodes.push(Node {
            value: Some(value),
            prev: tail,
            next: SENTINEL,
        });
        nodes[tail].next = id;
        nodes[SENTINEL].prev = id;
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len() - 1
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cursor at the first element.
    pub fn begin(&self) -> ChainCursor<'_, T> {
        let first = self.nodes.borrow()[SENTINEL].next;
        ChainCursor { chain: self, node: first }
    }

    /// End sentinel cursor.
    pub fn end(&self) -> ChainCursor<'_, T> {
        ChainCursor {
            chain: self,
            node: SENTINEL,
        }
    }

    /// Collect the current contents front to back.
    pub fn snapshot(&self) -> Vec<T> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::with_capacity(nodes.len() - 1);
        let mut at = nodes[SENTINEL].next;
        while at != SENTINEL {
            out.push(nodes[at].value.clone().expect("non-sentinel node holds a value"));
            at = nodes[at].next;
        }
        out
    }
}

impl<T: Clone> From<Vec<T>> for Chain<T> {
    fn from(values: Vec<T>) -> Self {
        let chain = Chain::new();
        for v in values {
            chain.push_back(v);
        }
        chain
    }
}

impl<T: fmt::Debug + Clone> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Chain").field(&self.snapshot()).finish()
    }
}

/// Bidirectional cursor into a [`Chain`].
pub struct ChainCursor<'a, T> {
    chain: &'a Chain<T>,
    node: usize,
}

impl<T> fmt::Debug for ChainCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainCursor").field("node", &self.node).finish()
    }
}

impl<T> Clone for ChainCursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            chain: self.chain,
            node: self.node,
        }
    }
}

impl<T> PartialEq for ChainCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.chain, other.chain) && self.node == other.node
    }
}

impl<T: Clone> Cursor for ChainCursor<'_, T> {}

impl<T: Clone> Readable for ChainCursor<'_, T> {
    type Item = T;

    fn read(&self) -> T {
        self.chain.nodes.borrow()[self.node]
            .value
            .clone()
            .expect("read at end sentinel")
    }
}

impl<T: Clone> Writable for ChainCursor<'_, T> {
    fn write(&self, value: T) {
        let mut nodes = self.chain.nodes.borrow_mut();
        assert!(self.node != SENTINEL, "write at end sentinel");
        nodes[self.node].value = Some(value);
    }
}

impl<T: Clone> Forward for ChainCursor<'_, T> {
    fn next(&self) -> Self {
        assert!(self.node != SENTINEL, "next past end sentinel");
        Self {
            chain: self.chain,
            node: self.chain.nodes.borrow()[self.node].next,
        }
    }
}

impl<T: Clone> MultiPass for ChainCursor<'_, T> {}

impl<T: Clone> Bidirectional for ChainCursor<'_, T> {
    fn prev(&self) -> Self {
        let nodes = self.chain.nodes.borrow();
        assert!(
            self.node != nodes[SENTINEL].next,
            "prev before first element"
        );
        Self {
            chain: self.chain,
            node: nodes[self.node].prev,
        }
    }
}
