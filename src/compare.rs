//! Comparator and functor vocabulary
//!
//! Every algorithm parameter is one of a handful of named function shapes:
//!
//! | Shape | Bound | Used by |
//! |---|---|---|
//! | predicate | `FnMut(&T) -> bool` | find_if, partition, ... |
//! | equality comparer | `FnMut(&T, &T) -> bool` | equal, unique, search |
//! | ordering comparer ("less") | `FnMut(&T, &T) -> bool` | sort family, merge, set ops |
//! | three-way comparer | `FnMut(&T, &T) -> Ordering` | set-operation walks |
//! | unary / binary operation | `FnMut(T) -> U` / `FnMut(T, T) -> T` | transform, scans |
//! | generator | `FnMut() -> T` | generate, generate_n |
//!
//! The `*_by` variant of each ordered algorithm accepts a custom "less";
//! the plain variant uses [`natural_less`]. This is the single extension
//! point of the whole surface.

use std::cmp::Ordering;

/// The natural strict ordering, `a < b`.
pub fn natural_less<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

/// The natural equality, `a == b`.
pub fn natural_equal<T: PartialEq>(a: &T, b: &T) -> bool {
    a == b
}

/// The natural three-way comparison.
pub fn three_way<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Flip an ordering comparer's arguments, turning "less" into "greater".
///
/// Used by `prev_permutation` and the max-heap routines, which are the
/// min-flavoured algorithms run under the flipped order.
pub fn flip<T, F>(mut less: F) -> impl FnMut(&T, &T) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    move |a, b| less(b, a)
}

/// Bridge a strict "less" into a total [`Ordering`], for handing a cursor
/// comparer to the host slice sorts.
pub fn ordering_from_less<T, F>(mut less: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> bool,
{
    move |a, b| {
        if less(a, b) {
            Ordering::Less
        } else if less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_reverses_the_order() {
        let mut gt = flip(natural_less::<i32>);
        assert!(gt(&3, &2));
        assert!(!gt(&2, &3));
    }

    #[test]
    fn ordering_from_less_is_consistent() {
        let mut ord = ordering_from_less(natural_less::<i32>);
        assert_eq!(ord(&1, &2), Ordering::Less);
        assert_eq!(ord(&2, &1), Ordering::Greater);
        assert_eq!(ord(&2, &2), Ordering::Equal);
    }
}
