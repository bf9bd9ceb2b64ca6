//! A half-open integer range that materialises into a fresh [`Vec`].
//!
//! Unlike [`std::ops::Range`], [`range()`] allocates the whole sequence up front. The quicksort
//! and the sortedness check drive their loops over it.

use std::ops::AddAssign;

/// Returns `[start, start + 1, ..., end - 1]` as a newly allocated vector. The vector is empty
/// when `start >= end`.
///
/// Works for any integer type that can be built from a `u8`, so it serves both `i32` values and
/// `usize` indices.
///
/// # Usage
///```
/// use duet_sort::orst::range::range;
///
/// assert_eq!(range(0, 3), vec![0, 1, 2]);
/// assert!(range(5, 5).is_empty());
/// assert!(range(7_i32, -2).is_empty());
///```
pub fn range<T>(start: T, end: T) -> Vec<T>
where
    T: Copy + PartialOrd + AddAssign + From<u8>,
{
    let one = T::from(1);
    let mut result = Vec::new();

    let mut i = start;
    while i < end {
        result.push(i);
        i += one;
    }

    result
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn counts_up_to_end() {
        assert_eq!(range(0, 3), vec![0, 1, 2]);
        assert_eq!(range(-2_i32, 2), vec![-2, -1, 0, 1]);
    }

    #[test]
    fn end_is_excluded() {
        let r = range(1_usize, 10);
        assert_eq!(r.len(), 9);
        assert_eq!(r.first(), Some(&1));
        assert_eq!(r.last(), Some(&9));
    }

    #[test]
    fn simple_edge_cases() {
        assert!(range(5, 5).is_empty());
        assert!(range(6, 5).is_empty());
        assert_eq!(range(4, 5), vec![4]);
    }
}
