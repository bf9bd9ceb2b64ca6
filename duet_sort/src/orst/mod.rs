//! In-place quicksort using the Lomuto partition scheme, plus a range generator and two
//! sortedness checks.
//!
//! # Example
//!
//! ```
//! use duet_sort::orst::{is_sorted, LomutoSorter, Sorter};
//!
//! let mut slice = vec![1, 3, 2, 5, 4];
//! assert!(!is_sorted(&slice));
//!
//! LomutoSorter::default().sort(&mut slice);
//! assert_eq!(vec![1, 2, 3, 4, 5], slice);
//! assert!(is_sorted(&slice));
//! ```

pub mod benchmark;
pub mod range;
mod sorters;

pub use sorters::lomuto::{
    max_partitions, quicksort, quicksort_with_stats, LomutoSorter, SortStats,
};

use range::range;

/// The sorting algorithm must implement the trait `Sorter`.
pub trait Sorter<T>
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]);
}

/// Returns `false` if some `arr[i]` is smaller than `arr[i - 1]` for an `i` in
/// `range(1, arr.len() - 1)`, and `true` otherwise.
///
/// The loop bound excludes the last index, so the final pair is never looked at:
///
/// ```
/// use duet_sort::orst::is_sorted;
///
/// assert!(is_sorted(&[1, 2, 3]));
/// assert!(!is_sorted(&[2, 1, 3]));
///
/// // Only the final pair is out of order.
/// assert!(is_sorted(&[1, 2, 4, 3]));
/// ```
///
/// Use [`is_sorted_all`] when every pair has to be checked.
pub fn is_sorted<T: Ord>(arr: &[T]) -> bool {
    for i in range(1, arr.len().saturating_sub(1)) {
        if arr[i] < arr[i - 1] {
            return false;
        }
    }
    true
}

/// Returns `true` iff every adjacent pair of `arr` is in non-decreasing order.
pub fn is_sorted_all<T: Ord>(arr: &[T]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn vacuously_sorted() {
        let empty: [i32; 0] = [];
        assert!(is_sorted(&empty));
        assert!(is_sorted(&[42]));
        assert!(is_sorted_all(&empty));
        assert!(is_sorted_all(&[42]));
    }

    #[test]
    fn detects_early_inversion() {
        assert!(!is_sorted(&[1, 3, 2, 4]));
        assert!(!is_sorted_all(&[1, 3, 2, 4]));
    }

    #[test]
    fn last_pair_is_not_checked() {
        assert!(is_sorted(&[2, 1]));
        assert!(is_sorted(&[1, 2, 3, 0]));

        assert!(!is_sorted_all(&[2, 1]));
        assert!(!is_sorted_all(&[1, 2, 3, 0]));
    }

    #[test]
    fn equal_neighbours_are_sorted() {
        assert!(is_sorted(&[1, 1, 1, 2, 2]));
        assert!(is_sorted_all(&[1, 1, 1, 2, 2]));
    }
}
