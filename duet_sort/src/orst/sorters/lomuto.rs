use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, trace};

use crate::orst::{range::range, Sorter};

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort) using the Lomuto
/// partition scheme.
///
/// # Usage
///```
/// use duet_sort::orst::{LomutoSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// LomutoSorter::default().sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Algorithm
///
/// The last element of a range is taken as the pivot. A single scanning index walks the rest of
/// the range and every element less than *or equal to* the pivot is swapped into a growing
/// region at the front. The pivot is then swapped to just after that region, which is its final
/// sorted position, and both sides are sorted recursively.
///
/// The pivot choice is fixed, so already sorted input (and input made of a single repeated
/// value) degrades to quadratic time and a recursion as deep as the input is long.
#[derive(Debug, Default, Clone, Copy)]
pub struct LomutoSorter {
    /// Draw an [`indicatif`] progress bar on stderr, ticking once per partition.
    pub progress: bool,
}

impl<T> Sorter<T> for LomutoSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        let pb = if self.progress {
            let pb = ProgressBar::new(max_partitions(slice.len()) as u64);
            if let Ok(style) = ProgressStyle::with_template(
                "Lomuto Quick Sort -> {spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] Partitions: ({pos}, at most {len})",
            ) {
                pb.set_style(style);
            }
            pb
        } else {
            ProgressBar::hidden()
        };

        lomuto_quicksort(slice, &pb);
        pb.finish_and_clear();
    }
}

/// Upper bound on the partitions needed for `len` elements. Each partition fixes one pivot and
/// the last element of a range needs none.
pub fn max_partitions(len: usize) -> usize {
    len.saturating_sub(1)
}

/// Work done by one quicksort run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SortStats {
    /// Number of calls to the partition step.
    pub partitions: usize,
    /// Number of swaps between two distinct positions. Self-swaps are not counted.
    pub swaps: usize,
}

/// Sorts `arr` in place and hands the same slice back.
///
/// ```
/// use duet_sort::orst::quicksort;
///
/// let mut arr = vec![3, 1, 2];
/// let sorted = quicksort(&mut arr);
/// assert_eq!(sorted, [1, 2, 3]);
/// ```
pub fn quicksort<T: Ord>(arr: &mut [T]) -> &mut [T] {
    lomuto_quicksort(arr, &ProgressBar::hidden());
    arr
}

/// Like [`quicksort`] but reports how many partitions and effective swaps it took.
pub fn quicksort_with_stats<T: Ord>(arr: &mut [T]) -> SortStats {
    lomuto_quicksort(arr, &ProgressBar::hidden())
}

fn lomuto_quicksort<T: Ord>(arr: &mut [T], pb: &ProgressBar) -> SortStats {
    let mut stats = SortStats::default();

    if let Some(high) = arr.len().checked_sub(1) {
        quicksort_range(arr, 0, high, &mut stats, pb);
    }

    debug!(
        len = arr.len(),
        partitions = stats.partitions,
        swaps = stats.swaps,
        "lomuto quicksort finished"
    );

    stats
}

// Sorts the inclusive range `low..=high`.
fn quicksort_range<T: Ord>(
    arr: &mut [T],
    low: usize,
    high: usize,
    stats: &mut SortStats,
    pb: &ProgressBar,
) {
    if low < high {
        let pi = partition(arr, low, high, stats);
        pb.inc(1);
        trace!(low, high, pivot_index = pi, "partitioned");

        if pi > low {
            quicksort_range(arr, low, pi - 1, stats, pb);
        }
        quicksort_range(arr, pi + 1, high, stats, pb);
    }
}

// Returns the final position of the pivot taken from `high`.
fn partition<T: Ord>(arr: &mut [T], low: usize, high: usize, stats: &mut SortStats) -> usize {
    // Everything in `low..boundary` is <= the pivot. The pivot stays at `high` until the end
    // because `boundary <= j < high`.
    let mut boundary = low;

    for j in range(low, high) {
        if arr[j] <= arr[high] {
            swap(arr, boundary, j, stats);
            boundary += 1;
        }
    }

    swap(arr, boundary, high, stats);
    stats.partitions += 1;

    boundary
}

#[inline]
fn swap<T>(arr: &mut [T], a: usize, b: usize, stats: &mut SortStats) {
    if a != b {
        arr.swap(a, b);
        stats.swaps += 1;
    }
}
