use colored::Colorize;
use prettytable::{row, Table};
use rand::{self, Rng};
use std::{
    cell::Cell,
    fmt,
    rc::Rc,
    time::{Duration, Instant},
};
use tracing::debug;

use super::{is_sorted_all, quicksort_with_stats, SortStats};

const ZERO: usize = 0;
const ONE: usize = 1;
const HUNDRED: usize = 100;
const THOUSAND: usize = 1_000;
const TEN_THOUSAND: usize = 10_000;

/// Sizes measured by [`run_orst`] before the `max_size` cap is applied.
pub const SIZES: [usize; 5] = [ZERO, ONE, HUNDRED, THOUSAND, TEN_THOUSAND];

// In this the `elem` will be compared and the `comparison_counter` will be ignored.
#[derive(Clone)]
struct SortEvaluator<T> {
    elem: T,
    // Bumped on every comparison of `elem`. Shared by all the values of one run.
    comparison_counter: Rc<Cell<usize>>,
}

impl<T> SortEvaluator<T> {
    fn new(elem: T, comparison_counter: Rc<Cell<usize>>) -> Self {
        Self {
            elem,
            comparison_counter,
        }
    }

    fn tick(&self) {
        self.comparison_counter
            .set(self.comparison_counter.get() + 1);
    }
}

impl<T: Eq> Eq for SortEvaluator<T> {}

impl<T: PartialEq> PartialEq for SortEvaluator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.tick();
        self.elem == other.elem
    }
}

impl<T: PartialOrd> PartialOrd for SortEvaluator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.tick();
        self.elem.partial_cmp(&other.elem)
    }
}

// Must agree with `partial_cmp`, so it is written out by hand too.
impl<T: Ord> Ord for SortEvaluator<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.tick();
        self.elem.cmp(&other.elem)
    }
}

/// The shape of a benchmark input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// `0, 1, 2, ...`
    Sorted,
    /// `n - 1, n - 2, ..., 0`
    Reversed,
    /// Uniformly random `i32`s.
    Random,
}

impl InputKind {
    pub const ALL: [InputKind; 3] = [InputKind::Sorted, InputKind::Reversed, InputKind::Random];

    fn generate<R: Rng>(self, n: usize, rng: &mut R) -> Vec<i32> {
        match self {
            InputKind::Sorted => (0..n as i32).collect(),
            InputKind::Reversed => (0..n as i32).rev().collect(),
            InputKind::Random => (0..n).map(|_| rng.gen::<i32>()).collect(),
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Sorted => f.write_str("Sorted"),
            InputKind::Reversed => f.write_str("Reversed"),
            InputKind::Random => f.write_str("Random"),
        }
    }
}

/// Measurements of one quicksort run.
#[derive(Debug, Clone, Copy)]
pub struct BenchResult {
    pub kind: InputKind,
    pub size: usize,
    pub comparisons: usize,
    pub stats: SortStats,
    pub elapsed: Duration,
    /// Whether every adjacent pair of the output was in order.
    pub verified: bool,
}

/// Generates an input of the given shape and size, sorts it and reports the work done.
pub fn run_bench<R: Rng>(kind: InputKind, n: usize, rng: &mut R) -> BenchResult {
    let counter = Rc::new(Cell::new(0));
    let mut values = kind
        .generate(n, rng)
        .into_iter()
        .map(|elem| SortEvaluator::new(elem, counter.clone()))
        .collect::<Vec<_>>();

    let now = Instant::now();
    let stats = quicksort_with_stats(&mut values);
    let elapsed = now.elapsed();
    let comparisons = counter.get();

    let elems = values.into_iter().map(|v| v.elem).collect::<Vec<_>>();

    let result = BenchResult {
        kind,
        size: n,
        comparisons,
        stats,
        elapsed,
        verified: is_sorted_all(&elems),
    };
    debug!(?result, "benchmark run");
    result
}

/// Runs the benchmark for every size in [`SIZES`] up to and including `max_size`, printing one
/// table per size.
pub fn run_orst(max_size: usize) {
    let mut random = rand::thread_rng();

    for &n in SIZES.iter().filter(|&&n| n <= max_size) {
        println!(
            "{} {}",
            "List Size -> ".bold().underline().blue(),
            n.to_string().bold()
        );

        let mut table = Table::new();
        table.add_row(row![
            "Input".bold(),
            "Comparisons Made".bold(),
            "Effective Swaps".bold(),
            "Partitions".bold(),
            "Time Taken".bold(),
            "Verified".bold()
        ]);

        for kind in InputKind::ALL {
            let result = run_bench(kind, n, &mut random);
            let verified = if result.verified {
                "yes".green()
            } else {
                "NO".red()
            };

            table.add_row(row![
                kind.to_string(),
                result.comparisons.to_string(),
                result.stats.swaps.to_string(),
                result.stats.partitions.to_string(),
                format!("{:?}", result.elapsed),
                verified
            ]);
        }

        table.printstd();
        println!();
    }
}
