//! # Introduction
//!
//! An in-place quicksort over a fixed list of one hundred integers. The list is checked with
//! [`orst::is_sorted`] before and after sorting, and then printed one value per line.
//!
//! ```
//! use duet_sort::{orst, sample};
//!
//! let mut list = sample::random_list();
//! assert!(!orst::is_sorted(&list));
//!
//! let sorted = orst::quicksort(&mut list);
//! assert!(orst::is_sorted(sorted));
//! ```

pub mod orst;
pub mod sample;

use std::io::{self, Write};

use anyhow::Context;
use clap::{Args, Subcommand};
use orst::{is_sorted, LomutoSorter, Sorter};
use tracing::{debug, info};

/// Run the quicksort demo. Build the `duet` binary and run `duet sort --help` to see what
/// options are available
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct SortArgs {
    #[command(subcommand)]
    command: SortCommands,
}

#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum SortCommands {
    /// Check, sort and print the list. Prints the sortedness of the input, the sortedness of
    /// the output and then every sorted value on its own line.
    Run {
        /// Comma separated integers to sort instead of the built in list of one hundred.
        #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
        input: Option<Vec<i32>>,

        /// Show a progress bar on stderr while sorting.
        #[arg(long, required = false)]
        progress: bool,
    },

    /// Count the comparisons and swaps made on sorted, reversed and random inputs.
    Bench {
        /// Largest input size to measure.
        #[arg(short, long, default_value_t = 10_000)]
        max_size: usize,
    },
}

impl SortArgs {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            SortCommands::Run { input, progress } => {
                let list = input.unwrap_or_else(sample::random_list);
                info!(len = list.len(), "sorting list");

                let stdout = io::stdout();
                let mut out = stdout.lock();
                end_of_output(run_demo(list, LomutoSorter { progress }, &mut out))
                    .context("Unable to print the sorted list")?;
            }
            SortCommands::Bench { max_size } => orst::benchmark::run_orst(max_size),
        }

        Ok(())
    }
}

/// Treats a closed pipe (`duet sort run | head`) as the reader having seen enough.
pub fn end_of_output(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed early");
            Ok(())
        }
        other => other,
    }
}

/// Writes `is_sorted` of `list`, sorts it with `sorter`, writes `is_sorted` of the result and
/// then every sorted value on its own line.
///
/// ```
/// use duet_sort::{orst::LomutoSorter, run_demo};
///
/// let mut out = Vec::new();
/// run_demo(vec![3, 1, 2], LomutoSorter::default(), &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "false\ntrue\n1\n2\n3\n");
/// ```
pub fn run_demo<S, W>(mut list: Vec<i32>, sorter: S, out: &mut W) -> io::Result<()>
where
    S: Sorter<i32>,
    W: Write,
{
    let before = is_sorted(&list);
    sorter.sort(&mut list);
    let after = is_sorted(&list);

    writeln!(out, "{before}")?;
    writeln!(out, "{after}")?;
    for value in &list {
        writeln!(out, "{value}")?;
    }

    Ok(())
}
