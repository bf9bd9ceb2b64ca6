//! # Introduction
//!
//! Dynamic dispatch over a three level override chain, `A <- B <- C`. Four handles are all
//! declared as `A`. Three of them hold an `A`, a `B` and a `C`, and calling `call` through them
//! prints the name of the runtime class. The fourth holds nothing, so calling through it fails
//! with an "operation on None" error.
//!
//! ```
//! use duet_dispatch::{error::DispatchError, program::Program};
//!
//! let program = Program::new().unwrap();
//! let mut out = Vec::new();
//!
//! let err = program.run(1, &mut out).unwrap_err();
//! assert_eq!(out, b"A\nB\nC\n");
//! assert!(matches!(err, DispatchError::OperationOnNone { .. }));
//! ```

pub mod class;
pub mod error;
pub mod hierarchy;
pub mod program;

use std::io;

use clap::{Args, Subcommand};
use program::Program;

/// Run the dispatch demo. Build the `duet` binary and run `duet dispatch --help` to see what
/// options are available
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct DispatchArgs {
    #[command(subcommand)]
    command: DispatchCommands,
}

#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum DispatchCommands {
    /// Call `call` through the handles a, b, c and d. Prints A, B and C, then fails because d
    /// holds nothing.
    Run {
        /// Argument passed to every call. The classes ignore it.
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        arg: i32,
    },

    /// Show the declared and runtime class of every handle and the method table of every
    /// class.
    Explain,
}

impl DispatchArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let program = Program::new()?;

        match self.command {
            DispatchCommands::Run { arg } => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                program.run(arg, &mut out)?;
            }
            DispatchCommands::Explain => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                program.explain(&mut out)?;
            }
        }

        Ok(())
    }
}
