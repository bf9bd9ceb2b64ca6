use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use duet_dispatch::{error::DispatchError, DispatchArgs};
use duet_sort::SortArgs;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None, styles=get_styles())] // Read from `Cargo.toml`
struct Cli {
    #[command(subcommand)]
    commands: Commands,

    /// Log more to stderr. Repeat for more detail (-v info, -vv debug, -vvv trace). `RUST_LOG`
    /// takes precedence when set.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Dynamic dispatch through handles declared as a base class
    Dispatch(DispatchArgs),

    /// In-place Lomuto quicksort over a list of integers
    Sort(SortArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.commands {
        Commands::Dispatch(dispatch_args) => dispatch_args.run(),
        Commands::Sort(sort_args) => sort_args.run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

// Dispatch failures carry their own status, everything else exits with 1.
fn exit_code(err: &anyhow::Error) -> u8 {
    let code = err
        .downcast_ref::<DispatchError>()
        .map_or(1, DispatchError::exit_code);
    debug!(code, "exiting after error");
    code
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
        )
        .header(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
        )
        .literal(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .invalid(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .valid(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Cyan))),
        )
        .placeholder(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
        )
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}

#[test]
fn operation_on_none_exits_with_four() {
    let err = anyhow::Error::from(DispatchError::OperationOnNone {
        handle: "d".to_string(),
    });
    assert_eq!(exit_code(&err), 4);
    assert_eq!(format!("{err:#}"), "Operation on None");
}

#[test]
fn other_errors_exit_with_one() {
    let err = anyhow::anyhow!("Unable to print the sorted list");
    assert_eq!(exit_code(&err), 1);

    let wrapped = anyhow::Error::from(DispatchError::OperationOnNone {
        handle: "d".to_string(),
    })
    .context("while running the demo");
    assert_eq!(exit_code(&wrapped), 4);
}
