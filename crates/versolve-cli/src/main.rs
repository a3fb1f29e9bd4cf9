//! versolve CLI binary.
//!
//! This is the entry point for the `versolve` command-line tool. It parses
//! arguments with `clap`, initializes logging via `tracing`, and dispatches
//! to the appropriate command handler.

mod cli;
mod commands;

use miette::Result;
use tracing_subscriber::EnvFilter;

/// Filter used with `--verbose` when `RUST_LOG` is unset.
const VERBOSE_FILTER: &str = "warn,versolve=debug,versolve_ops=debug,versolve_resolver=debug,versolve_core=debug";

fn main() -> Result<()> {
    let args = cli::parse();

    let fallback = if args.verbose { VERBOSE_FILTER } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();

    commands::dispatch(args)
}
