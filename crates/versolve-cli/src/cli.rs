//! CLI argument definitions for versolve.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "versolve",
    version,
    about = "Resolve package version constraints against a version index",
    long_about = "versolve reduces semantic version constraints to ranges and picks one \
                  version per package, newest first, so that every constraint in the \
                  dependency tree holds."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to versolve.toml (defaults to the nearest one above the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub manifest_path: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the project's packages and print the install plan
    Resolve {
        /// Version index file
        #[arg(long, value_name = "PATH")]
        index: Option<PathBuf>,
        /// Print the install plan and tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display the resolved dependency tree
    Tree {
        /// Version index file
        #[arg(long, value_name = "PATH")]
        index: Option<PathBuf>,
        /// Maximum depth to display
        #[arg(long)]
        depth: Option<usize>,
        /// Show why a package is installed
        #[arg(long, value_name = "NAME")]
        why: Option<String>,
        /// Show what depends on a package
        #[arg(long, value_name = "NAME", conflicts_with = "why")]
        inverted: Option<String>,
    },

    /// Resolve and write versolve.lock
    Lock {
        /// Version index file
        #[arg(long, value_name = "PATH")]
        index: Option<PathBuf>,
    },

    /// Reduce version constraints to a single range
    Reduce {
        /// Constraints such as ">=0.0.1" or "0.0.2"
        #[arg(required = true)]
        constraints: Vec<String>,
        /// Comma-separated available versions; prints the newest one in range
        #[arg(long, value_delimiter = ',', value_name = "VERSIONS")]
        available: Vec<String>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
