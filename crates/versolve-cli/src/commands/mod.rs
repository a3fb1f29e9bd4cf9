//! Command dispatch and handler modules.

mod lock;
mod reduce;
mod resolve;
mod tree;

use std::path::PathBuf;

use miette::Result;
use tracing::debug;

use versolve_util::errors::VersolveError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    debug!(command = ?cli.command, "dispatching command");
    match cli.command {
        Command::Resolve { index, json } => {
            resolve::exec(cli.manifest_path, index, json, cli.verbose)
        }
        Command::Tree {
            index,
            depth,
            why,
            inverted,
        } => tree::exec(cli.manifest_path, index, depth, why, inverted, cli.verbose),
        Command::Lock { index } => lock::exec(cli.manifest_path, index, cli.verbose),
        Command::Reduce {
            constraints,
            available,
        } => reduce::exec(&constraints, &available),
    }
}

/// The manifest to operate on: `--manifest-path`, or the nearest one above
/// the current directory.
fn manifest_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(VersolveError::Io)?;
    versolve_ops::project::locate_manifest(explicit.as_deref(), &cwd)
}
