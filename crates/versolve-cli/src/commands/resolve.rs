//! Handler for `versolve resolve`.

use std::path::PathBuf;

use miette::Result;

use versolve_ops::ops_resolve::{self, ResolveOptions};

pub fn exec(
    manifest_path: Option<PathBuf>,
    index: Option<PathBuf>,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let manifest_path = super::manifest_path(manifest_path)?;
    let opts = ResolveOptions {
        index,
        json,
        verbose,
    };
    ops_resolve::resolve(&manifest_path, &opts)
}
