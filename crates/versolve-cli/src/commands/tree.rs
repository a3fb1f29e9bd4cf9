//! Handler for `versolve tree`.

use std::path::PathBuf;

use miette::Result;

use versolve_ops::ops_tree::{self, TreeOptions};

pub fn exec(
    manifest_path: Option<PathBuf>,
    index: Option<PathBuf>,
    depth: Option<usize>,
    why: Option<String>,
    inverted: Option<String>,
    verbose: bool,
) -> Result<()> {
    let manifest_path = super::manifest_path(manifest_path)?;
    let opts = TreeOptions {
        index,
        depth,
        why,
        inverted,
        verbose,
    };
    ops_tree::tree(&manifest_path, &opts)
}
