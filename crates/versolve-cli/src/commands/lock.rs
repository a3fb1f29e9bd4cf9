//! Handler for `versolve lock`.

use std::path::PathBuf;

use miette::Result;

pub fn exec(manifest_path: Option<PathBuf>, index: Option<PathBuf>, verbose: bool) -> Result<()> {
    let manifest_path = super::manifest_path(manifest_path)?;
    versolve_ops::ops_lock::lock(&manifest_path, index, verbose)
}
