//! Operation: resolve all packages and regenerate versolve.lock.

use std::path::{Path, PathBuf};

use versolve_core::lockfile::Lockfile;
use versolve_util::errors::VersolveResult;
use versolve_util::progress::status;

use crate::project::{resolve_project, Project};

/// Resolve from scratch and write `versolve.lock` next to the manifest.
pub fn lock(manifest_path: &Path, index: Option<PathBuf>, verbose: bool) -> VersolveResult<()> {
    let project = Project::load(manifest_path)?;
    let resolution = resolve_project(&project, index.as_deref(), verbose)?;

    let lockfile = Lockfile::from_resolution(&resolution);
    let lockfile_path = project.lockfile_path();
    lockfile.write_to(&lockfile_path)?;

    status(
        "Locked",
        &format!("{} packages to {}", lockfile.package.len(), lockfile_path.display()),
    );
    Ok(())
}
