//! Operation: resolve the project's packages and print the install plan.

use std::path::{Path, PathBuf};

use versolve_util::errors::{VersolveError, VersolveResult};
use versolve_util::progress::{status, status_info};

use crate::project::{resolve_project, Project};

/// Options for `versolve resolve`.
#[derive(Default)]
pub struct ResolveOptions {
    /// Index file overriding the manifest and global config.
    pub index: Option<PathBuf>,
    /// Print the full `{install, tree}` document as JSON instead of the fetch log.
    pub json: bool,
    pub verbose: bool,
}

/// Resolve the manifest at `manifest_path` and report what would be installed.
pub fn resolve(manifest_path: &Path, opts: &ResolveOptions) -> VersolveResult<()> {
    let project = Project::load(manifest_path)?;
    let resolution = resolve_project(&project, opts.index.as_deref(), opts.verbose)?;

    if opts.json {
        let doc = serde_json::to_string_pretty(&resolution).map_err(|e| VersolveError::Generic {
            message: format!("Failed to serialize resolution: {e}"),
        })?;
        println!("{doc}");
        return Ok(());
    }

    for (name, version) in &resolution.install {
        status("Installing", &format!("{name}@{version}"));
    }
    status_info(
        "Resolved",
        &format!("{} packages for {}", resolution.install.len(), project.name()),
    );
    Ok(())
}
