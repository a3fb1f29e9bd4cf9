//! Loading a project and running the resolver over it, shared by every
//! operation that needs a resolution.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use versolve_core::config::GlobalConfig;
use versolve_core::index_file;
use versolve_core::listing::PackageListing;
use versolve_core::manifest::Manifest;
use versolve_core::{LOCKFILE_FILE, MANIFEST_FILE};
use versolve_resolver::index::VersionIndex;
use versolve_resolver::resolver::{Resolution, Resolver};
use versolve_util::errors::VersolveError;
use versolve_util::progress::{spinner, status_warn};

/// A loaded project: its manifest, where it lives, and the user's global config.
pub struct Project {
    pub root: PathBuf,
    pub manifest: Manifest,
    pub listing: PackageListing,
    pub config: GlobalConfig,
}

impl Project {
    /// Load the manifest at `manifest_path` along with the global config.
    pub fn load(manifest_path: &Path) -> miette::Result<Self> {
        let manifest = Manifest::from_path(manifest_path)?;
        let listing = manifest.listing()?;
        let root = manifest_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let config = GlobalConfig::load()?;
        debug!(project = %manifest.project.name, packages = listing.len(), "loaded project");
        Ok(Self {
            root,
            manifest,
            listing,
            config,
        })
    }

    pub fn name(&self) -> &str {
        &self.manifest.project.name
    }

    pub fn lockfile_path(&self) -> PathBuf {
        self.root.join(LOCKFILE_FILE)
    }

    /// Pick the index file: `explicit` first, then the manifest's
    /// `[index] path`, then the global config's.
    pub fn index_path(&self, explicit: Option<&Path>) -> miette::Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        self.manifest
            .index_path(&self.root)
            .or_else(|| self.config.index_path())
            .ok_or_else(|| {
                VersolveError::Index {
                    message: "No version index configured".to_string(),
                }
                .into()
            })
    }

    /// Whether rejected candidates should be printed after a failure.
    pub fn show_rejections(&self, verbose: bool) -> bool {
        verbose || self.config.resolve.show_rejections
    }
}

/// Find the manifest: `explicit` if given, otherwise the nearest
/// `versolve.toml` at or above `start`.
pub fn locate_manifest(explicit: Option<&Path>, start: &Path) -> miette::Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(VersolveError::Manifest {
            message: format!("Manifest not found at {}", path.display()),
        }
        .into());
    }
    versolve_util::fs::find_ancestor_with(start, MANIFEST_FILE)
        .map(|dir| dir.join(MANIFEST_FILE))
        .ok_or_else(|| {
            VersolveError::Manifest {
                message: format!("No {MANIFEST_FILE} found in {} or any parent directory", start.display()),
            }
            .into()
        })
}

/// Load the index, materialize the part reachable from the project's
/// packages, and resolve.
///
/// On failure the rejected candidates are printed first when `show_rejections` is set.
pub fn resolve_project(
    project: &Project,
    index_override: Option<&Path>,
    verbose: bool,
) -> miette::Result<Resolution> {
    let index_path = project.index_path(index_override)?;
    info!(index = %index_path.display(), "loading version index");
    let source = index_file::load(&index_path)?;
    let index = VersionIndex::collect(&source, project.listing.names())?;

    let sp = spinner("Resolving dependencies...");
    let mut resolver = Resolver::new(&index);
    let result = resolver.resolve(project.listing.as_dependencies());
    sp.finish_and_clear();

    match result {
        Ok(resolution) => {
            if !resolution.conflicts.is_empty() {
                if verbose {
                    eprint!("{}", resolution.conflicts);
                } else {
                    status_warn(
                        "Rejected",
                        &format!(
                            "{} candidate versions (run with --verbose to list them)",
                            resolution.conflicts.len()
                        ),
                    );
                }
            }
            info!(packages = resolution.install.len(), "resolved");
            Ok(resolution)
        }
        Err(e) => {
            if project.show_rejections(verbose) && !resolver.conflicts().is_empty() {
                eprint!("{}", resolver.conflicts());
            }
            Err(e.into())
        }
    }
}
