//! The JSON version index file:
//! `{ "pkg": { "0.0.1": { "dep": ["=0.0.1"] } } }`.

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

use versolve_resolver::index::{Dependencies, VersionIndex};
use versolve_resolver::version::{SemanticVersion, VersionConstraint};
use versolve_util::errors::VersolveError;

/// Raw contents of an index file, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct IndexFile {
    packages: IndexMap<String, IndexMap<String, Dependencies>>,
}

impl IndexFile {
    /// Load and parse an index file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| VersolveError::Index {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> miette::Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            VersolveError::Index {
                message: format!("Failed to parse version index: {e}"),
            }
            .into()
        })
    }

    /// Validate every version and constraint and build the in-memory index.
    ///
    /// Versions of each package are ordered ascending, whatever order the
    /// file lists them in.
    pub fn into_index(self) -> miette::Result<VersionIndex> {
        let mut index = VersionIndex::new();
        for (package, versions) in self.packages {
            let mut parsed = Vec::with_capacity(versions.len());
            for (version, dependencies) in versions {
                let semver = SemanticVersion::parse(&version).map_err(|e| invalid(&package, e))?;
                for constraints in dependencies.values() {
                    for constraint in constraints {
                        VersionConstraint::parse(constraint).map_err(|e| invalid(&package, e))?;
                    }
                }
                parsed.push((semver, version, dependencies));
            }
            if parsed.windows(2).any(|w| w[0].0.compare(&w[1].0).is_gt()) {
                warn!(package = %package, "versions not listed in ascending order, sorting");
                parsed.sort_by(|a, b| a.0.compare(&b.0));
            }
            debug!(package = %package, versions = parsed.len(), "loaded index entry");
            for (_, version, dependencies) in parsed {
                index.insert(&package, &version, dependencies);
            }
        }
        Ok(index)
    }
}

fn invalid(package: &str, err: impl std::fmt::Display) -> VersolveError {
    VersolveError::Index {
        message: format!("Bad entry for package '{package}': {err}"),
    }
}

/// Read and validate the index file at `path`.
pub fn load(path: &Path) -> miette::Result<VersionIndex> {
    IndexFile::from_path(path)?.into_index()
}
