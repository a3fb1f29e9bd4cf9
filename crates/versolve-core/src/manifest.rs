use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use versolve_util::errors::VersolveError;

use crate::listing::PackageListing;

/// Top-level representation of a `versolve.toml` manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub project: ProjectInfo,

    #[serde(default)]
    pub index: IndexSection,

    /// Root requirements, in declaration order.
    #[serde(default)]
    pub packages: IndexMap<String, ConstraintSpec>,
}

/// The `[project]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub name: String,
    #[serde(default = "default_project_version")]
    pub version: String,
}

fn default_project_version() -> String {
    "0.0.0".to_string()
}

/// The `[index]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexSection {
    /// Path to the version index file, relative to the manifest.
    #[serde(default)]
    pub path: Option<String>,
}

/// A package requirement: one constraint string or a list of them.
/// An empty list accepts any version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstraintSpec {
    Single(String),
    List(Vec<String>),
}

impl ConstraintSpec {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Self::Single(s) => vec![s.clone()],
            Self::List(list) => list.clone(),
        }
    }
}

impl Manifest {
    /// Load and parse a `versolve.toml` file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| VersolveError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_str(&content)
    }

    /// Parse a `versolve.toml` from a string.
    pub fn from_str(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            VersolveError::Manifest {
                message: format!("Failed to parse versolve.toml: {e}"),
            }
            .into()
        })
    }

    /// The root package listing, with every constraint validated.
    pub fn listing(&self) -> miette::Result<PackageListing> {
        let mut listing = PackageListing::new();
        for (name, spec) in &self.packages {
            listing
                .incorporate(name, spec.to_vec())
                .map_err(|e| VersolveError::Manifest {
                    message: format!("Invalid requirement for package '{name}': {e}"),
                })?;
        }
        Ok(listing)
    }

    /// The `[index] path`, resolved against the manifest's directory.
    pub fn index_path(&self, manifest_dir: &Path) -> Option<PathBuf> {
        self.index
            .path
            .as_deref()
            .map(|p| versolve_util::fs::resolve_relative(manifest_dir, Path::new(p)))
    }
}
