use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;

use versolve_resolver::resolver::{DependencyTree, Resolution};
use versolve_util::errors::VersolveError;

/// Deterministic lockfile recording the version chosen for every package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lockfile {
    #[serde(default)]
    pub package: Vec<LockedPackage>,
}

/// A single locked package and the names of the packages it pulled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedPackage {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Lockfile {
    /// Build a lockfile from a resolution. Packages are sorted by name.
    pub fn from_resolution(resolution: &Resolution) -> Self {
        let mut edges: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        collect_edges(&resolution.tree, &mut edges);

        let mut package: Vec<LockedPackage> = resolution
            .install
            .iter()
            .map(|(name, version)| LockedPackage {
                name: name.clone(),
                version: version.clone(),
                dependencies: edges
                    .get(name.as_str())
                    .map(|deps| deps.iter().map(|d| d.to_string()).collect())
                    .unwrap_or_default(),
            })
            .collect();
        package.sort_by(|a, b| a.name.cmp(&b.name));
        Self { package }
    }

    /// Load and parse a `versolve.lock` file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| VersolveError::Lockfile {
            message: format!("Failed to read lockfile: {e}"),
        })?;
        toml::from_str(&content).map_err(|e| {
            VersolveError::Lockfile {
                message: format!("Failed to parse lockfile: {e}"),
            }
            .into()
        })
    }

    /// Serialize the lockfile to a pretty-printed TOML string.
    pub fn to_string_pretty(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Write the lockfile to `path`, replacing any previous one.
    pub fn write_to(&self, path: &Path) -> miette::Result<()> {
        let content = self.to_string_pretty().map_err(|e| VersolveError::Lockfile {
            message: format!("Failed to serialize lockfile: {e}"),
        })?;
        versolve_util::fs::write_atomic(path, &content).map_err(|e| {
            VersolveError::Lockfile {
                message: format!("Failed to write {}: {e}", path.display()),
            }
            .into()
        })
    }

    pub fn find(&self, name: &str) -> Option<&LockedPackage> {
        self.package.iter().find(|p| p.name == name)
    }
}

fn collect_edges<'t>(tree: &'t DependencyTree, edges: &mut BTreeMap<&'t str, BTreeSet<&'t str>>) {
    for (name, node) in tree {
        let entry = edges.entry(name.as_str()).or_default();
        entry.extend(node.dependencies.keys().map(String::as_str));
        collect_edges(&node.dependencies, edges);
    }
}
