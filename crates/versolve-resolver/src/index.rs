//! The version index the resolver searches: which versions exist for each
//! package and what each of those versions depends on.

use std::collections::VecDeque;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ResolveError;

/// Dependency name to the raw constraint strings declared for it.
pub type Dependencies = IndexMap<String, Vec<String>>;

/// Source of package metadata.
///
/// Implementations list versions in ascending order; the resolver relies on
/// that order when it walks candidates newest-first.
pub trait PackageIndex {
    fn list_available_versions(&self, package: &str) -> Result<Vec<String>, ResolveError>;

    fn get_version_metadata(
        &self,
        package: &str,
        version: &str,
    ) -> Result<Dependencies, ResolveError>;
}

/// A fully materialized, in-memory version index:
/// package name -> version -> dependency name -> constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionIndex {
    packages: IndexMap<String, IndexMap<String, Dependencies>>,
}

impl VersionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `version` of `package` with its declared dependencies.
    /// Versions are kept in insertion order, so insert them ascending.
    pub fn insert(&mut self, package: &str, version: &str, dependencies: Dependencies) {
        self.packages
            .entry(package.to_string())
            .or_default()
            .insert(version.to_string(), dependencies);
    }

    pub fn contains(&self, package: &str) -> bool {
        self.packages.contains_key(package)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn package_names(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    pub fn versions(&self, package: &str) -> Result<&IndexMap<String, Dependencies>, ResolveError> {
        self.packages
            .get(package)
            .ok_or_else(|| ResolveError::PackageNotFound {
                package: package.to_string(),
            })
    }

    /// Materialize every package reachable from `roots` out of `source`.
    ///
    /// All versions of each reachable package are pulled in, since any of
    /// them may be chosen during the search.
    pub fn collect<'a, S, R>(source: &S, roots: R) -> Result<Self, ResolveError>
    where
        S: PackageIndex + ?Sized,
        R: IntoIterator<Item = &'a str>,
    {
        let mut index = Self::new();
        let mut seen: IndexSet<String> = IndexSet::new();
        let mut queue: VecDeque<String> = VecDeque::new();

        for root in roots {
            if seen.insert(root.to_string()) {
                queue.push_back(root.to_string());
            }
        }

        while let Some(package) = queue.pop_front() {
            let versions = source.list_available_versions(&package)?;
            debug!(package = %package, versions = versions.len(), "materializing index entry");
            let entry = index.packages.entry(package.clone()).or_default();
            for version in versions {
                let dependencies = source.get_version_metadata(&package, &version)?;
                for dep in dependencies.keys() {
                    if seen.insert(dep.clone()) {
                        queue.push_back(dep.clone());
                    }
                }
                entry.insert(version, dependencies);
            }
        }

        Ok(index)
    }
}

impl PackageIndex for VersionIndex {
    fn list_available_versions(&self, package: &str) -> Result<Vec<String>, ResolveError> {
        Ok(self.versions(package)?.keys().cloned().collect())
    }

    fn get_version_metadata(
        &self,
        package: &str,
        version: &str,
    ) -> Result<Dependencies, ResolveError> {
        self.versions(package)?
            .get(version)
            .cloned()
            .ok_or_else(|| ResolveError::NoMatchingVersion {
                package: package.to_string(),
                range: version.to_string(),
                available: self
                    .versions(package)
                    .map(|v| v.keys().cloned().collect())
                    .unwrap_or_default(),
            })
    }
}

impl From<IndexMap<String, IndexMap<String, Dependencies>>> for VersionIndex {
    fn from(packages: IndexMap<String, IndexMap<String, Dependencies>>) -> Self {
        Self { packages }
    }
}
