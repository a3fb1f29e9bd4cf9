//! Greedy newest-first backtracking search over the version index.
//!
//! For each unmet dependency, in declaration order, candidates inside the
//! reduced restriction range are tried newest first. A candidate is accepted
//! once its own dependencies merge into the restrictions without making any
//! package's range empty; the search then descends into those dependencies.
//! Rejected candidates fall through to the next older one. Once a candidate
//! is accepted the choice is final: a failure further down is not retried
//! with an older version here, and a later sibling never reopens an earlier
//! sibling's choice.
//!
//! Working maps are cloned before each candidate is tried, so a rejected
//! candidate never leaks restrictions into the next attempt.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::conflict::{ConflictReport, VersionConflict};
use crate::error::ResolveError;
use crate::index::{Dependencies, PackageIndex};
use crate::range::VersionRange;
use crate::reducer::{find_possible_versions, reduce_versions, VersionInput};

/// Package name to every constraint string currently known to apply to it.
pub type Restrictions = IndexMap<String, Vec<String>>;

/// Package name to the one version chosen for it.
pub type InstallPlan = IndexMap<String, String>;

/// Which package pulled in which, keyed by package name at each level.
pub type DependencyTree = IndexMap<String, TreeNode>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub version: String,
    pub satisfies: Vec<String>,
    pub dependencies: DependencyTree,
}

/// A successful resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub install: InstallPlan,
    pub tree: DependencyTree,
    #[serde(skip)]
    pub conflicts: ConflictReport,
}

/// Runs the search against one package index and records every rejected
/// candidate along the way.
pub struct Resolver<'a, I: PackageIndex + ?Sized> {
    index: &'a I,
    conflicts: ConflictReport,
}

impl<'a, I: PackageIndex + ?Sized> Resolver<'a, I> {
    pub fn new(index: &'a I) -> Self {
        Self {
            index,
            conflicts: ConflictReport::new(),
        }
    }

    /// Candidates rejected so far, including those from a failed resolution.
    pub fn conflicts(&self) -> &ConflictReport {
        &self.conflicts
    }

    /// Resolve `dependencies` (the root requirements) into an install plan.
    pub fn resolve(&mut self, dependencies: &Dependencies) -> Result<Resolution, ResolveError> {
        let (tree, install) =
            self.resolve_dependency_tree(dependencies, dependencies, &IndexSet::new())?;
        debug!(packages = install.len(), "resolution complete");
        Ok(Resolution {
            install,
            tree,
            conflicts: self.conflicts.clone(),
        })
    }

    /// Place every package in `unmet` given the current `restrictions`.
    ///
    /// `ancestors` are the packages committed on the path from the root to
    /// here; they are never re-entered, which keeps dependency cycles finite.
    pub fn resolve_dependency_tree(
        &mut self,
        unmet: &Dependencies,
        restrictions: &Restrictions,
        ancestors: &IndexSet<String>,
    ) -> Result<(DependencyTree, InstallPlan), ResolveError> {
        check_restrictions(restrictions)?;

        let mut tree = DependencyTree::new();
        let mut install = InstallPlan::new();
        if unmet.is_empty() {
            return Ok((tree, install));
        }

        // Grows with the pins of each sibling already placed at this level.
        let mut level_restrictions = restrictions.clone();

        for name in unmet.keys() {
            debug!(package = %name, "resolving");
            let range = reduce_versions(constraints_for(&level_restrictions, name))?;
            let available = self.index.list_available_versions(name)?;
            let candidates = find_possible_versions(&range, &available)?;

            if candidates.is_empty() {
                return Err(ResolveError::NoMatchingVersion {
                    package: name.clone(),
                    range: range.to_string(),
                    available,
                });
            }

            let mut accepted = None;
            for candidate in &candidates {
                trace!(package = %name, version = %candidate, "trying candidate");
                match self.try_candidate(name, candidate, &range, unmet, &level_restrictions, ancestors) {
                    Ok(next) => {
                        accepted = Some((candidate.clone(), next));
                        break;
                    }
                    Err(e) if e.is_incompatibility() => {
                        debug!(package = %name, version = %candidate, error = %e, "candidate rejected, trying next");
                        self.conflicts.add(VersionConflict {
                            package: name.clone(),
                            version: candidate.clone(),
                            reason: e.to_string(),
                        });
                    }
                    Err(e) => return Err(e),
                }
            }

            let Some((version, (child_unmet, child_restrictions))) = accepted else {
                return Err(ResolveError::Exhausted {
                    package: name.clone(),
                    range: range.to_string(),
                    tried: candidates,
                });
            };

            let mut child_ancestors = ancestors.clone();
            child_ancestors.insert(name.clone());
            let (subtree, subinstall) =
                self.resolve_dependency_tree(&child_unmet, &child_restrictions, &child_ancestors)?;
            debug!(package = %name, version = %version, children = subtree.len(), "placed");

            record_selection(&mut install, name, &version)?;
            for (package, selected) in &subinstall {
                record_selection(&mut install, package, selected)?;
            }
            for (package, selected) in std::iter::once((name, &version)).chain(subinstall.iter()) {
                level_restrictions
                    .entry(package.clone())
                    .or_default()
                    .push(selected.clone());
            }

            tree.insert(
                name.clone(),
                TreeNode {
                    version,
                    satisfies: vec![name.clone()],
                    dependencies: subtree,
                },
            );
        }

        Ok((tree, install))
    }

    /// Tentatively commit `name` at `candidate`: returns the candidate's own
    /// unmet dependencies and the restrictions that would apply beneath it,
    /// or an incompatibility if any package's restrictions no longer reduce.
    fn try_candidate(
        &self,
        name: &str,
        candidate: &str,
        range: &VersionRange,
        unmet: &Dependencies,
        restrictions: &Restrictions,
        ancestors: &IndexSet<String>,
    ) -> Result<(Dependencies, Restrictions), ResolveError> {
        let pinned = reduce_versions([VersionInput::from(range), VersionInput::from(candidate)])?;

        let mut new_restrictions = restrictions.clone();
        new_restrictions.insert(name.to_string(), pinned.to_version_string_pair());

        let mut new_unmet = self.index.get_version_metadata(name, candidate)?;

        merge_constraints(&mut new_restrictions, unmet);
        merge_constraints(&mut new_restrictions, &new_unmet);
        new_restrictions
            .entry(name.to_string())
            .or_default()
            .push(candidate.to_string());

        new_unmet.shift_remove(name);
        new_unmet.retain(|dep, _| !ancestors.contains(dep));

        check_restrictions(&new_restrictions)?;
        Ok((new_unmet, new_restrictions))
    }
}

/// Resolve `dependencies` against `index`, returning `{install, tree}`.
pub fn resolve_dependency_set<I: PackageIndex + ?Sized>(
    index: &I,
    dependencies: &Dependencies,
) -> Result<Resolution, ResolveError> {
    Resolver::new(index).resolve(dependencies)
}

fn constraints_for<'r>(restrictions: &'r Restrictions, name: &str) -> &'r [String] {
    restrictions.get(name).map(Vec::as_slice).unwrap_or_default()
}

/// Every package's accumulated constraints must still reduce to a non-empty range.
fn check_restrictions(restrictions: &Restrictions) -> Result<(), ResolveError> {
    for constraints in restrictions.values() {
        reduce_versions(constraints)?;
    }
    Ok(())
}

/// Fold `source` into `dest`. For a package present in both, the incoming
/// constraints are placed ahead of the existing ones.
fn merge_constraints(dest: &mut Restrictions, source: &Dependencies) {
    for (name, incoming) in source {
        match dest.get_mut(name) {
            Some(existing) => {
                let mut merged = incoming.clone();
                merged.append(existing);
                *existing = merged;
            }
            None => {
                dest.insert(name.clone(), incoming.clone());
            }
        }
    }
}

/// Add one pin to `install`.
///
/// Sibling pins flow into the restrictions every later sibling sees, and
/// ancestors are never re-entered, so a search that got this far cannot
/// pick two versions of one package. A disagreement means that invariant
/// broke; it is reported as an error rather than silently overwritten.
fn record_selection(
    install: &mut InstallPlan,
    package: &str,
    version: &str,
) -> Result<(), ResolveError> {
    match install.get(package) {
        Some(existing) if existing != version => Err(ResolveError::ConflictingSelection {
            package: package.to_string(),
            first: existing.clone(),
            second: version.to_string(),
        }),
        Some(_) => Ok(()),
        None => {
            install.insert(package.to_string(), version.to_string());
            Ok(())
        }
    }
}
