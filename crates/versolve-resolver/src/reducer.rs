//! Folding many constraints for one package into a single range, and picking
//! concrete versions out of an available-versions list.

use tracing::trace;

use crate::error::ResolveError;
use crate::range::VersionRange;
use crate::version::{Matcher, SemanticVersion, VersionConstraint, VersionSpecifier};

/// Anything [`reduce_versions`] accepts: raw constraint strings, parsed
/// constraints, or whole ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionInput {
    Raw(String),
    Constraint(VersionConstraint),
    Range(VersionRange),
}

impl VersionInput {
    fn to_range(&self) -> Result<VersionRange, ResolveError> {
        match self {
            Self::Raw(s) => VersionConstraint::parse(s).map(|c| c.to_range()),
            Self::Constraint(c) => Ok(c.to_range()),
            Self::Range(r) => Ok(r.clone()),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Raw(s) => s.clone(),
            Self::Constraint(c) => c.to_string(),
            Self::Range(r) => r.to_string(),
        }
    }
}

impl From<&str> for VersionInput {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_string())
    }
}

impl From<String> for VersionInput {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

impl From<&String> for VersionInput {
    fn from(s: &String) -> Self {
        Self::Raw(s.clone())
    }
}

impl From<VersionConstraint> for VersionInput {
    fn from(c: VersionConstraint) -> Self {
        Self::Constraint(c)
    }
}

impl From<VersionSpecifier> for VersionInput {
    fn from(s: VersionSpecifier) -> Self {
        Self::Constraint(VersionConstraint::Specified(s))
    }
}

impl From<VersionRange> for VersionInput {
    fn from(r: VersionRange) -> Self {
        Self::Range(r)
    }
}

impl From<&VersionRange> for VersionInput {
    fn from(r: &VersionRange) -> Self {
        Self::Range(r.clone())
    }
}

/// Reduce every input to one authoritative range.
///
/// An empty input accepts anything. Unparseable strings fail with
/// [`ResolveError::InvalidVersion`]; an empty intersection fails with
/// [`ResolveError::VersionsNotCompatible`] carrying the full input list.
pub fn reduce_versions<I>(inputs: I) -> Result<VersionRange, ResolveError>
where
    I: IntoIterator,
    I::Item: Into<VersionInput>,
{
    let inputs: Vec<VersionInput> = inputs.into_iter().map(Into::into).collect();
    let ranges = inputs
        .iter()
        .map(VersionInput::to_range)
        .collect::<Result<Vec<_>, _>>()?;

    trace!(inputs = ?inputs, "reducing version constraints");

    ranges
        .iter()
        .try_fold(VersionRange::unbounded(), |acc, next| acc.reduce(next))
        .map_err(|_| ResolveError::VersionsNotCompatible {
            requested: inputs.iter().map(VersionInput::describe).collect(),
        })
}

/// Whether all inputs can be satisfied at once. A single input is always
/// compatible with itself, though it must still parse.
pub fn versions_compatible<I>(inputs: I) -> Result<bool, ResolveError>
where
    I: IntoIterator,
    I::Item: Into<VersionInput>,
{
    match reduce_versions(inputs) {
        Ok(_) => Ok(true),
        Err(ResolveError::VersionsNotCompatible { .. }) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Every available version inside `range`, newest first.
///
/// `available` must already be in ascending order (the index contract); the
/// result is that order reversed, not a re-sort.
pub fn find_possible_versions(
    range: &VersionRange,
    available: &[String],
) -> Result<Vec<String>, ResolveError> {
    let mut matches = Vec::new();
    for version_string in available {
        let version = available_version(version_string)?;
        if range.contains(&version) {
            matches.push(version_string.clone());
        }
    }
    matches.reverse();
    Ok(matches)
}

/// The highest available version inside `range`, or `None` if nothing fits.
pub fn resolve_to_specific_version(
    range: &VersionRange,
    available: &[String],
) -> Result<Option<String>, ResolveError> {
    let mut best: Option<(VersionSpecifier, &String)> = None;
    for version_string in available {
        let version = available_version(version_string)?;
        if !range.contains(&version) {
            continue;
        }
        let newer = best
            .as_ref()
            .map_or(true, |(max, _)| max.version.compare(&version.version).is_lt());
        if newer {
            best = Some((version, version_string));
        }
    }
    Ok(best.map(|(_, s)| s.clone()))
}

/// Available versions are bare versions; a leading matcher is invalid here.
fn available_version(input: &str) -> Result<VersionSpecifier, ResolveError> {
    SemanticVersion::parse(input).map(|v| VersionSpecifier::new(Matcher::Exact, v))
}
