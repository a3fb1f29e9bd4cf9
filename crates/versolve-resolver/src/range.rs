//! Version ranges and their intersection.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;
use crate::version::{Matcher, VersionConstraint, VersionSpecifier};

/// The intersection of every constraint seen so far for one package.
///
/// `start` is a lower bound, an exact pin, or unbounded; `end` is an upper
/// bound, an exact pin, or unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionRange {
    pub start: VersionConstraint,
    pub end: VersionConstraint,
}

impl VersionRange {
    pub fn new(start: VersionConstraint, end: VersionConstraint) -> Self {
        Self { start, end }
    }

    /// The range that accepts every version.
    pub fn unbounded() -> Self {
        Self::new(VersionConstraint::Unbounded, VersionConstraint::Unbounded)
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_unbounded() && self.end.is_unbounded()
    }

    /// Intersect with `other`, producing the tightest range satisfying both.
    pub fn reduce(&self, other: &VersionRange) -> Result<VersionRange, ResolveError> {
        let incompatible = || ResolveError::VersionsNotCompatible {
            requested: vec![self.to_string(), other.to_string()],
        };

        let (start, end) = if self.start.is_exact() && other.start.is_exact() {
            let pin = combine_exact(&self.start, &other.start).ok_or_else(incompatible)?;
            (pin.clone(), pin)
        } else {
            let start =
                combine_lower_bound(&self.start, &other.start).ok_or_else(incompatible)?;
            let end = combine_upper_bound(&self.end, &other.end).ok_or_else(incompatible)?;
            (start, end)
        };

        if start.compare(&end) == Ordering::Greater {
            return Err(incompatible());
        }

        Ok(VersionRange { start, end })
    }

    /// Whether the concrete `version` falls inside this range.
    pub fn contains(&self, version: &VersionSpecifier) -> bool {
        let exact = VersionConstraint::Specified(VersionSpecifier::new(
            Matcher::Exact,
            version.version.clone(),
        ));
        self.reduce(&exact.to_range()).is_ok()
    }

    /// The bounded ends as constraint strings; unbounded ends are omitted.
    pub fn to_version_string_pair(&self) -> Vec<String> {
        [&self.start, &self.end]
            .into_iter()
            .filter_map(|bound| bound.to_version_string(false))
            .collect()
    }
}

impl Default for VersionRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.start, &self.end) {
            (VersionConstraint::Unbounded, VersionConstraint::Unbounded) => f.write_str("*"),
            (start, end) if start.is_exact() && start == end => write!(f, "{start}"),
            (VersionConstraint::Unbounded, end) => write!(f, "{end}"),
            (start, VersionConstraint::Unbounded) => write!(f, "{start}"),
            (start, end) => write!(f, "{start}, {end}"),
        }
    }
}

fn combine_exact(a: &VersionConstraint, b: &VersionConstraint) -> Option<VersionConstraint> {
    (a.compare(b) == Ordering::Equal).then(|| a.clone())
}

fn combine_lower_bound(
    a: &VersionConstraint,
    b: &VersionConstraint,
) -> Option<VersionConstraint> {
    if b.is_unbounded() {
        return Some(a.clone());
    }
    if a.is_unbounded() {
        return Some(b.clone());
    }
    match (a.is_exact(), b.is_exact()) {
        (false, false) => {
            if a.compare(b) == Ordering::Less {
                Some(b.clone())
            } else {
                Some(a.clone())
            }
        }
        (true, _) => lower_bound_with_exact(b, a),
        (false, true) => lower_bound_with_exact(a, b),
    }
}

/// An exact pin survives a lower bound if it sits above it, or on it when
/// the bound is inclusive.
fn lower_bound_with_exact(
    lower: &VersionConstraint,
    exact: &VersionConstraint,
) -> Option<VersionConstraint> {
    match lower.compare(exact) {
        Ordering::Less => Some(exact.clone()),
        Ordering::Equal if lower.matcher() == Some(Matcher::GreaterThanOrEqual) => {
            Some(exact.clone())
        }
        _ => None,
    }
}

fn combine_upper_bound(
    a: &VersionConstraint,
    b: &VersionConstraint,
) -> Option<VersionConstraint> {
    if b.is_unbounded() {
        return Some(a.clone());
    }
    if a.is_unbounded() {
        return Some(b.clone());
    }
    match (a.is_exact(), b.is_exact()) {
        (false, false) => {
            if a.compare(b) == Ordering::Greater {
                Some(b.clone())
            } else {
                Some(a.clone())
            }
        }
        (true, _) => upper_bound_with_exact(b, a),
        (false, true) => upper_bound_with_exact(a, b),
    }
}

fn upper_bound_with_exact(
    upper: &VersionConstraint,
    exact: &VersionConstraint,
) -> Option<VersionConstraint> {
    match upper.compare(exact) {
        Ordering::Greater => Some(exact.clone()),
        Ordering::Equal if upper.matcher() == Some(Matcher::LessThanOrEqual) => {
            Some(exact.clone())
        }
        _ => None,
    }
}
