//! Semantic version parsing and constraint comparison.
//!
//! Constraint strings follow `[matcher]major.minor.patch[-prerelease][+build]`
//! where `matcher` is one of `>=`, `>`, `<=`, `<`, `=` and defaults to `=`.
//!
//! Ordering between constraints only looks at `major.minor.patch`. Prerelease
//! and build metadata are kept for equality and display but never weigh in a
//! comparison.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::error::ResolveError;
use crate::range::VersionRange;

/// A strict `major.minor.patch[-prerelease][+build]` version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SemanticVersion(Version);

impl SemanticVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(Version::new(major, minor, patch))
    }

    /// Parse a bare version (no matcher).
    pub fn parse(input: &str) -> Result<Self, ResolveError> {
        Version::parse(input)
            .map(Self)
            .map_err(|_| ResolveError::InvalidVersion {
                input: input.to_string(),
            })
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    pub fn prerelease(&self) -> Option<&str> {
        non_empty(self.0.pre.as_str())
    }

    pub fn build(&self) -> Option<&str> {
        non_empty(self.0.build.as_str())
    }

    /// Numeric comparison on `(major, minor, patch)`.
    pub fn compare(&self, other: &Self) -> Ordering {
        (self.0.major, self.0.minor, self.0.patch).cmp(&(
            other.0.major,
            other.0.minor,
            other.0.patch,
        ))
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SemanticVersion {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The comparison operator in front of a version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Matcher {
    #[serde(rename = "=")]
    Exact,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = ">=")]
    GreaterThanOrEqual,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "<=")]
    LessThanOrEqual,
}

impl Matcher {
    pub fn as_str(self) -> &'static str {
        match self {
            Matcher::Exact => "=",
            Matcher::GreaterThan => ">",
            Matcher::GreaterThanOrEqual => ">=",
            Matcher::LessThan => "<",
            Matcher::LessThanOrEqual => "<=",
        }
    }

    /// Split a leading matcher off `input`. Two-character operators are tried
    /// first so `>=` is never read as `>` followed by `=1.0.0`.
    fn split(input: &str) -> (Option<Self>, &str) {
        const TABLE: [(&str, Matcher); 5] = [
            (">=", Matcher::GreaterThanOrEqual),
            ("<=", Matcher::LessThanOrEqual),
            (">", Matcher::GreaterThan),
            ("<", Matcher::LessThan),
            ("=", Matcher::Exact),
        ];
        for (prefix, matcher) in TABLE {
            if let Some(rest) = input.strip_prefix(prefix) {
                return (Some(matcher), rest);
            }
        }
        (None, input)
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A version paired with a matcher, e.g. `>=1.2.3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionSpecifier {
    pub matcher: Matcher,
    pub version: SemanticVersion,
}

impl VersionSpecifier {
    pub fn new(matcher: Matcher, version: SemanticVersion) -> Self {
        Self { matcher, version }
    }

    /// Parse `[matcher]major.minor.patch[-prerelease][+build]`.
    pub fn parse(input: &str) -> Result<Self, ResolveError> {
        let (matcher, rest) = Matcher::split(input);
        let version = Version::parse(rest)
            .map(SemanticVersion)
            .map_err(|_| ResolveError::InvalidVersion {
                input: input.to_string(),
            })?;
        Ok(Self {
            matcher: matcher.unwrap_or(Matcher::Exact),
            version,
        })
    }

    pub fn is_exact(&self) -> bool {
        self.matcher == Matcher::Exact
    }

    pub fn is_lower_bound(&self) -> bool {
        matches!(
            self.matcher,
            Matcher::GreaterThan | Matcher::GreaterThanOrEqual
        )
    }

    pub fn is_upper_bound(&self) -> bool {
        matches!(self.matcher, Matcher::LessThan | Matcher::LessThanOrEqual)
    }

    /// Render back to a constraint string, optionally without the matcher.
    pub fn to_version_string(&self, skip_matcher: bool) -> String {
        if skip_matcher {
            self.version.to_string()
        } else {
            format!("{}{}", self.matcher, self.version)
        }
    }
}

impl fmt::Display for VersionSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.matcher, self.version)
    }
}

impl FromStr for VersionSpecifier {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// One end of a [`VersionRange`]: either a concrete specifier or unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VersionConstraint {
    Unbounded,
    Specified(VersionSpecifier),
}

impl VersionConstraint {
    pub fn parse(input: &str) -> Result<Self, ResolveError> {
        VersionSpecifier::parse(input).map(Self::Specified)
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    pub fn is_exact(&self) -> bool {
        self.specifier().is_some_and(VersionSpecifier::is_exact)
    }

    pub fn is_lower_bound(&self) -> bool {
        self.specifier().is_some_and(VersionSpecifier::is_lower_bound)
    }

    pub fn is_upper_bound(&self) -> bool {
        self.specifier().is_some_and(VersionSpecifier::is_upper_bound)
    }

    pub fn specifier(&self) -> Option<&VersionSpecifier> {
        match self {
            Self::Unbounded => None,
            Self::Specified(spec) => Some(spec),
        }
    }

    pub fn matcher(&self) -> Option<Matcher> {
        self.specifier().map(|s| s.matcher)
    }

    /// Three-way comparison of two bounds.
    ///
    /// Anything involving an unbounded side is `Equal`, which only means
    /// "does not block a merge", not true equality. At equal numeric versions
    /// the matchers break the tie: `>=x` against `<=x` touch (`Equal`), while
    /// an upper bound against a lower bound that is not inclusive on both
    /// sides orders strictly so that ranges meeting at an open endpoint are
    /// rejected.
    pub fn compare(&self, other: &Self) -> Ordering {
        let (Self::Specified(a), Self::Specified(b)) = (self, other) else {
            return Ordering::Equal;
        };

        let numeric = a.version.compare(&b.version);
        if numeric != Ordering::Equal {
            return numeric;
        }

        use Matcher::*;
        match (a.matcher, b.matcher) {
            (GreaterThanOrEqual, LessThanOrEqual) | (LessThanOrEqual, GreaterThanOrEqual) => {
                Ordering::Equal
            }
            (LessThan, LessThanOrEqual) | (GreaterThanOrEqual, GreaterThan) => Ordering::Less,
            _ if a.is_upper_bound() && b.is_lower_bound() => Ordering::Less,
            (LessThanOrEqual, LessThan) | (GreaterThan, GreaterThanOrEqual) => Ordering::Greater,
            _ if a.is_lower_bound() && b.is_upper_bound() => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }

    /// The single-constraint range this bound describes.
    pub fn to_range(&self) -> VersionRange {
        match self {
            Self::Unbounded => VersionRange::unbounded(),
            Self::Specified(spec) if spec.is_exact() => {
                VersionRange::new(self.clone(), self.clone())
            }
            Self::Specified(spec) if spec.is_lower_bound() => {
                VersionRange::new(self.clone(), Self::Unbounded)
            }
            Self::Specified(_) => VersionRange::new(Self::Unbounded, self.clone()),
        }
    }

    pub fn to_version_string(&self, skip_matcher: bool) -> Option<String> {
        self.specifier().map(|s| s.to_version_string(skip_matcher))
    }
}

impl From<VersionSpecifier> for VersionConstraint {
    fn from(spec: VersionSpecifier) -> Self {
        Self::Specified(spec)
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => f.write_str("*"),
            Self::Specified(spec) => write!(f, "{spec}"),
        }
    }
}

impl FromStr for VersionConstraint {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> VersionConstraint {
        VersionConstraint::parse(s).unwrap()
    }

    #[test]
    fn parse_full_version() {
        let spec = VersionSpecifier::parse(">=1.2.3-alpha.1+build.5").unwrap();
        assert_eq!(spec.matcher, Matcher::GreaterThanOrEqual);
        assert_eq!(spec.version.major(), 1);
        assert_eq!(spec.version.minor(), 2);
        assert_eq!(spec.version.patch(), 3);
        assert_eq!(spec.version.prerelease(), Some("alpha.1"));
        assert_eq!(spec.version.build(), Some("build.5"));
    }

    #[test]
    fn missing_matcher_defaults_to_exact() {
        let spec = VersionSpecifier::parse("0.0.1").unwrap();
        assert!(spec.is_exact());
        assert_eq!(spec.to_version_string(false), "=0.0.1");
        assert_eq!(spec.to_version_string(true), "0.0.1");
    }

    #[test]
    fn rejects_malformed_versions() {
        for bad in [
            "", "1", "1.0", "01.0.0", "1.00.0", "1.0.0-01", "v1.0.0", "=>1.0.0", "1.0.0 ", "latest",
        ] {
            assert!(
                VersionSpecifier::parse(bad).is_err(),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn alphanumeric_prerelease_may_start_with_zero() {
        assert!(VersionSpecifier::parse("1.0.0-0abc").is_ok());
        assert!(VersionSpecifier::parse("1.0.0-0").is_ok());
    }

    #[test]
    fn round_trips_all_matchers() {
        for s in [
            "=1.2.3",
            ">1.2.3",
            ">=1.2.3",
            "<1.2.3",
            "<=1.2.3",
            ">=1.0.0-rc.1+sha.5114f85",
            "=0.0.1+20240101",
        ] {
            assert_eq!(VersionSpecifier::parse(s).unwrap().to_version_string(false), s);
        }
    }

    #[test]
    fn predicates() {
        assert!(c("=1.0.0").is_exact());
        assert!(c(">1.0.0").is_lower_bound());
        assert!(c(">=1.0.0").is_lower_bound());
        assert!(c("<1.0.0").is_upper_bound());
        assert!(c("<=1.0.0").is_upper_bound());
        let unbounded = VersionConstraint::Unbounded;
        assert!(unbounded.is_unbounded());
        assert!(!unbounded.is_exact());
        assert!(!unbounded.is_lower_bound());
        assert!(!unbounded.is_upper_bound());
    }

    #[test]
    fn compare_numeric_components_in_order() {
        assert_eq!(c("1.0.0").compare(&c("0.9.9")), Ordering::Greater);
        assert_eq!(c("0.1.0").compare(&c("0.0.9")), Ordering::Greater);
        assert_eq!(c("0.0.1").compare(&c("0.0.2")), Ordering::Less);
        assert_eq!(c("10.0.0").compare(&c("9.0.0")), Ordering::Greater);
    }

    #[test]
    fn compare_ignores_prerelease_and_build() {
        assert_eq!(c("1.0.0-alpha").compare(&c("1.0.0")), Ordering::Equal);
        assert_eq!(c("1.0.0+a").compare(&c("1.0.0+b")), Ordering::Equal);
    }

    #[test]
    fn compare_with_unbounded_is_neutral() {
        let u = VersionConstraint::Unbounded;
        assert_eq!(u.compare(&c(">1.0.0")), Ordering::Equal);
        assert_eq!(c("<1.0.0").compare(&u), Ordering::Equal);
    }

    #[test]
    fn inclusive_bounds_at_same_point_touch() {
        assert_eq!(c(">=1.0.0").compare(&c("<=1.0.0")), Ordering::Equal);
        assert_eq!(c("<=1.0.0").compare(&c(">=1.0.0")), Ordering::Equal);
    }

    #[test]
    fn open_endpoints_at_same_point_are_ordered() {
        assert_eq!(c(">1.0.0").compare(&c("<=1.0.0")), Ordering::Greater);
        assert_eq!(c(">=1.0.0").compare(&c("<1.0.0")), Ordering::Greater);
        assert_eq!(c("<1.0.0").compare(&c(">=1.0.0")), Ordering::Less);
        assert_eq!(c("<1.0.0").compare(&c("<=1.0.0")), Ordering::Less);
        assert_eq!(c("<=1.0.0").compare(&c("<1.0.0")), Ordering::Greater);
        assert_eq!(c(">=1.0.0").compare(&c(">1.0.0")), Ordering::Less);
        assert_eq!(c(">1.0.0").compare(&c(">=1.0.0")), Ordering::Greater);
    }

    #[test]
    fn same_direction_strict_bounds_are_interchangeable() {
        assert_eq!(c(">1.0.0").compare(&c(">1.0.0")), Ordering::Equal);
        assert_eq!(c("<1.0.0").compare(&c("<1.0.0")), Ordering::Equal);
    }

    #[test]
    fn to_range_places_bounds() {
        let exact = c("=1.0.0").to_range();
        assert_eq!(exact.start, c("=1.0.0"));
        assert_eq!(exact.end, c("=1.0.0"));

        let lower = c(">=1.0.0").to_range();
        assert_eq!(lower.start, c(">=1.0.0"));
        assert!(lower.end.is_unbounded());

        let upper = c("<1.0.0").to_range();
        assert!(upper.start.is_unbounded());
        assert_eq!(upper.end, c("<1.0.0"));

        assert_eq!(VersionConstraint::Unbounded.to_range(), VersionRange::unbounded());
    }
}
