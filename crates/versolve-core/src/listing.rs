//! The root package listing: every package the project asks for, with the
//! constraints requested for it.

use serde::Serialize;

use versolve_resolver::error::ResolveError;
use versolve_resolver::index::Dependencies;
use versolve_resolver::version::VersionConstraint;

/// Insertion-ordered package name to constraint strings. The order is the
/// order packages are resolved in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PackageListing {
    packages: Dependencies,
}

impl PackageListing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `constraints` for `package`, appending to any already listed.
    /// An empty list means any version. Every constraint must parse.
    pub fn incorporate<I, S>(&mut self, package: &str, constraints: I) -> Result<(), ResolveError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let constraints: Vec<String> = constraints.into_iter().map(Into::into).collect();
        for constraint in &constraints {
            VersionConstraint::parse(constraint)?;
        }
        self.packages
            .entry(package.to_string())
            .or_default()
            .extend(constraints);
        Ok(())
    }

    pub fn get(&self, package: &str) -> Option<&[String]> {
        self.packages.get(package).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    pub fn as_dependencies(&self) -> &Dependencies {
        &self.packages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incorporate_appends() {
        let mut listing = PackageListing::new();
        listing.incorporate("a", [">=0.0.1"]).unwrap();
        listing.incorporate("b", Vec::<String>::new()).unwrap();
        listing.incorporate("a", ["<1.0.0"]).unwrap();
        assert_eq!(listing.len(), 2);
        assert_eq!(
            listing.get("a").unwrap(),
            &[">=0.0.1".to_string(), "<1.0.0".to_string()]
        );
        assert!(listing.get("b").unwrap().is_empty());
        assert_eq!(listing.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn invalid_constraint_is_rejected() {
        let mut listing = PackageListing::new();
        let err = listing.incorporate("a", ["~1.0"]).unwrap_err();
        assert_eq!(err, ResolveError::InvalidVersion { input: "~1.0".into() });
        assert!(listing.is_empty());
    }
}
