//! Errors raised by version parsing, range reduction, and the resolver search.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ResolveError {
    /// A version or constraint string does not match the semver grammar.
    #[error("Invalid version string '{input}'")]
    #[diagnostic(help("Expected [>=|>|<=|<|=]MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]"))]
    InvalidVersion { input: String },

    /// Intersecting the requested ranges left nothing, or two exact pins disagree.
    #[error("Could not find a satisfactory version from options: {}", format_list(.requested))]
    VersionsNotCompatible { requested: Vec<String> },

    #[error("Package {package} was not found in the package index")]
    PackageNotFound { package: String },

    #[error(
        "Could not find a matching version for package {package}\n  Requested range: {range}\n  Available versions: {}",
        format_list(.available)
    )]
    NoMatchingVersion {
        package: String,
        range: String,
        available: Vec<String>,
    },

    /// Every candidate for a package was rejected by downstream validation.
    #[error(
        "No match found -- exhausted this part of the tree for {package} ({range}); tried {}",
        format_list(.tried)
    )]
    Exhausted {
        package: String,
        range: String,
        tried: Vec<String>,
    },

    /// Two branches of the search committed different versions for one package.
    /// The search never produces this; it guards the single-pin invariant.
    #[error("Package {package} was selected at both {first} and {second}")]
    ConflictingSelection {
        package: String,
        first: String,
        second: String,
    },
}

impl ResolveError {
    /// Whether the search may recover from this error by trying another candidate.
    pub fn is_incompatibility(&self) -> bool {
        matches!(self, Self::VersionsNotCompatible { .. })
    }
}

fn format_list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}
