//! Candidates rejected during resolution, kept for reporting.

use std::fmt;

use serde::Serialize;

/// Every candidate version the search tried and threw away.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConflictReport {
    pub conflicts: Vec<VersionConflict>,
}

/// One rejected candidate: `package` at `version` could not be combined with
/// the restrictions already in force.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionConflict {
    pub package: String,
    pub version: String,
    pub reason: String,
}

impl ConflictReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, conflict: VersionConflict) {
        self.conflicts.push(conflict);
    }

    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conflicts.len()
    }

    /// Versions of `package` that were tried and rejected, in trial order.
    pub fn tried(&self, package: &str) -> Vec<String> {
        self.conflicts
            .iter()
            .filter(|c| c.package == package)
            .map(|c| c.version.clone())
            .collect()
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conflicts.is_empty() {
            return write!(f, "No rejected candidates.");
        }
        writeln!(f, "Rejected candidates ({}):", self.conflicts.len())?;
        for c in &self.conflicts {
            writeln!(f, "  {c}")?;
        }
        Ok(())
    }
}

impl fmt::Display for VersionConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}: {}", self.package, self.version, self.reason)
    }
}
