//! Operation: reduce a set of constraints to one range.

use tracing::info;

use versolve_resolver::reducer::{reduce_versions, resolve_to_specific_version};
use versolve_util::errors::{VersolveError, VersolveResult};

/// Reduce `constraints` and print the resulting range. With `available`
/// versions, also print the newest one inside it.
pub fn reduce(constraints: &[String], available: &[String]) -> VersolveResult<()> {
    let range = reduce_versions(constraints)?;
    info!(range = %range, "reduced {} constraints", constraints.len());
    println!("{range}");

    if available.is_empty() {
        return Ok(());
    }

    match resolve_to_specific_version(&range, available)? {
        Some(version) => {
            println!("{version}");
            Ok(())
        }
        None => Err(VersolveError::Resolution {
            message: format!(
                "No available version satisfies {range} (available: {})",
                available.join(", ")
            ),
        }
        .into()),
    }
}
