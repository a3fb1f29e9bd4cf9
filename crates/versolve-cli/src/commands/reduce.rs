//! Handler for `versolve reduce`.

use miette::Result;

pub fn exec(constraints: &[String], available: &[String]) -> Result<()> {
    versolve_ops::ops_reduce::reduce(constraints, available)
}
