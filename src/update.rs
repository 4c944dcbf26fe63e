//! Out-of-date detection
//!
//! A dependency is out of date when its latest version is strictly greater
//! than its current one, comparing major, then minor, then patch numerically.

use crate::domain::Dependency;

/// Return the out-of-date dependencies, preserving input order
pub fn find_out_of_date(dependencies: &[Dependency]) -> Vec<&Dependency> {
    dependencies.iter().filter(|d| d.is_out_of_date()).collect()
}
