//! Report configuration
//!
//! The catalogue URL is read through an injected lookup so that nothing
//! below the binary touches the process environment directly.

use crate::error::ConfigError;

/// Environment variable holding the catalogue dependencies URL
pub const CATALOGUE_URL_ENV: &str = "CATALOGUE_DEPENDENCIES_URL";

/// Inputs of a single report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Repository to report on
    pub repository_name: String,
    /// URL returning the catalogue's dependency records
    pub catalogue_url: String,
}

impl ReportConfig {
    /// Create a new report configuration
    pub fn new(repository_name: impl Into<String>, catalogue_url: impl Into<String>) -> Self {
        Self {
            repository_name: repository_name.into(),
            catalogue_url: catalogue_url.into(),
        }
    }
}

/// Read the catalogue URL using the given variable lookup
///
/// Blank values count as not set.
pub fn catalogue_url_from_env<F>(lookup: F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(CATALOGUE_URL_ENV) {
        Some(url) if !url.trim().is_empty() => Ok(url.trim().to_string()),
        _ => Err(ConfigError::CatalogueUrlNotSet),
    }
}

/// Lookup backed by the process environment
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
