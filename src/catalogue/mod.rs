//! Dependency catalogue access
//!
//! This module provides:
//! - The `CatalogueSource` seam for fetching all repository records
//! - An HTTP-backed source using the shared client
//! - Selection and decoding of the record for one repository
//!
//! Records are fetched as raw JSON. Only the selected record is decoded, so
//! a malformed record of another repository does not affect the report.

mod client;

pub use client::HttpClient;

use crate::domain::RepositoryDependencies;
use crate::error::CatalogueError;
use async_trait::async_trait;
use serde_json::Value;

/// Field identifying the repository of a catalogue record
const REPOSITORY_NAME_KEY: &str = "repositoryName";

/// Trait for sources of catalogue dependency records
#[async_trait]
pub trait CatalogueSource: Send + Sync {
    /// Fetch the raw records of every repository known to the catalogue
    async fn fetch_all(&self, url: &str) -> Result<Vec<Value>, CatalogueError>;
}

/// Catalogue source that performs a single HTTP GET
pub struct HttpCatalogue {
    client: HttpClient,
}

impl HttpCatalogue {
    /// Create a new HTTP catalogue source with a default client
    pub fn new() -> Result<Self, CatalogueError> {
        Ok(Self::with_client(HttpClient::new()?))
    }

    /// Create an HTTP catalogue source with a custom client
    pub fn with_client(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogueSource for HttpCatalogue {
    async fn fetch_all(&self, url: &str) -> Result<Vec<Value>, CatalogueError> {
        log::debug!("fetching dependencies from {}", url);
        let records: Vec<Value> = self.client.get_json(url).await?;
        log::debug!("catalogue returned {} repository records", records.len());
        Ok(records)
    }
}

/// Select and decode the record for `repository_name`
///
/// The first record with a matching name wins. A missing repository is an
/// error rather than an empty record; a malformed matching record is an
/// invalid response from `url`.
pub fn find_repository(
    records: Vec<Value>,
    repository_name: &str,
    url: &str,
) -> Result<RepositoryDependencies, CatalogueError> {
    let record = records
        .into_iter()
        .find(|r| r.get(REPOSITORY_NAME_KEY).and_then(Value::as_str) == Some(repository_name))
        .ok_or_else(|| CatalogueError::repository_not_found(repository_name))?;

    let dependencies: RepositoryDependencies = serde_json::from_value(record).map_err(|e| {
        CatalogueError::invalid_response(
            url,
            format!("invalid record for '{}': {}", repository_name, e),
        )
    })?;
    log::debug!(
        "'{}' tracks {} dependencies",
        repository_name,
        dependencies.total()
    );
    Ok(dependencies)
}

/// Fetch the catalogue and select the record for `repository_name`
pub async fn fetch_dependencies(
    source: &dyn CatalogueSource,
    url: &str,
    repository_name: &str,
) -> Result<RepositoryDependencies, CatalogueError> {
    let records = source.fetch_all(url).await?;
    find_repository(records, repository_name, url)
}
