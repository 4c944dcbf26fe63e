//! HTTP client for the dependency catalogue
//!
//! Thin wrapper over reqwest with a fixed timeout and User-Agent.
//! Requests are made once: a failed fetch is reported, never retried.

use crate::error::CatalogueError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default timeout for HTTP requests (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("depreport/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, CatalogueError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, CatalogueError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| CatalogueError::Client {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// Perform a GET request, failing on non-success statuses
    pub async fn get(&self, url: &str) -> Result<reqwest::Response, CatalogueError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                CatalogueError::Timeout {
                    url: url.to_string(),
                }
            } else {
                CatalogueError::network(url, e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogueError::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    /// Perform a GET request and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogueError> {
        let response = self.get(url).await?;

        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                CatalogueError::invalid_response(url, format!("failed to parse JSON: {}", e))
            } else {
                CatalogueError::network(url, format!("failed to read body: {}", e))
            }
        })
    }
}
