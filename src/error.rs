//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ConfigError: Missing or invalid configuration
//! - RemoteError: Issues resolving the repository from git remotes
//! - CatalogueError: Issues fetching or decoding catalogue data

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git remote related errors
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// Catalogue related errors
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    /// Failed to write the report
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    /// Returns true if the catalogue URL was not configured
    pub fn is_url_not_set(&self) -> bool {
        matches!(self, AppError::Config(ConfigError::CatalogueUrlNotSet))
    }
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The catalogue URL environment variable is absent or blank
    #[error(
        "CATALOGUE_DEPENDENCIES_URL environment variable not set - cannot generate dependency report"
    )]
    CatalogueUrlNotSet,
}

/// Errors related to resolving the repository name
#[derive(Error, Debug)]
pub enum RemoteError {
    /// git could not be run, or exited unsuccessfully
    #[error("failed to list git remotes: {message}")]
    GitFailed { message: String },

    /// No remote matched the expected host/organization pattern
    #[error("no git remote matches {pattern}")]
    NoMatchingRemote { pattern: String },
}

/// Errors related to the dependency catalogue
#[derive(Error, Debug)]
pub enum CatalogueError {
    /// The HTTP client could not be built
    #[error("failed to create HTTP client: {message}")]
    Client { message: String },

    /// Network request failed
    #[error("failed to fetch {url}: {message}")]
    Network { url: String, message: String },

    /// Request timed out
    #[error("timeout while fetching {url}")]
    Timeout { url: String },

    /// Catalogue answered with a non-success status
    #[error("catalogue at {url} returned HTTP {status}")]
    Http { url: String, status: u16 },

    /// Body could not be decoded as catalogue records
    #[error("invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },

    /// No record for the repository
    #[error("repository '{repository}' not found in the dependency catalogue")]
    RepositoryNotFound { repository: String },
}

impl RemoteError {
    /// Creates a new GitFailed error
    pub fn git_failed(message: impl Into<String>) -> Self {
        RemoteError::GitFailed {
            message: message.into(),
        }
    }
}

impl CatalogueError {
    /// Creates a new Network error
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        CatalogueError::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(url: impl Into<String>, message: impl Into<String>) -> Self {
        CatalogueError::InvalidResponse {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new RepositoryNotFound error
    pub fn repository_not_found(repository: impl Into<String>) -> Self {
        CatalogueError::RepositoryNotFound {
            repository: repository.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_url_not_set() {
        let err = ConfigError::CatalogueUrlNotSet;
        assert_eq!(
            err.to_string(),
            "CATALOGUE_DEPENDENCIES_URL environment variable not set - cannot generate dependency report"
        );
    }

    #[test]
    fn test_remote_error_git_failed() {
        let err = RemoteError::git_failed("not a git repository");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to list git remotes"));
        assert!(msg.contains("not a git repository"));
    }

    #[test]
    fn test_remote_error_no_match() {
        let err = RemoteError::NoMatchingRemote {
            pattern: "github.com:hmrc/<name>.git".to_string(),
        };
        assert!(err.to_string().contains("github.com:hmrc"));
    }

    #[test]
    fn test_catalogue_error_network() {
        let err = CatalogueError::network("http://catalogue/deps", "connection refused");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to fetch http://catalogue/deps"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_catalogue_error_http() {
        let err = CatalogueError::Http {
            url: "http://catalogue/deps".to_string(),
            status: 503,
        };
        assert!(err.to_string().contains("HTTP 503"));
    }

    #[test]
    fn test_catalogue_error_repository_not_found() {
        let err = CatalogueError::repository_not_found("my-service");
        assert_eq!(
            err.to_string(),
            "repository 'my-service' not found in the dependency catalogue"
        );
    }

    #[test]
    fn test_app_error_is_url_not_set() {
        let err: AppError = ConfigError::CatalogueUrlNotSet.into();
        assert!(err.is_url_not_set());

        let err: AppError = CatalogueError::repository_not_found("x").into();
        assert!(!err.is_url_not_set());
    }

    #[test]
    fn test_app_error_transparent() {
        let err: AppError = RemoteError::git_failed("boom").into();
        assert_eq!(err.to_string(), "failed to list git remotes: boom");
    }
}
