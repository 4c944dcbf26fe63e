//! Repository name resolution from git remotes
//!
//! The repository is identified by the first `git remote -v` line whose URL
//! has the form `...github.com:hmrc/<name>.git`.

use crate::error::RemoteError;
use regex::Regex;
use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;

/// Pattern a remote line must match; the capture is the repository name
const REMOTE_PATTERN: &str = r".*github.com:hmrc/(.*)\.git.*";

static REMOTE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(REMOTE_PATTERN).expect("Invalid remote pattern"));

/// Trait for listing git remotes
pub trait GitRunner {
    /// Return the output of `git remote -v` run in `working_dir`
    fn remotes(&self, working_dir: &Path) -> Result<String, RemoteError>;
}

/// Git runner that executes the real `git` binary
#[derive(Debug, Default)]
pub struct SystemGit;

impl SystemGit {
    /// Create a new system git runner
    pub fn new() -> Self {
        Self
    }
}

impl GitRunner for SystemGit {
    fn remotes(&self, working_dir: &Path) -> Result<String, RemoteError> {
        let output = Command::new("git")
            .args(["remote", "-v"])
            .current_dir(working_dir)
            .output()
            .map_err(|e| RemoteError::git_failed(format!("failed to execute git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RemoteError::git_failed(stderr.trim()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Extract the repository name from `git remote -v` output
///
/// Lines are tried in order and the first match wins.
pub fn parse_repository_name(output: &str) -> Result<String, RemoteError> {
    output
        .lines()
        .find_map(|line| {
            REMOTE_REGEX
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        })
        .ok_or_else(|| RemoteError::NoMatchingRemote {
            pattern: REMOTE_PATTERN.to_string(),
        })
}

/// List remotes with `runner` and resolve the repository name
pub fn resolve_repository_name(
    runner: &dyn GitRunner,
    working_dir: &Path,
) -> Result<String, RemoteError> {
    let output = runner.remotes(working_dir)?;
    let name = parse_repository_name(&output)?;
    log::debug!("resolved repository name '{}' from git remotes", name);
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock git runner returning canned output
    struct MockGit {
        output: Result<String, String>,
    }

    impl MockGit {
        fn with_output(output: &str) -> Self {
            Self {
                output: Ok(output.to_string()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                output: Err(message.to_string()),
            }
        }
    }

    impl GitRunner for MockGit {
        fn remotes(&self, _working_dir: &Path) -> Result<String, RemoteError> {
            self.output.clone().map_err(RemoteError::git_failed)
        }
    }

    #[test]
    fn test_parse_ssh_remote() {
        let output = "origin\tgit@github.com:hmrc/service-frontend.git (fetch)\n\
                      origin\tgit@github.com:hmrc/service-frontend.git (push)\n";
        assert_eq!(parse_repository_name(output).unwrap(), "service-frontend");
    }

    #[test]
    fn test_parse_first_matching_line_wins() {
        let output = "fork\tgit@github.com:someone/other.git (fetch)\n\
                      origin\tgit@github.com:hmrc/first-repo.git (fetch)\n\
                      upstream\tgit@github.com:hmrc/second-repo.git (fetch)\n";
        assert_eq!(parse_repository_name(output).unwrap(), "first-repo");
    }

    #[test]
    fn test_parse_https_remote_does_not_match() {
        let output = "origin\thttps://github.com/hmrc/service-frontend.git (fetch)\n";
        assert!(matches!(
            parse_repository_name(output),
            Err(RemoteError::NoMatchingRemote { .. })
        ));
    }

    #[test]
    fn test_parse_other_organization_does_not_match() {
        let output = "origin\tgit@github.com:acme/service.git (fetch)\n";
        assert!(parse_repository_name(output).is_err());
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(matches!(
            parse_repository_name(""),
            Err(RemoteError::NoMatchingRemote { .. })
        ));
    }

    #[test]
    fn test_resolve_with_mock_git() {
        let git = MockGit::with_output("origin\tgit@github.com:hmrc/catalogue.git (fetch)\n");
        let name = resolve_repository_name(&git, Path::new(".")).unwrap();
        assert_eq!(name, "catalogue");
    }

    #[test]
    fn test_resolve_propagates_git_failure() {
        let git = MockGit::failing("fatal: not a git repository");
        let err = resolve_repository_name(&git, Path::new(".")).unwrap_err();
        assert!(err.to_string().contains("not a git repository"));
    }

    #[test]
    fn test_system_git_outside_repository() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = resolve_repository_name(&SystemGit::new(), temp_dir.path());
        assert!(result.is_err());
    }
}
