//! CLI argument parsing module for depreport

use crate::report::RepositorySource;
use clap::Parser;
use std::path::PathBuf;

/// Report out-of-date dependencies from the dependency catalogue
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depreport",
    version,
    about = "Report out-of-date dependencies from the dependency catalogue"
)]
pub struct CliArgs {
    /// Repository name (default: resolved from `git remote -v`)
    #[arg(short, long)]
    pub repository: Option<String>,

    /// Directory whose git remotes identify the repository
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Do not show a spinner while fetching
    #[arg(long)]
    pub no_progress: bool,

    /// Enable verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Where the repository name should come from
    pub fn repository_source(&self) -> RepositorySource {
        match &self.repository {
            Some(name) => RepositorySource::Explicit(name.clone()),
            None => RepositorySource::GitRemote(self.path.clone()),
        }
    }

    /// Whether colors should be used, given the `NO_COLOR` variable
    pub fn use_color(&self, no_color_env: Option<&str>) -> bool {
        !self.no_color && no_color_env.is_none_or(|v| v.is_empty())
    }
}
