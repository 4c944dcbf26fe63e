//! Report generation workflow
//!
//! This module provides:
//! - Workflow coordination: configure → resolve → fetch → compare → print
//! - Injection of the catalogue source, git runner and formatter
//! - The skip path when no catalogue URL is configured

use crate::catalogue::{fetch_dependencies, CatalogueSource};
use crate::config::{catalogue_url_from_env, ReportConfig};
use crate::domain::DependencyCategory;
use crate::error::AppError;
use crate::output::{CategoryReport, TextFormatter};
use crate::progress::Progress;
use crate::remote::{resolve_repository_name, GitRunner};
use std::io::Write;
use std::path::PathBuf;

/// Where the repository name comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositorySource {
    /// Resolve from `git remote -v` in this directory
    GitRemote(PathBuf),
    /// Use this name as given
    Explicit(String),
}

/// Resolve the full configuration of a run
///
/// The catalogue URL is checked first, so a missing URL never reaches git.
pub fn resolve_config<F>(
    lookup: F,
    git: &dyn GitRunner,
    repository: &RepositorySource,
) -> Result<ReportConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let catalogue_url = catalogue_url_from_env(lookup)?;
    let repository_name = match repository {
        RepositorySource::Explicit(name) => name.clone(),
        RepositorySource::GitRemote(dir) => resolve_repository_name(git, dir)?,
    };

    Ok(ReportConfig::new(repository_name, catalogue_url))
}

/// Generator for the dependency report of one repository
pub struct ReportGenerator {
    /// Repository and catalogue to report on
    config: ReportConfig,
    /// Source of catalogue records
    source: Box<dyn CatalogueSource>,
    /// Formatter for the report text
    formatter: TextFormatter,
    /// Whether to show a spinner while fetching
    show_progress: bool,
}

impl ReportGenerator {
    /// Create a new report generator
    pub fn new(
        config: ReportConfig,
        source: Box<dyn CatalogueSource>,
        formatter: TextFormatter,
    ) -> Self {
        Self {
            config,
            source,
            formatter,
            show_progress: false,
        }
    }

    /// Enable or disable the fetch spinner
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Fetch, compare and write the report
    pub async fn run(&self, writer: &mut dyn Write) -> Result<Vec<CategoryReport>, AppError> {
        let repository_name = &self.config.repository_name;
        self.formatter.format_intro(repository_name, writer)?;
        writer.flush()?;

        let mut progress = Progress::new(self.show_progress);
        progress.spinner("Fetching dependencies from catalogue...");
        let fetched = fetch_dependencies(
            self.source.as_ref(),
            &self.config.catalogue_url,
            repository_name,
        )
        .await;
        progress.finish_and_clear();
        let dependencies = fetched?;

        let mut reports = Vec::with_capacity(DependencyCategory::all().len());
        for category in DependencyCategory::all() {
            let report =
                CategoryReport::from_dependencies(*category, dependencies.dependencies(*category));
            log::debug!(
                "{} ({}): {} of {} out of date",
                category,
                category.json_key(),
                report.outdated_count(),
                dependencies.dependencies(*category).len()
            );
            self.formatter.format_category(&report, writer)?;
            reports.push(report);
        }

        Ok(reports)
    }
}

/// Resolve configuration and write the report
pub async fn run_report<F>(
    lookup: F,
    git: &dyn GitRunner,
    repository: &RepositorySource,
    source: Box<dyn CatalogueSource>,
    formatter: TextFormatter,
    show_progress: bool,
    writer: &mut dyn Write,
) -> Result<Vec<CategoryReport>, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = resolve_config(lookup, git, repository)?;
    ReportGenerator::new(config, source, formatter)
        .with_progress(show_progress)
        .run(writer)
        .await
}
