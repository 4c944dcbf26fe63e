//! Dependency records as published by the catalogue

use super::{deserialize_version, DependencyCategory};
use semver::Version;
use serde::Deserialize;
use std::fmt;

/// A single tracked dependency with its current and latest versions
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    /// Dependency name
    pub name: String,
    /// Version the repository currently uses
    #[serde(deserialize_with = "deserialize_version")]
    pub current_version: Version,
    /// Latest version known to the catalogue
    #[serde(deserialize_with = "deserialize_version")]
    pub latest_version: Version,
}

impl Dependency {
    /// Creates a new dependency record
    pub fn new(name: impl Into<String>, current_version: Version, latest_version: Version) -> Self {
        Self {
            name: name.into(),
            current_version,
            latest_version,
        }
    }

    /// Returns true if the latest version is strictly newer than the current one
    pub fn is_out_of_date(&self) -> bool {
        self.latest_version > self.current_version
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {}",
            self.name, self.current_version, self.latest_version
        )
    }
}

/// All dependencies the catalogue tracks for one repository
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryDependencies {
    /// Repository name, as found in the git remote URL
    pub repository_name: String,
    pub library_dependencies: Vec<Dependency>,
    pub sbt_plugins_dependencies: Vec<Dependency>,
    pub other_dependencies: Vec<Dependency>,
}

impl RepositoryDependencies {
    /// Returns the dependencies of one category
    pub fn dependencies(&self, category: DependencyCategory) -> &[Dependency] {
        match category {
            DependencyCategory::Library => &self.library_dependencies,
            DependencyCategory::SbtPlugin => &self.sbt_plugins_dependencies,
            DependencyCategory::Other => &self.other_dependencies,
        }
    }

    /// Total number of tracked dependencies across all categories
    pub fn total(&self) -> usize {
        DependencyCategory::all()
            .iter()
            .map(|c| self.dependencies(*c).len())
            .sum()
    }
}
