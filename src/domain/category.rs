//! Dependency categories tracked by the catalogue

use std::fmt;

/// A named group of dependencies within a repository record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyCategory {
    /// Library dependencies (`libraryDependencies`)
    Library,
    /// SBT build plugins (`sbtPluginsDependencies`)
    SbtPlugin,
    /// Anything else the catalogue tracks (`otherDependencies`)
    Other,
}

impl DependencyCategory {
    /// All categories, in report order
    pub fn all() -> &'static [DependencyCategory] {
        &[
            DependencyCategory::Library,
            DependencyCategory::SbtPlugin,
            DependencyCategory::Other,
        ]
    }

    /// Section label used in the report
    pub fn label(&self) -> &'static str {
        match self {
            DependencyCategory::Library => "Libraries",
            DependencyCategory::SbtPlugin => "SBT plugins",
            DependencyCategory::Other => "Other dependencies",
        }
    }

    /// Field name of this category in the catalogue JSON
    pub fn json_key(&self) -> &'static str {
        match self {
            DependencyCategory::Library => "libraryDependencies",
            DependencyCategory::SbtPlugin => "sbtPluginsDependencies",
            DependencyCategory::Other => "otherDependencies",
        }
    }
}

impl fmt::Display for DependencyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
