//! Report output
//!
//! This module provides:
//! - Structured per-category report lines
//! - Highlighting behind the `Highlighter` trait (ANSI or plain)
//! - Text output for human-readable display

mod text;

pub use text::TextFormatter;

use crate::domain::{Dependency, DependencyCategory};
use crate::update::find_out_of_date;
use colored::Colorize;
use semver::Version;
use std::fmt;

/// How a piece of report text should stand out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// An out-of-date dependency (white on red)
    Outdated,
    /// Nothing to upgrade (green)
    UpToDate,
    /// Plain informational text
    Info,
}

/// Trait for rendering text at a given severity
pub trait Highlighter {
    /// Return `text` decorated for `severity`
    fn highlight(&self, text: &str, severity: Severity) -> String;
}

/// Highlighter emitting ANSI color escapes
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiHighlighter;

impl Highlighter for AnsiHighlighter {
    fn highlight(&self, text: &str, severity: Severity) -> String {
        match severity {
            Severity::Outdated => text.bright_white().on_red().to_string(),
            Severity::UpToDate => text.green().to_string(),
            Severity::Info => text.to_string(),
        }
    }
}

/// Highlighter that leaves text untouched
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, text: &str, _severity: Severity) -> String {
        text.to_string()
    }
}

/// Create a highlighter, colored or plain
pub fn create_highlighter(color: bool) -> Box<dyn Highlighter> {
    if color {
        Box::new(AnsiHighlighter)
    } else {
        Box::new(PlainHighlighter)
    }
}

/// One line of a category section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    /// An out-of-date dependency
    Upgrade {
        name: String,
        current: Version,
        latest: Version,
    },
    /// The category has nothing to upgrade
    NoUpgradesRequired,
}

impl ReportLine {
    /// Create an upgrade line for a dependency
    pub fn upgrade(dependency: &Dependency) -> Self {
        ReportLine::Upgrade {
            name: dependency.name.clone(),
            current: dependency.current_version.clone(),
            latest: dependency.latest_version.clone(),
        }
    }

    /// Severity used when printing this line
    pub fn severity(&self) -> Severity {
        match self {
            ReportLine::Upgrade { .. } => Severity::Outdated,
            ReportLine::NoUpgradesRequired => Severity::UpToDate,
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Upgrade {
                name,
                current,
                latest,
            } => write!(f, "{} {} -> {}", name, current, latest),
            ReportLine::NoUpgradesRequired => write!(f, "No upgrades required"),
        }
    }
}

/// Report section for one dependency category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    /// Category being reported
    pub category: DependencyCategory,
    /// Lines of the section, in output order
    pub lines: Vec<ReportLine>,
}

impl CategoryReport {
    /// Build the section for a category's dependencies
    pub fn from_dependencies(category: DependencyCategory, dependencies: &[Dependency]) -> Self {
        let outdated = find_out_of_date(dependencies);
        let lines = if outdated.is_empty() {
            vec![ReportLine::NoUpgradesRequired]
        } else {
            outdated.into_iter().map(ReportLine::upgrade).collect()
        };

        Self { category, lines }
    }

    /// Section header line
    pub fn header(&self) -> String {
        format!("{} to upgrade:", self.category.label())
    }

    /// Number of out-of-date dependencies in this section
    pub fn outdated_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l, ReportLine::Upgrade { .. }))
            .count()
    }

    /// Returns true if nothing in this category needs upgrading
    pub fn is_up_to_date(&self) -> bool {
        self.outdated_count() == 0
    }
}
