//! depreport - Dependency catalogue report library
//!
//! This library provides the core functionality for reporting out-of-date
//! dependencies of a repository:
//! - Repository name resolution from git remotes
//! - Fetching dependency records from the catalogue
//! - Out-of-date detection by version comparison
//! - Colorized text reporting

pub mod catalogue;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod output;
pub mod progress;
pub mod remote;
pub mod report;
pub mod update;
