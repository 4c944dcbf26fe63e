//! Core domain models for depreport
//!
//! This module contains the types read from the catalogue:
//! - Dependency categories reported per repository
//! - Dependency records with current and latest versions
//! - Version triples and their wire format

mod category;
mod dependency;
mod version;

pub use category::DependencyCategory;
pub use dependency::{Dependency, RepositoryDependencies};
pub use version::deserialize_version;
