//! Version triples as published by the catalogue
//!
//! The catalogue sends versions as `{"major": 1, "minor": 2, "patch": 3}`
//! objects. They are held as [`semver::Version`] values without pre-release
//! or build metadata, so ordering is numeric and component-wise.

use semver::Version;
use serde::{Deserialize, Deserializer};

/// Wire shape of a catalogue version
#[derive(Debug, Clone, Copy, Deserialize)]
struct VersionParts {
    major: u64,
    minor: u64,
    patch: u64,
}

impl From<VersionParts> for Version {
    fn from(parts: VersionParts) -> Self {
        Version::new(parts.major, parts.minor, parts.patch)
    }
}

/// Deserialize a catalogue version object into a [`Version`]
pub fn deserialize_version<'de, D>(deserializer: D) -> Result<Version, D::Error>
where
    D: Deserializer<'de>,
{
    VersionParts::deserialize(deserializer).map(Version::from)
}
