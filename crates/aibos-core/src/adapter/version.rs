use std::cmp::Ordering;

use semver::Version;
use serde::{Deserialize, Serialize};

/// How upgrade versions are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionPolicy {
    /// Semantic version ordering; both versions must parse.
    #[default]
    Semver,
    /// Plain string ordering (`"1.10.0" < "1.9.0"`).
    Lexicographic,
}

impl VersionPolicy {
    /// Accept `proposed` only if it is strictly greater than `current`.
    /// The error is a human readable reason.
    pub fn check_upgrade(&self, current: &str, proposed: &str) -> Result<(), String> {
        let ordering = match self {
            VersionPolicy::Semver => {
                let current = parse(current)?;
                let proposed = parse(proposed)?;
                current.cmp(&proposed)
            }
            VersionPolicy::Lexicographic => current.cmp(proposed),
        };
        match ordering {
            Ordering::Less => Ok(()),
            Ordering::Equal => Err("version must increase (same version)".to_string()),
            Ordering::Greater => Err("version must increase (downgrade)".to_string()),
        }
    }
}

fn parse(version: &str) -> Result<Version, String> {
    Version::parse(version).map_err(|e| format!("invalid semantic version '{}': {}", version, e))
}
