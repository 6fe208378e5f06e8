//! Formal (release-candidate) build matrix entries.

use std::fmt;

use serde::{Deserialize, Serialize};

use axle_targets::{Configuration, Platform};

/// One release-candidate job in the formal build matrix.
///
/// Formal builds are produced for distribution and QA sign-off, distinct
/// from the day-to-day monolithic matrix. Entries are plain values:
/// constructed fresh on every policy query, never mutated, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormalBuildEntry {
    /// Platform the release candidate targets.
    pub platform: Platform,
    /// Configuration the release candidate is built in.
    pub configuration: Configuration,
    /// Whether the monolithic binary is produced for internal tooling only
    /// rather than for distribution.
    pub tool_only: bool,
}

impl FormalBuildEntry {
    /// Construct an entry.
    pub fn new(platform: Platform, configuration: Configuration, tool_only: bool) -> Self {
        Self {
            platform,
            configuration,
            tool_only,
        }
    }
}

impl fmt::Display for FormalBuildEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.platform, self.configuration)?;
        if self.tool_only {
            write!(f, " [tool-only]")?;
        }
        Ok(())
    }
}
