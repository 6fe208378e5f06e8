//! Plan validation.
//!
//! Validation runs after the policy queries and records findings instead of
//! rejecting the plan. The policy answers are taken as authoritative even
//! when they look wrong from the host's point of view; the pipeline decides
//! what to do with the warnings.

use serde::Serialize;

use axle_rules::FormalBuildEntry;
use axle_targets::Platform;

/// A single validation finding attached to a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Severity: "error" or "warning".
    pub severity: &'static str,
    /// Human-readable description.
    pub message: String,
}

impl ValidationIssue {
    fn warning(message: String) -> Self {
        Self {
            severity: "warning",
            message,
        }
    }
}

/// Check the monolithic platform list for duplicate entries.
pub fn check_monolithic_platforms(platforms: &[Platform]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for (i, platform) in platforms.iter().enumerate() {
        if platforms[i + 1..].contains(platform) {
            issues.push(ValidationIssue::warning(format!(
                "monolithic platform list contains {platform} more than once"
            )));
        }
    }
    issues
}

/// Check that every formal entry targets a platform buildable from `host`.
///
/// The VehicleGame policy plans a Mac formal build from every non-Win64
/// host, Linux included; this is where that shows up as a finding.
pub fn check_formal_builds(host: Platform, entries: &[FormalBuildEntry]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for entry in entries {
        if !host.can_target(entry.platform) {
            issues.push(ValidationIssue::warning(format!(
                "formal build {} is not buildable from a {host} host",
                entry
            )));
        }
    }
    issues
}
