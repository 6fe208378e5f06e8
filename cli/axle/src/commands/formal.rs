//! `axle formal` — formal (release-candidate) build listing.

use anyhow::Result;

use axle_rules::TargetRules;
use axle_targets::Platform;

/// Print the formal build entries for `host`.
pub fn run(host: Platform, rules: &dyn TargetRules) -> Result<()> {
    println!("=== Formal Builds: {} ===", rules.project_name());
    println!("Host: {host}");
    println!();

    let entries = rules.formal_builds(host);
    if entries.is_empty() {
        println!("  (none)");
        return Ok(());
    }

    for entry in &entries {
        let note = if host.can_target(entry.platform) {
            ""
        } else {
            "  (not buildable from this host)"
        };
        println!("  {entry}{note}");
    }

    Ok(())
}
