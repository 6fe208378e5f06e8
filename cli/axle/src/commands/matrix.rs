//! `axle matrix` — monolithic platform/configuration matrix.

use anyhow::Result;

use axle_rules::TargetRules;
use axle_targets::Platform;

/// Print the monolithic build matrix for `host`.
pub fn run(host: Platform, rules: &dyn TargetRules) -> Result<()> {
    println!("=== Monolithic Matrix: {} ===", rules.project_name());
    println!("Host: {host}");
    println!();

    let platforms = rules.monolithic_platforms(host);
    if platforms.is_empty() {
        println!("  (nothing to build on this host)");
        return Ok(());
    }

    for platform in platforms {
        let configurations = rules.monolithic_configurations(host, platform);
        let names: Vec<&str> = configurations.iter().map(|c| c.as_str()).collect();
        println!("  {:<8} {}", platform.as_str(), names.join(", "));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axle_rules::VehicleGameTarget;

    #[test]
    fn matrix_runs_for_every_host() {
        for &host in Platform::all() {
            run(host, &VehicleGameTarget).unwrap();
        }
    }
}
