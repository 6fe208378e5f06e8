//! `axle plan` — full build matrix plan.

use anyhow::{bail, Result};

use axle_graph::MatrixPlan;
use axle_rules::TargetRules;
use axle_targets::Platform;

/// Compute and render the plan for `host`.
///
/// `format` is "human" (default) or "json".
pub fn run(host: Platform, rules: &dyn TargetRules, format: Option<&str>) -> Result<()> {
    let plan = MatrixPlan::for_host(host, rules);

    match format.unwrap_or("human") {
        "human" => print!("{plan}"),
        "json" => println!("{}", serde_json::to_string_pretty(&plan)?),
        other => bail!("unknown plan format: '{other}' (expected 'human' or 'json')"),
    }

    Ok(())
}
