//! `axle doctor` — host and project diagnostics.

use std::path::Path;

use anyhow::Result;

use axle_rules::{builtin_rules, resolve_rules};
use axle_targets::Platform;

use crate::manifest::{AxleManifest, ENGINE_VERSION};

/// Print diagnostic information about the host and the current project.
pub fn run(project_dir: &Path) -> Result<()> {
    println!("=== Axle Doctor ===");
    println!();

    println!("Axle version:   {}", env!("CARGO_PKG_VERSION"));
    println!("Engine version: {ENGINE_VERSION}");
    println!();

    println!("--- Host ---");
    match Platform::current_host() {
        Some(host) => {
            println!("  Detected host: {} ({})", host, host.display_name());
            let targets: Vec<&str> = host
                .buildable_targets()
                .iter()
                .map(|p| p.as_str())
                .collect();
            println!("  Buildable targets: {}", targets.join(", "));
        }
        None => {
            println!("  Detected host: unsupported (no targets buildable from this machine)");
        }
    }
    println!();

    println!("--- Registered Descriptors ---");
    for (name, rules) in builtin_rules() {
        println!("  {:<15} {}", name, rules.target_type());
    }
    println!();

    println!("--- Project Status ---");
    match AxleManifest::find_and_load(project_dir) {
        Ok(Some((manifest, dir))) => {
            println!("  axle.toml: found at {}", dir.display());
            println!("  Project:   {}", manifest.project.name);
            println!("  Version:   {}", manifest.project.version);

            let rules_name = manifest.rules_name();
            match resolve_rules(rules_name) {
                Some(_) => println!("  Rules:     {rules_name}"),
                None => println!("  Rules:     {rules_name} (no registered descriptor!)"),
            }

            match manifest.engine_requirement() {
                Ok(Some(req)) => {
                    let compatible = semver::Version::parse(ENGINE_VERSION)
                        .map(|engine| req.matches(&engine))
                        .unwrap_or(false);
                    let verdict = if compatible {
                        "compatible"
                    } else {
                        "NOT compatible with this engine"
                    };
                    println!("  Engine:    requires {req} ({verdict})");
                }
                Ok(None) => println!("  Engine:    no requirement declared"),
                Err(e) => println!("  Engine:    error — {e}"),
            }
        }
        Ok(None) => {
            println!("  axle.toml: not found (run 'axle init' to create a project)");
        }
        Err(e) => {
            println!("  axle.toml: error — {e}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn doctor_runs_without_error() {
        let dir = tempfile::tempdir().unwrap();
        super::run(dir.path()).unwrap();
    }

    #[test]
    fn doctor_runs_with_manifest() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("axle.toml"),
            "[project]\nname = \"VehicleGame\"\nengine = \"^4.27\"\n",
        )
        .unwrap();
        super::run(dir.path()).unwrap();
    }
}
