//! Axle CLI — build matrix planning for the axle build pipeline.

mod commands;
mod manifest;

use std::path::Path;
use std::process;

use anyhow::bail;
use clap::{Parser, Subcommand};

use axle_rules::{builtin_rules, resolve_rules, TargetRules, VehicleGameTarget};
use axle_targets::Platform;

use manifest::AxleManifest;

#[derive(Parser)]
#[command(name = "axle", version, about = "Build matrix planning for the axle pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new axle project
    Init {
        /// Project name
        name: String,
    },
    /// List platforms and configurations
    Targets,
    /// Show the monolithic platform/configuration matrix for a host
    Matrix {
        /// Host platform (e.g., Win64, Mac; default: detected host)
        #[arg(long)]
        host: Option<String>,
    },
    /// Show the formal (release-candidate) builds for a host
    Formal {
        /// Host platform (default: detected host)
        #[arg(long)]
        host: Option<String>,
    },
    /// Show the full build matrix plan for a host
    Plan {
        /// Host platform (default: detected host)
        #[arg(long)]
        host: Option<String>,
        /// Output format (human, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Check host and project status
    Doctor,
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { name } => commands::init::run(&name),

        Commands::Targets => commands::targets::run(),

        Commands::Matrix { host } => {
            let host = resolve_host(host.as_deref())?;
            let rules = resolve_project_rules(&cwd)?;
            commands::matrix::run(host, rules)
        }

        Commands::Formal { host } => {
            let host = resolve_host(host.as_deref())?;
            let rules = resolve_project_rules(&cwd)?;
            commands::formal::run(host, rules)
        }

        Commands::Plan { host, format } => {
            let host = resolve_host(host.as_deref())?;
            let rules = resolve_project_rules(&cwd)?;
            commands::plan::run(host, rules, format.as_deref())
        }

        Commands::Doctor => commands::doctor::run(&cwd),
    }
}

/// Resolve the host platform from `--host`, falling back to the detected
/// host.
fn resolve_host(flag: Option<&str>) -> anyhow::Result<Platform> {
    match flag {
        Some(name) => {
            let platform: Platform = name.parse()?;
            Ok(platform)
        }
        None => match Platform::current_host() {
            Some(host) => Ok(host),
            None => bail!("this machine is not a supported build host (pass --host)"),
        },
    }
}

/// Resolve the target rules for the current project.
///
/// With an `axle.toml` in scope the manifest's rules name is looked up in
/// the descriptor table; without one the tool falls back to the VehicleGame
/// descriptor so it stays usable outside a project checkout.
fn resolve_project_rules(cwd: &Path) -> anyhow::Result<&'static dyn TargetRules> {
    match AxleManifest::find_and_load(cwd)? {
        Some((manifest, _)) => {
            let name = manifest.rules_name();
            match resolve_rules(name) {
                Some(rules) => Ok(rules),
                None => {
                    let known: Vec<&str> = builtin_rules().into_iter().map(|(n, _)| n).collect();
                    bail!(
                        "no target rules registered for '{name}' (known: {})",
                        known.join(", ")
                    )
                }
            }
        }
        None => Ok(&VehicleGameTarget),
    }
}
