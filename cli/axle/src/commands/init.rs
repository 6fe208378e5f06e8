//! `axle init` — project scaffolding.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::manifest::AxleManifest;

/// Create a new axle project at the given path.
///
/// `name` is the project name. The directory `name` is created relative to
/// cwd.
pub fn run(name: &str) -> Result<()> {
    let project_dir = Path::new(name);
    create_project(project_dir, name)
}

pub(crate) fn create_project(project_dir: &Path, name: &str) -> Result<()> {
    if project_dir.exists() {
        bail!("directory '{}' already exists", project_dir.display());
    }

    fs::create_dir_all(project_dir).context("creating project directory")?;

    let manifest_content = AxleManifest::template(name);
    fs::write(project_dir.join("axle.toml"), &manifest_content).context("writing axle.toml")?;

    println!("Created project '{name}'");
    println!("  {name}/axle.toml");
    println!();
    println!("The [target] rules name must match a registered target descriptor;");
    println!("run 'axle plan' inside the project to see its build matrix.");

    Ok(())
}
