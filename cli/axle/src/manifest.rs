//! `axle.toml` manifest parsing and project configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Engine version this tool ships with, checked against the manifest's
/// `engine` requirement.
pub const ENGINE_VERSION: &str = "4.27.2";

/// The top-level manifest structure for an axle project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxleManifest {
    /// Project metadata (required).
    pub project: ProjectConfig,
    /// Target configuration.
    #[serde(default)]
    pub target: Option<TargetConfig>,
}

/// Project metadata section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name (required).
    pub name: String,
    /// Project version.
    #[serde(default = "default_version")]
    pub version: String,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
    /// Engine version requirement (semver, e.g. "^4.27").
    #[serde(default)]
    pub engine: Option<String>,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

/// Target configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Name of the target rules descriptor; defaults to the project name.
    #[serde(default)]
    pub rules: Option<String>,
    /// Default build configuration name.
    #[serde(default)]
    pub default_configuration: Option<String>,
}

impl AxleManifest {
    /// Search upward from `start_dir` for an `axle.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join("axle.toml");
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: AxleManifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing axle.toml")
    }

    /// Name of the target rules descriptor this project uses.
    pub fn rules_name(&self) -> &str {
        self.target
            .as_ref()
            .and_then(|t| t.rules.as_deref())
            .unwrap_or(&self.project.name)
    }

    /// Parsed engine version requirement, if the manifest declares one.
    pub fn engine_requirement(&self) -> Result<Option<semver::VersionReq>> {
        match self.project.engine.as_deref() {
            Some(req) => {
                let parsed = semver::VersionReq::parse(req)
                    .with_context(|| format!("invalid engine requirement '{req}'"))?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    /// Generate the default template for `axle init`.
    pub fn template(name: &str) -> String {
        format!(
            r#"[project]
name = "{name}"
version = "0.1.0"
engine = "^4.27"

[target]
rules = "{name}"
default_configuration = "Development"
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_manifest() {
        let toml_str = r#"
[project]
name = "VehicleGame"
version = "1.0.0"
description = "Vehicle racing sample title"
engine = "^4.27"

[target]
rules = "VehicleGame"
default_configuration = "Development"
"#;
        let manifest = AxleManifest::from_str(toml_str).unwrap();
        assert_eq!(manifest.project.name, "VehicleGame");
        assert_eq!(manifest.project.version, "1.0.0");
        assert_eq!(manifest.rules_name(), "VehicleGame");
        let req = manifest.engine_requirement().unwrap().unwrap();
        assert!(req.matches(&semver::Version::parse(ENGINE_VERSION).unwrap()));
    }

    #[test]
    fn parse_minimal_manifest() {
        let toml_str = r#"
[project]
name = "minimal"
"#;
        let manifest = AxleManifest::from_str(toml_str).unwrap();
        assert_eq!(manifest.project.name, "minimal");
        assert_eq!(manifest.project.version, "0.1.0");
        assert!(manifest.engine_requirement().unwrap().is_none());
    }

    #[test]
    fn rules_name_defaults_to_project_name() {
        let toml_str = r#"
[project]
name = "VehicleGame"
"#;
        let manifest = AxleManifest::from_str(toml_str).unwrap();
        assert_eq!(manifest.rules_name(), "VehicleGame");
    }

    #[test]
    fn rules_name_can_diverge_from_project_name() {
        let toml_str = r#"
[project]
name = "vehicle-game-workspace"

[target]
rules = "VehicleGame"
"#;
        let manifest = AxleManifest::from_str(toml_str).unwrap();
        assert_eq!(manifest.rules_name(), "VehicleGame");
    }

    #[test]
    fn invalid_engine_requirement_is_an_error() {
        let toml_str = r#"
[project]
name = "broken"
engine = "not a version"
"#;
        let manifest = AxleManifest::from_str(toml_str).unwrap();
        assert!(manifest.engine_requirement().is_err());
    }

    #[test]
    fn reject_invalid_toml() {
        let bad = "this is not valid toml [[[";
        assert!(AxleManifest::from_str(bad).is_err());
    }

    #[test]
    fn template_is_valid_toml() {
        let template = AxleManifest::template("VehicleGame");
        let manifest = AxleManifest::from_str(&template).unwrap();
        assert_eq!(manifest.project.name, "VehicleGame");
        assert_eq!(manifest.rules_name(), "VehicleGame");
        let req = manifest.engine_requirement().unwrap().unwrap();
        assert!(req.matches(&semver::Version::parse(ENGINE_VERSION).unwrap()));
    }

    #[test]
    fn find_and_load_in_current_dir() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_path = dir.path().join("axle.toml");
        std::fs::write(&manifest_path, "[project]\nname = \"here\"\n").unwrap();

        let result = AxleManifest::find_and_load(dir.path()).unwrap();
        let (manifest, found_dir) = result.unwrap();
        assert_eq!(manifest.project.name, "here");
        assert_eq!(found_dir, dir.path());
    }

    #[test]
    fn find_and_load_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_path = dir.path().join("axle.toml");
        std::fs::write(&manifest_path, "[project]\nname = \"parent\"\n").unwrap();

        let nested = dir.path().join("a").join("b").join("c");
        std::fs::create_dir_all(&nested).unwrap();

        let result = AxleManifest::find_and_load(&nested).unwrap();
        let (manifest, found_dir) = result.unwrap();
        assert_eq!(manifest.project.name, "parent");
        assert_eq!(found_dir, dir.path());
    }
}
