//! Target rules for the VehicleGame project.

use axle_targets::{Configuration, Platform, TargetType};

use crate::formal::FormalBuildEntry;
use crate::rules::TargetRules;

/// Build rules for VehicleGame, the vehicle racing sample title.
///
/// VehicleGame ships as a single monolithic game executable. Desktop hosts
/// build their own platform, with Win64 additionally cross-building the
/// 32-bit Windows binary; formal builds use the Test configuration only.
#[derive(Debug, Clone, Copy, Default)]
pub struct VehicleGameTarget;

impl TargetRules for VehicleGameTarget {
    fn project_name(&self) -> &str {
        "VehicleGame"
    }

    fn target_type(&self) -> TargetType {
        TargetType::Game
    }

    fn extra_modules(&self, modules: &mut Vec<String>) {
        modules.push("VehicleGame".to_string());
    }

    fn monolithic_platforms(&self, host: Platform) -> Vec<Platform> {
        match host {
            Platform::Mac => vec![host],
            Platform::Win64 => vec![host, Platform::Win32],
            _ => Vec::new(),
        }
    }

    fn monolithic_configurations(&self, _host: Platform, _target: Platform) -> Vec<Configuration> {
        // Constant today; the planner still passes both platforms so the
        // policy can vary per pair without a contract change.
        vec![Configuration::Development, Configuration::Test]
    }

    fn formal_builds(&self, host: Platform) -> Vec<FormalBuildEntry> {
        if host == Platform::Win64 {
            vec![
                FormalBuildEntry::new(Platform::Win32, Configuration::Test, false),
                FormalBuildEntry::new(Platform::Win64, Configuration::Test, false),
            ]
        } else {
            // Every other host, the Mac host included, plans only the Mac
            // release candidate. Plan validation flags entries the host
            // cannot actually build.
            vec![FormalBuildEntry::new(
                Platform::Mac,
                Configuration::Test,
                false,
            )]
        }
    }
}
