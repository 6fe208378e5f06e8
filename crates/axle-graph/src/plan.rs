//! Matrix plan construction.

use serde::Serialize;

use axle_rules::{FormalBuildEntry, TargetRules};
use axle_targets::{Configuration, Platform, TargetType};

use crate::validate::{check_formal_builds, check_monolithic_platforms, ValidationIssue};

/// One monolithic build job in the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonolithicJob {
    /// Pipeline job identifier, `{project}-{platform}-{configuration}`.
    pub id: String,
    /// Platform the job builds for.
    pub platform: Platform,
    /// Configuration the job builds in.
    pub configuration: Configuration,
}

/// The build matrix a continuous-build pipeline should produce for one
/// project on one host.
///
/// A plan is a snapshot of the descriptor's answers at configuration time:
/// it holds plain values, never re-queries the descriptor, and is cheap to
/// serialize. An empty matrix is a valid plan meaning "nothing to build on
/// this host".
#[derive(Debug, Clone, Serialize)]
pub struct MatrixPlan {
    /// Project the plan belongs to.
    pub project: String,
    /// Kind of binary the target produces.
    pub target_type: TargetType,
    /// Host the plan was computed for.
    pub host: Platform,
    /// Modules linked into the target binary, in append order.
    pub modules: Vec<String>,
    /// Monolithic jobs, in policy order: platforms as the descriptor listed
    /// them, configurations per platform as the descriptor listed them.
    pub monolithic: Vec<MonolithicJob>,
    /// Formal (release-candidate) entries, in policy order.
    pub formal: Vec<FormalBuildEntry>,
    /// Validation findings. Warnings only; a plan with warnings is still a
    /// plan.
    pub warnings: Vec<ValidationIssue>,
}

impl MatrixPlan {
    /// Run the configuration phase for `rules` on `host`.
    pub fn for_host(host: Platform, rules: &dyn TargetRules) -> Self {
        // The planner owns the module list; descriptors only append.
        let mut modules = Vec::new();
        rules.extra_modules(&mut modules);

        let project = rules.project_name().to_string();
        let platforms = rules.monolithic_platforms(host);

        let mut monolithic = Vec::new();
        for &platform in &platforms {
            for configuration in rules.monolithic_configurations(host, platform) {
                monolithic.push(MonolithicJob {
                    id: format!("{project}-{platform}-{configuration}"),
                    platform,
                    configuration,
                });
            }
        }

        let formal = rules.formal_builds(host);

        let mut warnings = check_monolithic_platforms(&platforms);
        warnings.extend(check_formal_builds(host, &formal));

        Self {
            project,
            target_type: rules.target_type(),
            host,
            modules,
            monolithic,
            formal,
            warnings,
        }
    }

    /// Whether the plan contains no jobs at all.
    pub fn is_empty(&self) -> bool {
        self.monolithic.is_empty() && self.formal.is_empty()
    }
}
