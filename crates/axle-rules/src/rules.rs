//! The per-project target descriptor contract.

use axle_targets::{Configuration, Platform, TargetType};

use crate::formal::FormalBuildEntry;

/// Per-project build rules consumed by the matrix planner.
///
/// Implementations are stateless policy tables: every method is a pure
/// function of its arguments, re-evaluated on each call, with no retained
/// state between invocations. The provided defaults describe a project that
/// contributes nothing to the pipeline; projects override the pieces they
/// participate in.
pub trait TargetRules {
    /// Name of the project this descriptor belongs to.
    fn project_name(&self) -> &str;

    /// The kind of binary this target produces.
    fn target_type(&self) -> TargetType {
        TargetType::Game
    }

    /// Append the modules this project links into the target binary.
    ///
    /// `modules` is owned by the planner and may already carry entries
    /// contributed by others; implementations append their own and never
    /// remove or reorder what is already there.
    fn extra_modules(&self, _modules: &mut Vec<String>) {}

    /// Target platforms to build monolithically from `host`.
    ///
    /// Hosts the policy has no entry for yield an empty list, which callers
    /// treat as "nothing to build" rather than an error. When the host's
    /// native platform participates it comes first.
    fn monolithic_platforms(&self, _host: Platform) -> Vec<Platform> {
        Vec::new()
    }

    /// Configurations to build for `target` when building from `host`.
    fn monolithic_configurations(&self, _host: Platform, _target: Platform) -> Vec<Configuration> {
        Vec::new()
    }

    /// Release-candidate entries for the formal build matrix on `host`.
    fn formal_builds(&self, _host: Platform) -> Vec<FormalBuildEntry> {
        Vec::new()
    }
}

impl std::fmt::Debug for dyn TargetRules + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TargetRules")
            .field("project_name", &self.project_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A descriptor that overrides nothing.
    struct InertRules;

    impl TargetRules for InertRules {
        fn project_name(&self) -> &str {
            "Inert"
        }
    }

    #[test]
    fn defaults_contribute_nothing() {
        let rules = InertRules;
        assert_eq!(rules.target_type(), TargetType::Game);

        let mut modules = vec!["Engine".to_string()];
        rules.extra_modules(&mut modules);
        assert_eq!(modules, vec!["Engine".to_string()]);

        for &host in Platform::all() {
            assert!(rules.monolithic_platforms(host).is_empty());
            assert!(rules.formal_builds(host).is_empty());
            for &target in Platform::all() {
                assert!(rules.monolithic_configurations(host, target).is_empty());
            }
        }
    }

    #[test]
    fn trait_is_object_safe() {
        let rules: Box<dyn TargetRules> = Box::new(InertRules);
        assert_eq!(rules.project_name(), "Inert");
    }
}
