//! The built-in target descriptor table.
//!
//! The orchestrator links descriptor to project by name, the way the
//! engine's build tool matches a `<Project>.Target` rules class to its
//! project. Descriptors are registered here; there is no dynamic loading.

use crate::rules::TargetRules;
use crate::vehicle_game::VehicleGameTarget;

/// Every registered target descriptor, as (name, rules) pairs in listing
/// order.
pub fn builtin_rules() -> Vec<(&'static str, &'static dyn TargetRules)> {
    vec![("VehicleGame", &VehicleGameTarget)]
}

/// Resolve a target descriptor by project name, case-insensitively.
pub fn resolve_rules(name: &str) -> Option<&'static dyn TargetRules> {
    builtin_rules()
        .into_iter()
        .find(|(registered, _)| registered.eq_ignore_ascii_case(name))
        .map(|(_, rules)| rules)
}
