//! Per-project target descriptors for the axle build pipeline.
//!
//! A target descriptor declares what a project builds (target type, game
//! modules) and which platform/configuration combinations the
//! continuous-build pipeline should produce for it. The planner in
//! `axle-graph` consumes descriptors through the [`TargetRules`] trait
//! during its configuration phase; descriptors themselves stay pure policy
//! and never touch the filesystem or spawn tools.

pub mod builtin;
pub mod formal;
pub mod rules;
pub mod vehicle_game;

pub use builtin::{builtin_rules, resolve_rules};
pub use formal::FormalBuildEntry;
pub use rules::TargetRules;
pub use vehicle_game::VehicleGameTarget;
