//! Build matrix planning for the axle build pipeline.
//!
//! Performs the orchestrator's configuration phase for one project: query
//! the project's target descriptor for modules, monolithic targets, and
//! formal builds on a given host, and assemble the answers into a
//! [`MatrixPlan`] the pipeline (or a human) can consume. Planning never
//! fails; findings that would merit attention are carried on the plan as
//! warnings.

pub mod plan;
pub mod report;
pub mod validate;

pub use plan::{MatrixPlan, MonolithicJob};
pub use validate::ValidationIssue;
