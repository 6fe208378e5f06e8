//! Target platform model for the axle build pipeline.
//!
//! Defines the closed platform, configuration, and target-type enumerations
//! shared by target descriptors and the matrix planner, plus the
//! host-capability whitelist that bounds cross-compilation. The sets are
//! fixed by the engine; projects select from them but never extend them.

pub mod configuration;
pub mod error;
pub mod host;
pub mod platform;
pub mod target_type;

pub use configuration::Configuration;
pub use error::{Result, TargetError};
pub use platform::Platform;
pub use target_type::TargetType;
