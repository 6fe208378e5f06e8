//! Subcommand implementations.

pub mod doctor;
pub mod formal;
pub mod init;
pub mod matrix;
pub mod plan;
pub mod targets;
