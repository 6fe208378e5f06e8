//! Error types for the target platform model.

/// Errors raised when resolving names against the closed model sets.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    /// Platform name not in the closed platform set.
    #[error("unknown platform: '{name}'")]
    UnknownPlatform {
        /// The name that failed to resolve.
        name: String,
    },

    /// Configuration name not in the closed configuration set.
    #[error("unknown configuration: '{name}'")]
    UnknownConfiguration {
        /// The name that failed to resolve.
        name: String,
    },

    /// Target-type name not in the closed target-type set.
    #[error("unknown target type: '{name}'")]
    UnknownTargetType {
        /// The name that failed to resolve.
        name: String,
    },
}

/// Result type for target model operations.
pub type Result<T> = std::result::Result<T, TargetError>;
