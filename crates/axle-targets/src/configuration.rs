//! Build configurations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TargetError;

/// A build configuration (optimization/diagnostics profile).
///
/// These are defined by the engine and never vary per project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Configuration {
    /// Engine and game compiled with full debug information, no
    /// optimization.
    Debug,
    /// Optimized engine with debuggable game modules.
    DebugGame,
    /// Optimized build with development checks enabled; the day-to-day
    /// profile.
    #[default]
    Development,
    /// Shipping-level optimization with testing hooks left enabled.
    Test,
    /// Fully optimized release build with development features stripped.
    Shipping,
}

impl Configuration {
    /// Canonical name, used in job identifiers and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Configuration::Debug => "Debug",
            Configuration::DebugGame => "DebugGame",
            Configuration::Development => "Development",
            Configuration::Test => "Test",
            Configuration::Shipping => "Shipping",
        }
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Configuration::Debug => "full debug info, no optimization",
            Configuration::DebugGame => "optimized engine, debuggable game modules",
            Configuration::Development => "optimized with development checks (default)",
            Configuration::Test => "shipping optimization with testing hooks",
            Configuration::Shipping => "fully optimized, development features stripped",
        }
    }

    /// Every configuration, in listing order.
    pub fn all() -> &'static [Configuration] {
        &[
            Configuration::Debug,
            Configuration::DebugGame,
            Configuration::Development,
            Configuration::Test,
            Configuration::Shipping,
        ]
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Configuration {
    type Err = TargetError;

    /// Resolve a configuration by canonical name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Configuration::all()
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TargetError::UnknownConfiguration {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for &config in Configuration::all() {
            let parsed: Configuration = config.as_str().parse().unwrap();
            assert_eq!(parsed, config);
        }
    }

    #[test]
    fn development_is_default() {
        assert_eq!(Configuration::default(), Configuration::Development);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            "debuggame".parse::<Configuration>().unwrap(),
            Configuration::DebugGame
        );
        assert_eq!(
            "SHIPPING".parse::<Configuration>().unwrap(),
            Configuration::Shipping
        );
    }

    #[test]
    fn parse_unknown_configuration() {
        let err = "Profiling".parse::<Configuration>().unwrap_err();
        assert!(matches!(err, TargetError::UnknownConfiguration { name } if name == "Profiling"));
    }

    #[test]
    fn every_configuration_described() {
        for &config in Configuration::all() {
            assert!(!config.description().is_empty());
        }
    }
}
