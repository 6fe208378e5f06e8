//! Target platforms and the host-capability whitelist.
//!
//! A platform names an operating system/architecture the engine produces
//! binaries for. A subset of platforms can also act as build hosts; which
//! targets each host may build is a fixed whitelist, not something derived
//! from toolchain probing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TargetError;

/// A target operating system/architecture.
///
/// The set is closed: build tools and descriptors select from it but never
/// extend it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// 64-bit Windows.
    Win64,
    /// 32-bit Windows, cross-built from a Win64 host.
    Win32,
    /// macOS.
    Mac,
    /// Linux.
    Linux,
    /// Android devices (target only).
    Android,
    /// iOS devices (target only).
    #[serde(rename = "IOS")]
    Ios,
}

impl Platform {
    /// Canonical name, used in job identifiers and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Win64 => "Win64",
            Platform::Win32 => "Win32",
            Platform::Mac => "Mac",
            Platform::Linux => "Linux",
            Platform::Android => "Android",
            Platform::Ios => "IOS",
        }
    }

    /// Human-readable name for listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Win64 => "Windows 64-bit",
            Platform::Win32 => "Windows 32-bit",
            Platform::Mac => "macOS",
            Platform::Linux => "Linux",
            Platform::Android => "Android",
            Platform::Ios => "iOS",
        }
    }

    /// Every platform in the model, in listing order.
    pub fn all() -> &'static [Platform] {
        &[
            Platform::Win64,
            Platform::Win32,
            Platform::Mac,
            Platform::Linux,
            Platform::Android,
            Platform::Ios,
        ]
    }

    /// Whether this platform can act as a build host.
    pub fn is_host(&self) -> bool {
        matches!(self, Platform::Win64 | Platform::Mac | Platform::Linux)
    }

    /// Target platforms buildable from this platform acting as host.
    ///
    /// The host's native platform comes first. Platforms that cannot host
    /// builds return an empty slice.
    pub fn buildable_targets(&self) -> &'static [Platform] {
        match self {
            Platform::Win64 => &[
                Platform::Win64,
                Platform::Win32,
                Platform::Android,
                Platform::Linux,
            ],
            Platform::Mac => &[Platform::Mac, Platform::Ios],
            Platform::Linux => &[Platform::Linux],
            Platform::Win32 | Platform::Android | Platform::Ios => &[],
        }
    }

    /// Whether `target` can be built from this platform acting as host.
    pub fn can_target(&self, target: Platform) -> bool {
        self.buildable_targets().contains(&target)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = TargetError;

    /// Resolve a platform by canonical name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::all()
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TargetError::UnknownPlatform {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for &platform in Platform::all() {
            let parsed: Platform = platform.as_str().parse().unwrap();
            assert_eq!(parsed, platform);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("win64".parse::<Platform>().unwrap(), Platform::Win64);
        assert_eq!("MAC".parse::<Platform>().unwrap(), Platform::Mac);
        assert_eq!("ios".parse::<Platform>().unwrap(), Platform::Ios);
    }

    #[test]
    fn parse_unknown_platform() {
        let err = "Amiga".parse::<Platform>().unwrap_err();
        assert!(matches!(err, TargetError::UnknownPlatform { name } if name == "Amiga"));
    }

    #[test]
    fn host_platforms() {
        let hosts: Vec<Platform> = Platform::all()
            .iter()
            .copied()
            .filter(Platform::is_host)
            .collect();
        assert_eq!(hosts, vec![Platform::Win64, Platform::Mac, Platform::Linux]);
    }

    #[test]
    fn buildable_targets_native_first() {
        for &host in Platform::all() {
            if host.is_host() {
                assert_eq!(host.buildable_targets()[0], host);
            }
        }
    }

    #[test]
    fn buildable_targets_duplicate_free() {
        for &host in Platform::all() {
            let targets = host.buildable_targets();
            for (i, a) in targets.iter().enumerate() {
                assert!(!targets[i + 1..].contains(a), "{host} lists {a} twice");
            }
        }
    }

    #[test]
    fn target_only_platforms_host_nothing() {
        assert!(Platform::Win32.buildable_targets().is_empty());
        assert!(Platform::Android.buildable_targets().is_empty());
        assert!(Platform::Ios.buildable_targets().is_empty());
    }

    #[test]
    fn cross_compilation_whitelist() {
        assert!(Platform::Win64.can_target(Platform::Win32));
        assert!(Platform::Win64.can_target(Platform::Android));
        assert!(Platform::Mac.can_target(Platform::Ios));
        assert!(!Platform::Linux.can_target(Platform::Mac));
        assert!(!Platform::Mac.can_target(Platform::Win64));
    }
}
