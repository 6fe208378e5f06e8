//! Build-host detection.

use crate::platform::Platform;

impl Platform {
    /// The platform this process is running on, if it is a supported build
    /// host.
    ///
    /// Resolved at compile time from the target OS. Returns `None` on
    /// operating systems the engine has no host support for; callers treat
    /// that as "nothing to build", not as an error.
    pub fn current_host() -> Option<Platform> {
        if cfg!(target_os = "windows") {
            Some(Platform::Win64)
        } else if cfg!(target_os = "macos") {
            Some(Platform::Mac)
        } else if cfg!(target_os = "linux") {
            Some(Platform::Linux)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detected_host_is_a_host_platform() {
        // The test suite only runs on supported hosts.
        let host = Platform::current_host().unwrap();
        assert!(host.is_host());
    }

    #[test]
    fn detected_host_can_build_itself() {
        let host = Platform::current_host().unwrap();
        assert!(host.can_target(host));
    }
}
