//! `axle targets` — platform and configuration listing.

use anyhow::Result;

use axle_targets::{Configuration, Platform};

/// List every platform and configuration the engine defines.
pub fn run() -> Result<()> {
    let current = Platform::current_host();

    println!("Platforms:");
    println!();
    for &platform in Platform::all() {
        let role = if platform.is_host() {
            "host + target"
        } else {
            "target only"
        };
        let marker = if current == Some(platform) {
            "  (this machine)"
        } else {
            ""
        };
        println!(
            "  {:<8} {:<20} {role}{marker}",
            platform.as_str(),
            platform.display_name()
        );
    }

    println!();
    println!("Configurations:");
    println!();
    for &configuration in Configuration::all() {
        println!(
            "  {:<13} {}",
            configuration.as_str(),
            configuration.description()
        );
    }

    Ok(())
}
