//! Version command implementation
//!
//! Prints the crate version along with the bundle contract this build serves,
//! so a host can check which groups its clients will receive.

use console::Style;

use crate::bundle::GroupName;
use crate::config::CONFIG_ENV;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("bootvars {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    for (label, value) in build_info() {
        println!("  {}: {}", Style::new().cyan().apply_to(label), value);
    }

    Ok(())
}

/// Labelled build and contract facts, in display order
pub fn build_info() -> Vec<(&'static str, String)> {
    vec![
        ("Rust version", env!("CARGO_PKG_RUST_VERSION").to_string()),
        ("Profile", build_profile().to_string()),
        ("Bundle groups", GroupName::ALL.map(GroupName::as_str).join(", ")),
        ("Config variable", CONFIG_ENV.to_string()),
    ]
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
