//! Version command implementation

use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("{}", version_text());
    Ok(())
}

fn version_text() -> String {
    format!(
        "coregen {}\n\nBuild info:\n  Rust version: {}\n  Profile: {}\n  Default registry: {}",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_RUST_VERSION"),
        build_profile(),
        crate::registry::DEFAULT_REGISTRY,
    )
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
