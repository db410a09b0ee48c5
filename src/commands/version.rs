//! Version command implementation

use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("mmake {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  MSRV: {}", msrv());
    println!("  Profile: {}", build_profile());

    Ok(())
}

fn msrv() -> &'static str {
    // The rust-version declared in the manifest, not the compiling rustc
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
