//! Command implementations
//!
//! Each submodule exposes a `run()` that takes the parsed CLI arguments and
//! delegates to the library modules.

pub mod build;
pub mod bundle;
pub mod completions;
pub mod version;
