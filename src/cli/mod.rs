//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - build: Build command arguments
//! - bundle: Bundle command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod build;
pub mod bundle;
pub mod completions;

pub use build::BuildArgs;
pub use bundle::BundleArgs;
pub use completions::CompletionsArgs;

/// Mmake - build runner and source bundler
///
/// Compose and run the application's `go build` invocation, or pack the
/// source tree into a single JSON document.
#[derive(Parser, Debug)]
#[command(
    name = "mmake",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Build runner and source bundler for a Go desktop application",
    long_about = "Mmake reads the application config (app/app_config.json), composes the \
                  `go build` command for the selected mode (ENV=dev for development, anything \
                  else for production) and runs it. It can also bundle the source tree into a \
                  single JSON document mapping relative paths to file contents.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  mmake build                            \x1b[90m# Production build from app/app_config.json\x1b[0m\n   \
                  ENV=dev mmake build                    \x1b[90m# Development build (debug tag, no trimpath)\x1b[0m\n   \
                  mmake bundle                           \x1b[90m# Bundle ./ into source_bundle.json\x1b[0m\n   \
                  mmake bundle --root pkg -o pkg.json    \x1b[90m# Bundle a subtree to a chosen output\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose and run the application build
    Build(BuildArgs),

    /// Bundle source files into a single JSON document
    Bundle(BundleArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
