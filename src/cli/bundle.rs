use clap::Parser;
use std::path::PathBuf;

/// Arguments for the bundle command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Bundle the current tree:\n    mmake bundle\n\n\
                  Bundle a subtree to a chosen output:\n    mmake bundle --root pkg --output pkg_sources.json\n\n\
                  Custom markers:\n    mmake bundle --exclude-marker vendor --test-marker _test")]
pub struct BundleArgs {
    /// Root directory to scan
    #[arg(long, short = 'r', default_value = ".")]
    pub root: PathBuf,

    /// Output path for the JSON document
    #[arg(long, short = 'o', default_value = "source_bundle.json")]
    pub output: PathBuf,

    /// Path marker excluding a subtree from the bundle
    #[arg(long, default_value = "bt")]
    pub exclude_marker: String,

    /// Path marker re-including files under an excluded subtree
    #[arg(long, default_value = "mbt")]
    pub override_marker: String,

    /// Source file extension to include
    #[arg(long, default_value = ".go")]
    pub extension: String,

    /// File name marker excluding test files
    #[arg(long, default_value = "_test")]
    pub test_marker: String,
}
