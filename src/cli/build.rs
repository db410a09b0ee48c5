use clap::Parser;
use std::path::PathBuf;

/// Arguments for the build command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Production build (default):\n    mmake build\n\n\
                  Development build:\n    ENV=dev mmake build\n    mmake build --mode dev\n\n\
                  Custom config and output directory:\n    mmake build --config app/app_config.json --build-dir dist")]
pub struct BuildArgs {
    /// Path to the application config file
    #[arg(long, short = 'c', default_value = "app/app_config.json")]
    pub config: PathBuf,

    /// Directory the built executable is written to
    #[arg(long, default_value = "build")]
    pub build_dir: String,

    /// Package path passed to the compiler
    #[arg(long, short = 'p', default_value = "./cmd")]
    pub package: String,

    /// Build mode; `dev` selects development, anything else production
    #[arg(long, env = "ENV", value_name = "MODE")]
    pub mode: Option<String>,

    /// Skip the terminal bell on completion
    #[arg(long)]
    pub quiet_notify: bool,

    /// Print the composed command without running it
    #[arg(long)]
    pub dry_run: bool,
}
