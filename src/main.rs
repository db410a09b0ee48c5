//! Mmake - build runner and source bundler
//!
//! A command line helper for a Go desktop application: composes and runs the
//! `go build` invocation for the app, and packs the source tree into a single
//! JSON document for review or archival.

use clap::Parser;

mod bundler;
mod cli;
mod commands;
mod composer;
mod config;
mod error;
mod notify;
mod progress;
mod runner;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build(args) => commands::build::run(args),
        Commands::Bundle(args) => commands::bundle::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
