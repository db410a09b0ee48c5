//! Build command implementation
//!
//! Loads the application config, resolves the build mode, composes the
//! compiler invocation and runs it. Success or failure is reported through
//! the notifier after the compiler exits.

use console::Style;

use crate::cli::BuildArgs;
use crate::composer;
use crate::config::{AppConfig, BuildMode};
use crate::error::Result;
use crate::notify::{BuildOutcome, ConsoleNotifier, Notifier};
use crate::runner;

/// Run build command
pub fn run(args: BuildArgs) -> Result<()> {
    let config = AppConfig::load(&args.config)?;
    let mode = BuildMode::from_env_value(args.mode.as_deref());

    let command = composer::compose(&config, mode, &args.build_dir, &args.package);

    println!(
        "{} {} {} ({} mode)",
        Style::new().bold().apply_to("Building"),
        Style::new().bold().yellow().apply_to(&config.name),
        config.version,
        mode
    );
    println!("  {}", Style::new().dim().apply_to(command.to_string()));

    if args.dry_run {
        return Ok(());
    }

    let notifier = ConsoleNotifier::new(!args.quiet_notify);
    let result = runner::run(&command);

    let outcome = if result.is_ok() {
        BuildOutcome::Succeeded
    } else {
        BuildOutcome::Failed
    };
    notifier.notify(outcome);

    result
}
