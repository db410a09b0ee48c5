//! Bundle command implementation

use console::Style;

use crate::bundler::{self, BundleFilter};
use crate::cli::BundleArgs;
use crate::error::Result;
use crate::progress::ProgressDisplay;

/// Run bundle command
pub fn run(args: BundleArgs) -> Result<()> {
    let filter = BundleFilter {
        exclude_marker: args.exclude_marker,
        override_marker: args.override_marker,
        extension: args.extension,
        test_marker: args.test_marker,
    };

    let files = bundler::discover(&args.root, &filter)?;

    let progress = ProgressDisplay::new(files.len() as u64);
    let bundle = match bundler::read_all(files, |path| progress.update_file(path)) {
        Ok(bundle) => bundle,
        Err(e) => {
            progress.abandon();
            return Err(e);
        }
    };
    progress.finish();

    bundler::write_bundle(&bundle, &args.output)?;

    let total = bundle.len();
    let files_label = if total == 1 { "file" } else { "files" };
    println!(
        "{} {} {} into {}",
        Style::new().bold().apply_to("Bundled"),
        total,
        files_label,
        Style::new().bold().yellow().apply_to(args.output.display())
    );

    Ok(())
}
