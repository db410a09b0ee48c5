//! Build completion notification
//!
//! The original scripts played a platform sound when the compiler finished.
//! That is presentation, not build logic, so it lives behind a trait; the
//! default implementation prints a styled line and rings the terminal bell.

use console::Style;

/// Outcome reported to the notifier after the compiler exits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    Succeeded,
    Failed,
}

/// Completion notification seam
pub trait Notifier {
    fn notify(&self, outcome: BuildOutcome);
}

/// Notifier printing a styled completion line, optionally with the bell
pub struct ConsoleNotifier {
    bell: bool,
}

impl ConsoleNotifier {
    pub fn new(bell: bool) -> Self {
        Self { bell }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, outcome: BuildOutcome) {
        match outcome {
            BuildOutcome::Succeeded => {
                println!("{}", Style::new().bold().green().apply_to("Build finished"));
            }
            BuildOutcome::Failed => {
                println!("{}", Style::new().bold().red().apply_to("Build failed"));
            }
        }
        if self.bell {
            print!("\x07");
        }
    }
}
