//! Compiler subprocess execution
//!
//! Spawns the composed command via the process API with discrete argument
//! tokens, inherits stdio, and waits synchronously. No timeout, no retry.

use std::process::Command;

use crate::composer::BuildCommand;
use crate::error::{self, Result};

/// Run a composed build command to completion
///
/// A failure to start the process is a spawn error; a non-zero exit is a
/// build failure carrying the exit status.
pub fn run(command: &BuildCommand) -> Result<()> {
    let status = Command::new(command.program())
        .args(command.args())
        .status()
        .map_err(|e| error::build::spawn_failed(command.program(), e.to_string()))?;

    if !status.success() {
        return Err(error::build::failed(status.to_string()));
    }

    Ok(())
}
