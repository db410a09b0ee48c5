//! Compiler invocation errors

use super::MmakeError;

/// Creates a compiler spawn failed error
pub fn spawn_failed(program: impl Into<String>, reason: impl Into<String>) -> MmakeError {
    MmakeError::CompilerSpawnFailed {
        program: program.into(),
        reason: reason.into(),
    }
}

/// Creates a build failed error from an exit status description
pub fn failed(status: impl Into<String>) -> MmakeError {
    MmakeError::BuildFailed {
        status: status.into(),
    }
}
