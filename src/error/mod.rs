//! Error types and handling for Mmake
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Configuration errors
//! - [`build`]: Compiler invocation errors
//! - [`fs`]: File system errors

// Declare submodules
pub mod build;
pub mod config;
pub mod fs;

// Re-export convenience constructors from submodules (used in tests only)
#[allow(unused_imports)]
pub use build::{failed as build_failed, spawn_failed as compiler_spawn_failed};
#[allow(unused_imports)]
pub use config::{
    missing_field as config_missing_field, not_found as config_not_found,
    parse_failed as config_parse_failed,
};
#[allow(unused_imports)]
pub use fs::{io_error, read_failed as file_read_failed, write_failed as file_write_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Mmake operations
#[derive(Error, Diagnostic, Debug)]
pub enum MmakeError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(mmake::config::not_found),
        help("The build reads app/app_config.json by default; pass --config to use another file")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(mmake::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Missing required config field '{field}' in {path}")]
    #[diagnostic(
        code(mmake::config::missing_field),
        help("The config must carry non-empty AppName (or legacy Name) and Version fields")
    )]
    ConfigMissingField { field: String, path: String },

    // Compiler invocation errors
    #[error("Failed to start compiler '{program}': {reason}")]
    #[diagnostic(
        code(mmake::build::spawn_failed),
        help("Check that the Go toolchain is installed and on PATH")
    )]
    CompilerSpawnFailed { program: String, reason: String },

    #[error("Build failed with {status}")]
    #[diagnostic(code(mmake::build::failed))]
    BuildFailed { status: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(mmake::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(mmake::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(mmake::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for MmakeError {
    fn from(err: std::io::Error) -> Self {
        MmakeError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MmakeError {
    fn from(err: serde_json::Error) -> Self {
        MmakeError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MmakeError>;
