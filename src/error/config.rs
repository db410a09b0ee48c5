//! Configuration errors

use super::MmakeError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> MmakeError {
    MmakeError::ConfigNotFound { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> MmakeError {
    MmakeError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a missing field error
pub fn missing_field(field: impl Into<String>, path: impl Into<String>) -> MmakeError {
    MmakeError::ConfigMissingField {
        field: field.into(),
        path: path.into(),
    }
}
