//! Configuration errors

use super::BootvarsError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> BootvarsError {
    BootvarsError::ConfigNotFound { path: path.into() }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> BootvarsError {
    BootvarsError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> BootvarsError {
    BootvarsError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> BootvarsError {
    BootvarsError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a missing setting error
pub fn missing_setting(name: impl Into<String>) -> BootvarsError {
    BootvarsError::MissingSetting { name: name.into() }
}
