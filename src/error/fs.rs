//! File system and output errors

use super::BootvarsError;

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> BootvarsError {
    BootvarsError::IoError {
        message: message.into(),
    }
}

/// Creates a serialization failed error
pub fn serialization_failed(reason: impl Into<String>) -> BootvarsError {
    BootvarsError::SerializationFailed {
        reason: reason.into(),
    }
}
