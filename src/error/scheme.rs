//! Authentication scheme provider errors

use super::BootvarsError;

/// Creates a scheme enumeration failed error
pub fn enumeration_failed(reason: impl Into<String>) -> BootvarsError {
    BootvarsError::SchemeEnumerationFailed {
        reason: reason.into(),
    }
}
