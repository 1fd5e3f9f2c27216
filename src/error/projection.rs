//! Projection errors

use super::BootvarsError;

/// Creates a shape mismatch error for a group that cannot be key-filtered
pub fn shape_mismatch(group: impl Into<String>, found: impl Into<String>) -> BootvarsError {
    BootvarsError::ProjectionShapeMismatch {
        group: group.into(),
        found: found.into(),
    }
}
