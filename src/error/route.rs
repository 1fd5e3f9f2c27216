//! Route resolution errors

use super::BootvarsError;

/// Creates a route not registered error
pub fn not_registered(
    capability: impl Into<String>,
    operation: impl Into<String>,
    area: Option<&str>,
) -> BootvarsError {
    BootvarsError::RouteNotRegistered {
        capability: capability.into(),
        operation: operation.into(),
        area: area.map(str::to_string),
    }
}

/// Creates a duplicate route error
pub fn duplicate(
    capability: impl Into<String>,
    operation: impl Into<String>,
    area: Option<&str>,
) -> BootvarsError {
    BootvarsError::DuplicateRoute {
        capability: capability.into(),
        operation: operation.into(),
        area: area.map(str::to_string),
    }
}
