//! Error types and handling for bootvars
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`route`]: Route resolution errors
//! - [`config`]: Configuration errors
//! - [`scheme`]: Authentication scheme provider errors
//! - [`projection`]: Bundle projection errors
//! - [`fs`]: File system and output errors

pub mod config;
pub mod fs;
pub mod projection;
pub mod route;
pub mod scheme;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bootvars operations
#[derive(Error, Diagnostic, Debug)]
pub enum BootvarsError {
    // Route errors
    #[error("No route registered for {capability}.{operation}{}", area_suffix(.area))]
    #[diagnostic(
        code(bootvars::route::not_registered),
        help("Register the operation in the `routes` section or enable `conventionalRoutes`")
    )]
    RouteNotRegistered {
        capability: String,
        operation: String,
        area: Option<String>,
    },

    #[error("Route registered twice for {capability}.{operation}{}", area_suffix(.area))]
    #[diagnostic(code(bootvars::route::duplicate))]
    DuplicateRoute {
        capability: String,
        operation: String,
        area: Option<String>,
    },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(bootvars::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(bootvars::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(bootvars::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(bootvars::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Required setting is missing: {name}")]
    #[diagnostic(
        code(bootvars::config::missing_setting),
        help("Set the value in the host configuration file")
    )]
    MissingSetting { name: String },

    // Collaborator errors
    #[error("Failed to enumerate authentication schemes: {reason}")]
    #[diagnostic(code(bootvars::scheme::enumeration_failed))]
    SchemeEnumerationFailed { reason: String },

    // Projection errors
    #[error("Cannot filter keys of group '{group}': expected a mapping, found {found}")]
    #[diagnostic(
        code(bootvars::projection::shape_mismatch),
        help("Use an empty allowance list to keep a non-mapping group as a whole")
    )]
    ProjectionShapeMismatch { group: String, found: String },

    // Output errors
    #[error("Failed to serialize bundle: {reason}")]
    #[diagnostic(code(bootvars::output::serialization_failed))]
    SerializationFailed { reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(bootvars::fs::io_error))]
    IoError { message: String },
}

fn area_suffix(area: &Option<String>) -> String {
    area.as_ref()
        .map(|a| format!(" (area '{}')", a))
        .unwrap_or_default()
}

impl From<std::io::Error> for BootvarsError {
    fn from(err: std::io::Error) -> Self {
        BootvarsError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for BootvarsError {
    fn from(err: serde_yaml::Error) -> Self {
        BootvarsError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for BootvarsError {
    fn from(err: serde_json::Error) -> Self {
        BootvarsError::SerializationFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BootvarsError>;
