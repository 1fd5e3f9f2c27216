//! Named operation routing
//!
//! This module handles:
//! - Logical operation identifiers (via [`RouteKey`])
//! - The resolver contract consumed by the bundle builder (via [`RouteResolver`])
//! - An in-memory route table with conventional defaults (via [`RouteTable`])

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod table;

pub use table::RouteTable;

/// A logical backend operation: capability group, operation and optional area
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteKey {
    /// Capability group (e.g. "Tour", "BackOffice")
    pub capability: String,

    /// Operation within the capability (e.g. "GetTours")
    pub operation: String,

    /// Area the capability is scoped to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
}

impl RouteKey {
    /// Create a key without an area
    pub fn new(capability: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            capability: capability.into(),
            operation: operation.into(),
            area: None,
        }
    }

    /// Scope the key to an area
    pub fn in_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    /// Case-insensitive identity used by route tables
    pub(crate) fn normalized(&self) -> (String, String, Option<String>) {
        (
            self.capability.to_lowercase(),
            self.operation.to_lowercase(),
            self.area.as_ref().map(|a| a.to_lowercase()),
        )
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.area {
            Some(area) => write!(f, "{}:{}.{}", area, self.capability, self.operation),
            None => write!(f, "{}.{}", self.capability, self.operation),
        }
    }
}

/// Resolves a named operation to its externally reachable path.
///
/// Implementations must be deterministic for a fixed route table and must
/// return an error for unregistered operations instead of an empty path.
pub trait RouteResolver: Send + Sync {
    fn resolve(&self, key: &RouteKey) -> Result<String>;
}

/// Base address of an API service: the operation path with the trailing
/// operation segment removed, so clients can append their own operation names.
/// A path that does not end in a `/{operation}` segment is returned unchanged.
pub fn service_base_url(resolver: &dyn RouteResolver, key: &RouteKey) -> Result<String> {
    let path = resolver.resolve(key)?;
    Ok(strip_operation(&path, &key.operation).to_string())
}

fn strip_operation<'a>(path: &'a str, operation: &str) -> &'a str {
    let split = path.len().saturating_sub(operation.len());
    match (path.get(..split), path.get(split..)) {
        (Some(base), Some(tail)) if base.ends_with('/') && tail.eq_ignore_ascii_case(operation) => {
            base
        }
        _ => path,
    }
}
