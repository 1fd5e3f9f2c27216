//! In-memory route table
//!
//! The table is built once at startup and shared read-only across requests.

use std::collections::HashMap;

use tracing::debug;

use super::{RouteKey, RouteResolver};
use crate::error::{Result, route};
use crate::path_utils::trim_trailing_slash;

type NormalizedKey = (String, String, Option<String>);

/// Registry of named operations and their paths
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<(RouteKey, String)>,
    by_key: HashMap<NormalizedKey, usize>,
}

impl RouteTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with every key registered at its conventional path
    /// under `prefix` (see [`conventional_path`]).
    pub fn conventional<I>(prefix: &str, keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = RouteKey>,
    {
        let mut table = Self::new();
        for key in keys {
            let path = conventional_path(prefix, &key);
            table.register(key, path)?;
        }
        Ok(table)
    }

    /// Register a path for a key. Registering the same key twice is an error.
    pub fn register(&mut self, key: RouteKey, path: impl Into<String>) -> Result<()> {
        let normalized = key.normalized();
        if self.by_key.contains_key(&normalized) {
            return Err(route::duplicate(
                &key.capability,
                &key.operation,
                key.area.as_deref(),
            ));
        }

        self.by_key.insert(normalized, self.entries.len());
        self.entries.push((key, path.into()));
        Ok(())
    }

    /// Register a path for a key, replacing any existing registration
    pub fn override_route(&mut self, key: RouteKey, path: impl Into<String>) {
        let path = path.into();
        match self.by_key.get(&key.normalized()) {
            Some(&idx) => {
                debug!(route = %key, %path, "overriding route");
                self.entries[idx] = (key, path);
            }
            None => {
                self.by_key.insert(key.normalized(), self.entries.len());
                self.entries.push((key, path));
            }
        }
    }

    /// Look up a key without failing
    pub fn get(&self, key: &RouteKey) -> Option<&str> {
        self.by_key
            .get(&key.normalized())
            .and_then(|&idx| self.entries.get(idx))
            .map(|(_, path)| path.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RouteResolver for RouteTable {
    fn resolve(&self, key: &RouteKey) -> Result<String> {
        self.get(key).map(str::to_string).ok_or_else(|| {
            route::not_registered(&key.capability, &key.operation, key.area.as_deref())
        })
    }
}

/// Conventional path for a key: `{prefix}/[{area}/]{capability}/{operation}`, lower-cased.
///
/// # Examples
///
/// ```
/// use bootvars::routing::{RouteKey, table::conventional_path};
///
/// let key = RouteKey::new("Tour", "GetTours").in_area("Api");
/// assert_eq!(conventional_path("/umbraco", &key), "/umbraco/api/tour/gettours");
/// ```
pub fn conventional_path(prefix: &str, key: &RouteKey) -> String {
    let mut path = trim_trailing_slash(prefix).to_string();
    if let Some(area) = &key.area {
        path.push('/');
        path.push_str(area);
    }
    path.push('/');
    path.push_str(&key.capability);
    path.push('/');
    path.push_str(&key.operation);
    path.to_lowercase()
}
