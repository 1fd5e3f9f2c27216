//! Plugin capability discovery
//!
//! Extensions register their client-routable capabilities at startup. The
//! discovery contract only enumerates what was registered; there is no
//! runtime scanning.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::bundle::GroupValue;
use crate::error::{Result, config};

/// A capability contributed by an extension, as seen by clients
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginCapability {
    pub alias: String,
    pub mount_path: String,
}

impl From<PluginCapability> for GroupValue {
    fn from(capability: PluginCapability) -> Self {
        GroupValue::map([
            ("alias", GroupValue::from(capability.alias)),
            ("mountPath", GroupValue::from(capability.mount_path)),
        ])
    }
}

/// A capability registration as declared by an extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginRegistration {
    pub alias: String,
    pub mount_path: String,

    /// Built-in capabilities are never advertised as plugins
    #[serde(default)]
    pub core: bool,

    /// Capabilities opted out of client extension are not advertised
    #[serde(default = "default_client_extensible")]
    pub client_extensible: bool,
}

fn default_client_extensible() -> bool {
    true
}

impl PluginRegistration {
    pub fn new(alias: impl Into<String>, mount_path: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            mount_path: mount_path.into(),
            core: false,
            client_extensible: true,
        }
    }

    pub fn as_core(mut self) -> Self {
        self.core = true;
        self
    }

    pub fn not_client_extensible(mut self) -> Self {
        self.client_extensible = false;
        self
    }

    fn is_advertised(&self) -> bool {
        !self.core && self.client_extensible
    }
}

/// Enumerates extension capabilities for the `plugins` group
pub trait PluginCapabilityDiscovery: Send + Sync {
    fn discover(&self) -> Vec<PluginCapability>;
}

/// Registry extensions register into at startup
#[derive(Debug, Clone, Default)]
pub struct PluginRegistry {
    registrations: Vec<PluginRegistration>,
    aliases: HashSet<String>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from a list of registrations
    pub fn from_registrations<I>(registrations: I) -> Result<Self>
    where
        I: IntoIterator<Item = PluginRegistration>,
    {
        let mut registry = Self::new();
        for registration in registrations {
            registry.register(registration)?;
        }
        Ok(registry)
    }

    /// Register a capability. Aliases must be unique.
    pub fn register(&mut self, registration: PluginRegistration) -> Result<()> {
        if !self.aliases.insert(registration.alias.to_lowercase()) {
            warn!(alias = %registration.alias, "rejecting duplicate plugin registration");
            return Err(config::invalid(format!(
                "plugin alias '{}' is registered more than once",
                registration.alias
            )));
        }
        self.registrations.push(registration);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

impl PluginCapabilityDiscovery for PluginRegistry {
    fn discover(&self) -> Vec<PluginCapability> {
        self.registrations
            .iter()
            .filter(|r| {
                let advertised = r.is_advertised();
                if !advertised {
                    debug!(alias = %r.alias, core = r.core, "skipping non-plugin capability");
                }
                advertised
            })
            .map(|r| PluginCapability {
                alias: r.alias.clone(),
                mount_path: r.mount_path.clone(),
            })
            .collect()
    }
}
