//! Host configuration for bootvars
//!
//! The host configuration is a YAML file holding every value the bundle
//! builder reads: versions, runtime state, paths, content and security
//! policy, feature flags, route overrides, authentication schemes and plugin
//! registrations. It is loaded once and shared read-only.

pub mod settings;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::auth::AuthenticationScheme;
use crate::bundle::urls;
use crate::error::{self, Result};
use crate::path_utils::{is_resolvable, to_client_path};
use crate::plugins::{PluginRegistration, PluginRegistry};
use crate::routing::{RouteKey, RouteTable};

pub use settings::{
    ContentSettings, FeatureFlags, GlobalSettings, HostingSettings, PackageSettings,
    RuntimeLevel, RuntimeSettings, SecuritySettings, SmtpSettings, VersionSettings,
};

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "BOOTVARS_CONFIG";

/// An explicit route registration, overriding the conventional path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOverride {
    pub capability: String,
    pub operation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    pub path: String,
}

impl RouteOverride {
    pub fn key(&self) -> RouteKey {
        RouteKey {
            capability: self.capability.clone(),
            operation: self.operation.clone(),
            area: self.area.clone(),
        }
    }
}

/// Host configuration (bootvars.yaml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostConfig {
    pub version: VersionSettings,
    pub runtime: RuntimeSettings,
    pub hosting: HostingSettings,
    pub global: GlobalSettings,
    pub content: ContentSettings,
    pub security: SecuritySettings,
    pub features: FeatureFlags,
    pub packages: PackageSettings,

    /// Register every catalogue operation at its conventional path
    pub conventional_routes: bool,

    /// Explicit routes, applied after conventional ones. Each operation may
    /// appear only once.
    pub routes: Vec<RouteOverride>,

    pub auth_schemes: Vec<AuthenticationScheme>,

    pub plugins: Vec<PluginRegistration>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            version: VersionSettings::default(),
            runtime: RuntimeSettings::default(),
            hosting: HostingSettings::default(),
            global: GlobalSettings::default(),
            content: ContentSettings::default(),
            security: SecuritySettings::default(),
            features: FeatureFlags::default(),
            packages: PackageSettings::default(),
            conventional_routes: true,
            routes: Vec::new(),
            auth_schemes: Vec::new(),
            plugins: Vec::new(),
        }
    }
}

impl HostConfig {
    /// Parse and validate configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(error::config::not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| error::config::read_failed(path.display().to_string(), e.to_string()))?;

        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| error::config::parse_failed(path.display().to_string(), e.to_string()))?;
        config.validate()?;

        debug!(path = %path.display(), "loaded host configuration");
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("no host configuration given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reject absent or malformed required values
    pub fn validate(&self) -> Result<()> {
        require("version.semantic", &self.version.semantic)?;
        require("version.assembly", &self.version.assembly)?;
        require("global.backOfficePath", &self.global.back_office_path)?;
        require(
            "hosting.applicationVirtualPath",
            &self.hosting.application_virtual_path,
        )?;

        if !self.hosting.application_virtual_path.starts_with('/') {
            return Err(error::config::invalid(
                "hosting.applicationVirtualPath must start with '/'",
            ));
        }

        for (name, path) in [
            ("global.backOfficePath", &self.global.back_office_path),
            ("global.mediaPath", &self.global.media_path),
            ("global.cssPath", &self.global.css_path),
            ("global.appPluginsPath", &self.global.app_plugins_path),
        ] {
            if !is_resolvable(path) {
                return Err(error::config::invalid(format!(
                    "{} '{}' must start with '~/' or '/'",
                    name, path
                )));
            }
        }

        let mut explicit = HashSet::new();
        for route in &self.routes {
            let key = route.key();
            if !explicit.insert(key.normalized()) {
                return Err(error::route::duplicate(
                    &key.capability,
                    &key.operation,
                    key.area.as_deref(),
                ));
            }
            if !route.path.starts_with('/') {
                return Err(error::config::invalid(format!(
                    "route {} has a path that is not rooted: '{}'",
                    route.key(),
                    route.path
                )));
            }
        }

        for scheme in &self.auth_schemes {
            require("authSchemes[].name", &scheme.name)?;
        }

        Ok(())
    }

    /// Client-facing back-office root
    pub fn back_office_path(&self) -> Result<String> {
        to_client_path(
            &self.global.back_office_path,
            &self.hosting.application_virtual_path,
        )
    }

    /// Build the route table: conventional routes (when enabled) plus explicit overrides
    pub fn route_table(&self) -> Result<RouteTable> {
        let mut table = if self.conventional_routes {
            RouteTable::conventional(&self.back_office_path()?, urls::required_routes())?
        } else {
            RouteTable::new()
        };

        for route in &self.routes {
            table.override_route(route.key(), route.path.clone());
        }

        if table.is_empty() {
            warn!("route table is empty, bundle builds will fail to resolve endpoints");
        }
        debug!(routes = table.len(), "route table ready");
        Ok(table)
    }

    /// Build the plugin registry from the declared registrations
    pub fn plugin_registry(&self) -> Result<PluginRegistry> {
        let registry = PluginRegistry::from_registrations(self.plugins.iter().cloned())?;
        if registry.is_empty() {
            debug!("no plugin capabilities registered");
        }
        Ok(registry)
    }
}

fn require(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(error::config::missing_setting(name));
    }
    Ok(())
}
