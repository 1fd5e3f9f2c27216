//! Bootstrap service: the host-facing entry point
//!
//! Owns the host configuration and its collaborators, built once at startup
//! and shared read-only by every request.

use tracing::debug;

use crate::auth::{AuthenticationSchemeProvider, StaticSchemeProvider};
use crate::bundle::{Bundle, BundleBuilder, RequestContext};
use crate::config::HostConfig;
use crate::error::Result;
use crate::plugins::PluginRegistry;
use crate::projection::AnonymousBundleAdapter;
use crate::routing::RouteTable;

pub struct BootstrapService {
    config: HostConfig,
    routes: RouteTable,
    plugins: PluginRegistry,
    schemes: Box<dyn AuthenticationSchemeProvider>,
}

impl BootstrapService {
    /// Build the route table and plugin registry from configuration and
    /// serve the configured authentication schemes
    pub fn from_config(config: HostConfig) -> Result<Self> {
        let schemes = StaticSchemeProvider::new(config.auth_schemes.clone());
        Self::with_scheme_provider(config, Box::new(schemes))
    }

    /// Same as [`BootstrapService::from_config`] with a custom scheme provider
    pub fn with_scheme_provider(
        config: HostConfig,
        schemes: Box<dyn AuthenticationSchemeProvider>,
    ) -> Result<Self> {
        let routes = config.route_table()?;
        let plugins = config.plugin_registry()?;
        debug!(
            routes = routes.len(),
            plugins = plugins.len(),
            "bootstrap service ready"
        );

        Ok(Self {
            config,
            routes,
            plugins,
            schemes,
        })
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn builder(&self) -> BundleBuilder<'_> {
        BundleBuilder::new(
            &self.config,
            &self.routes,
            &self.plugins,
            self.schemes.as_ref(),
        )
    }

    /// Full bundle for an authenticated client
    pub async fn full_bundle(&self, request: &RequestContext) -> Result<Bundle> {
        self.builder().build(request).await
    }

    /// Reduced bundle for an anonymous client
    pub async fn anonymous_bundle(&self, request: &RequestContext) -> Result<Bundle> {
        let full = self.full_bundle(request).await?;
        AnonymousBundleAdapter::new(&self.routes).build_anonymous(&full)
    }
}
