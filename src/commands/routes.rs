//! Routes command implementation
//!
//! Lists every `urls` key with the path it resolves to, followed by the
//! anonymous bootstrap endpoint.

use std::path::PathBuf;

use console::Style;

use crate::bundle::UrlKey;
use crate::bundle::urls::anonymous_bootstrap_route;
use crate::config::HostConfig;
use crate::error::Result;
use crate::routing::RouteResolver;
use crate::service::BootstrapService;

/// Run routes command
pub fn run(config: Option<PathBuf>) -> Result<()> {
    let host = HostConfig::load_or_default(config.as_deref())?;
    let service = BootstrapService::from_config(host)?;

    for (name, path) in resolve_all(&service)? {
        println!("  {:<30} {}", Style::new().cyan().apply_to(name), path);
    }
    Ok(())
}

/// Every catalogue key and the anonymous endpoint with their resolved paths
pub fn resolve_all(service: &BootstrapService) -> Result<Vec<(String, String)>> {
    let builder = service.builder();
    let mut resolved = Vec::with_capacity(UrlKey::ALL.len() + 1);

    for key in UrlKey::ALL {
        resolved.push((key.to_string(), builder.resolve_url(key)?));
    }

    let anonymous = anonymous_bootstrap_route();
    resolved.push((
        format!("anonymous {}", UrlKey::BootstrapEndpoint),
        service.routes().resolve(&anonymous)?,
    ));

    Ok(resolved)
}
