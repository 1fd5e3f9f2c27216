//! Bundle command implementation
//!
//! Builds the full or anonymous bundle from the host configuration and
//! prints it as JSON on stdout.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::bundle::RequestContext;
use crate::cli::BundleArgs;
use crate::config::HostConfig;
use crate::error::{Result, fs};
use crate::service::BootstrapService;

/// Run bundle command
pub async fn run(config: Option<PathBuf>, args: BundleArgs) -> Result<()> {
    let json = render(config.as_deref(), &args).await?;
    writeln!(std::io::stdout().lock(), "{}", json)
        .map_err(|e| fs::io_error(format!("Failed to write bundle: {}", e)))?;
    Ok(())
}

/// Build the requested bundle and serialize it
pub async fn render(config: Option<&Path>, args: &BundleArgs) -> Result<String> {
    let host = HostConfig::load_or_default(config)?;
    let service = BootstrapService::from_config(host)?;
    let request = request_context(args);

    let bundle = if args.anonymous {
        service.anonymous_bundle(&request).await?
    } else {
        service.full_bundle(&request).await?
    };

    bundle.to_json(!args.compact)
}

fn request_context(args: &BundleArgs) -> RequestContext {
    match args.utc_offset {
        Some(offset) => RequestContext::new(args.path_base.clone(), offset),
        None => RequestContext::with_local_offset(args.path_base.clone()),
    }
}
