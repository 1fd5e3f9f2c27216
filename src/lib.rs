//! bootvars - back-office bootstrap configuration
//!
//! Builds the configuration bundle a back-office client loads before it
//! starts: endpoint addresses, settings, plugins, application metadata,
//! external logins and feature flags. Authenticated clients get the full
//! bundle; anonymous clients get a whitelisted projection of it.

pub mod auth;
pub mod bundle;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod hash;
pub mod path_utils;
pub mod plugins;
pub mod projection;
pub mod routing;
pub mod service;

#[cfg(test)]
mod test_fixtures;

pub use bundle::{Bundle, BundleBuilder, GroupName, GroupValue, RequestContext};
pub use error::{BootvarsError, Result};
pub use service::BootstrapService;
