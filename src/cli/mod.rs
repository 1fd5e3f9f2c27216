//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - bundle: Bundle command arguments
//! - cache_buster: Cache buster command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::CONFIG_ENV;

pub mod bundle;
pub mod cache_buster;
pub mod completions;

pub use bundle::BundleArgs;
pub use cache_buster::CacheBusterArgs;
pub use completions::CompletionsArgs;

/// bootvars - back-office bootstrap configuration
///
/// Build the configuration bundle a back-office client loads before it starts.
#[derive(Parser, Debug)]
#[command(
    name = "bootvars",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Back-office bootstrap configuration bundles",
    long_about = "bootvars builds the bootstrap configuration bundle (endpoint addresses, \
                  settings, plugins, application metadata) a back-office client reads at \
                  startup, in full for authenticated clients or reduced for anonymous ones.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  bootvars bundle                          \x1b[90m# Full bundle as JSON\x1b[0m\n   \
                  bootvars bundle --anonymous --compact    \x1b[90m# Anonymous bundle on one line\x1b[0m\n   \
                  bootvars -c host.yaml routes             \x1b[90m# Show resolved endpoints\x1b[0m\n   \
                  bootvars cache-buster 10.1.0 Run abc123  \x1b[90m# Compute a cache buster\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Host configuration file (defaults to built-in settings)
    #[arg(long, short = 'c', global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Log filter used when neither `-v` nor `RUST_LOG` is given
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter selected by `-v`
pub const VERBOSE_LOG_FILTER: &str = "bootvars=debug";

impl Cli {
    /// Tracing filter directive: `-v` first, then `RUST_LOG`, then warnings only
    pub fn log_filter(&self, rust_log: Option<&str>) -> String {
        if self.verbose {
            return VERBOSE_LOG_FILTER.to_string();
        }
        match rust_log {
            Some(directives) if !directives.trim().is_empty() => directives.to_string(),
            _ => DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a bootstrap configuration bundle
    Bundle(BundleArgs),

    /// Compute the asset cache buster
    #[command(name = "cache-buster")]
    CacheBuster(CacheBusterArgs),

    /// List client-visible endpoints and their resolved paths
    Routes,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_bundle_defaults() {
        let cli = Cli::try_parse_from(["bootvars", "bundle"]).unwrap();
        match cli.command {
            Commands::Bundle(args) => {
                assert!(!args.anonymous);
                assert!(!args.compact);
                assert_eq!(args.path_base, "/");
                assert_eq!(args.utc_offset, None);
            }
            _ => panic!("Expected Bundle command"),
        }
    }

    #[test]
    fn test_cli_parsing_bundle_flags() {
        let cli = Cli::try_parse_from([
            "bootvars",
            "bundle",
            "--anonymous",
            "--path-base",
            "/cms",
            "--utc-offset",
            "-300",
            "--compact",
        ])
        .unwrap();
        match cli.command {
            Commands::Bundle(args) => {
                assert!(args.anonymous);
                assert!(args.compact);
                assert_eq!(args.path_base, "/cms");
                assert_eq!(args.utc_offset, Some(-300));
            }
            _ => panic!("Expected Bundle command"),
        }
    }

    #[test]
    fn test_cli_parsing_cache_buster() {
        let cli = Cli::try_parse_from(["bootvars", "cache-buster", "10.1.0", "Run", "abc123"])
            .unwrap();
        match cli.command {
            Commands::CacheBuster(args) => {
                assert_eq!(args.version, "10.1.0");
                assert_eq!(args.level, "Run");
                assert_eq!(args.token, "abc123");
            }
            _ => panic!("Expected CacheBuster command"),
        }
    }

    #[test]
    fn test_cli_parsing_cache_buster_requires_all_inputs() {
        assert!(Cli::try_parse_from(["bootvars", "cache-buster", "10.1.0", "Run"]).is_err());
    }

    #[test]
    fn test_cli_parsing_routes() {
        let cli = Cli::try_parse_from(["bootvars", "routes"]).unwrap();
        assert!(matches!(cli.command, Commands::Routes));
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["bootvars", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli =
            Cli::try_parse_from(["bootvars", "-v", "-c", "/etc/bootvars.yaml", "routes"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/bootvars.yaml")));
    }

    #[test]
    fn test_log_filter_verbose_overrides_rust_log() {
        let cli = Cli::try_parse_from(["bootvars", "-v", "routes"]).unwrap();
        assert_eq!(cli.log_filter(Some("error")), VERBOSE_LOG_FILTER);
        assert_eq!(cli.log_filter(None), VERBOSE_LOG_FILTER);
    }

    #[test]
    fn test_log_filter_falls_back_to_rust_log() {
        let cli = Cli::try_parse_from(["bootvars", "routes"]).unwrap();
        assert_eq!(cli.log_filter(Some("bootvars=trace")), "bootvars=trace");
        assert_eq!(cli.log_filter(Some("  ")), DEFAULT_LOG_FILTER);
        assert_eq!(cli.log_filter(None), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_cli_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["bootvars", "bundle", "--config", "host.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("host.yaml")));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["bootvars", "completions", "zsh"]).unwrap();
        match cli.command {
            Commands::Completions(args) => assert_eq!(args.shell, "zsh"),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["bootvars"]).is_err());
    }
}
