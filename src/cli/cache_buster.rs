use clap::Parser;

/// Arguments for the cache-buster command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Compute the token for a running 10.1.0 install:\n    bootvars cache-buster 10.1.0 Run abc123")]
pub struct CacheBusterArgs {
    /// Semantic version of the application
    pub version: String,

    /// Runtime readiness level (e.g. Run, Boot, Upgrade)
    pub level: String,

    /// Token published by the asset minifier
    pub token: String,
}
