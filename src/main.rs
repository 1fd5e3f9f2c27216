//! bootvars - back-office bootstrap configuration
//!
//! Command line front end: builds bundles, lists resolved endpoints and
//! computes cache busters from a host configuration file.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bootvars::cli::{Cli, Commands};
use bootvars::commands;

fn init_tracing(cli: &Cli) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::new(cli.log_filter(rust_log.as_deref()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let result = match cli.command {
        Commands::Bundle(args) => commands::bundle::run(cli.config, args).await,
        Commands::CacheBuster(args) => commands::cache_buster::run(args),
        Commands::Routes => commands::routes::run(cli.config),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
