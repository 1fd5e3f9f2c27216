use clap::Parser;

/// Arguments for the bundle command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Build the full bundle:\n    bootvars bundle\n\n\
                  Build the anonymous bundle:\n    bootvars bundle --anonymous\n\n\
                  Build for a request under a virtual directory:\n    bootvars bundle --path-base /cms\n\n\
                  Pin the server time offset:\n    bootvars bundle --utc-offset -300 --compact")]
pub struct BundleArgs {
    /// Build the reduced bundle served before login
    #[arg(long)]
    pub anonymous: bool,

    /// Path base the request arrived under
    #[arg(long, default_value = "/")]
    pub path_base: String,

    /// Server offset from UTC in minutes (defaults to the local clock)
    #[arg(long, allow_negative_numbers = true)]
    pub utc_offset: Option<i32>,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}
