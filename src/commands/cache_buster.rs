//! Cache buster command implementation

use crate::cli::CacheBusterArgs;
use crate::error::Result;
use crate::hash::cache_buster;

/// Run cache-buster command
pub fn run(args: CacheBusterArgs) -> Result<()> {
    println!("{}", cache_buster(&args.version, &args.level, &args.token));
    Ok(())
}
