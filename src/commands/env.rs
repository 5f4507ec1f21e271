use crate::clock::LOCAL_TIME_ENV;
use crate::config::Config;
use crate::layout::Layout;
use crate::node;
use anyhow::{Context, Result};
use clap::Args;

#[derive(Args)]
pub struct EnvArgs {
    /// Simulated day offset from the base epoch
    #[arg(long, default_value_t = 0)]
    day: u64,
}

/// Prints KEY=VALUE lines for shell substitution, e.g.
/// `env $(grove-harness env --day 3) grove sync`.
pub fn run(args: EnvArgs) -> Result<()> {
    let layout = Layout::discover()?;
    let config = Config::load(layout.root()).context("Failed to load harness configuration")?;

    println!("{}={}", LOCAL_TIME_ENV, config.clock().at_day(args.day));

    if let Ok(short) = node::pinned_short_hash(&layout, &config) {
        println!("GROVE_BIN_DIR={}", layout.bin_dir(&short).display());
    }

    Ok(())
}
