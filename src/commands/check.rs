use crate::config::Config;
use crate::health::ApiProbe;
use crate::layout::Layout;
use crate::loader;
use crate::node;
use anyhow::{Context, Result};
use clap::Args;

#[derive(Args)]
pub struct CheckArgs {
    /// Wait for the node API at this URL before checking the binary
    #[arg(long)]
    api: Option<String>,

    /// Maximum attempts while waiting for the API
    #[arg(long, default_value_t = 30)]
    attempts: u32,
}

pub async fn run(args: CheckArgs) -> Result<()> {
    let layout = Layout::discover()?;
    let config = Config::load(layout.root()).context("Failed to load harness configuration")?;

    if let Some(url) = args.api.or_else(|| config.api_base.clone()) {
        let mut spinner = loader::spawn(format!("Waiting for the node API at {url}"));
        let result = ApiProbe::new()
            .with_max_attempts(args.attempts)
            .wait_until_ready(&url)
            .await;
        spinner.stop().await;
        result?;
        println!("Node API at {url} is ready.");
    }

    let short = node::pinned_short_hash(&layout, &config)?;
    let bin_dir = layout.bin_dir(&short);
    node::prepend_bin_path(&bin_dir)?;
    node::assert_installed(&config, &bin_dir, &short).await?;

    println!("{} is installed and pinned to {short}.", config.binary);
    Ok(())
}
