use crate::config::Config;
use crate::interaction;
use crate::layout::Layout;
use anyhow::{Context, Result};
use clap::Args;

#[derive(Args)]
pub struct InitArgs {
    /// Name of the node binary under test
    #[arg(long)]
    binary: Option<String>,

    /// Name of the version pin file at the harness root
    #[arg(long)]
    version_file: Option<String>,

    /// Base instant for simulated time, in epoch seconds
    #[arg(long)]
    base_epoch: Option<u64>,

    /// Base URL of the node HTTP API
    #[arg(long)]
    api_base: Option<String>,

    /// Overwrite an existing harness.json without asking
    #[arg(long)]
    yes: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    let layout = Layout::discover()?;
    let config_path = Config::path(layout.root());

    if config_path.exists() && !args.yes {
        let overwrite = interaction::confirm(
            &format!("{} already exists. Overwrite it?", config_path.display()),
            false,
        )?;
        if !overwrite {
            println!("Leaving the existing configuration untouched.");
            return Ok(());
        }
    }

    let mut config = Config::default();
    if let Some(binary) = args.binary {
        config.binary = binary;
    }
    if let Some(version_file) = args.version_file {
        config.version_file = version_file;
    }
    if let Some(base_epoch) = args.base_epoch {
        config.base_epoch = base_epoch;
    }
    if let Some(api_base) = args.api_base {
        config.api_base = Some(api_base);
    }

    config
        .save(layout.root())
        .context("Failed to save harness configuration")?;

    println!("Wrote {}", config_path.display());
    Ok(())
}
