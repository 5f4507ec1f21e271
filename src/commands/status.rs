use crate::config::Config;
use crate::layout::Layout;
use crate::node;
use crate::ui;
use anyhow::{Context, Result};
use std::path::Path;

pub fn run() -> Result<()> {
    let layout = Layout::discover()?;
    let config = Config::load(layout.root()).context("Failed to load harness configuration")?;

    let pinned = node::pinned_short_hash(&layout, &config);
    let (pinned_display, bin_dir_display) = match &pinned {
        Ok(short) => (short.clone(), layout.bin_dir(short).display().to_string()),
        Err(_) => (
            format!("<no {} file>", config.version_file),
            "<unknown>".to_string(),
        ),
    };

    let rows = vec![
        ("Root".to_string(), layout.root().display().to_string()),
        ("Binary".to_string(), config.binary.clone()),
        ("Base Epoch".to_string(), config.base_epoch.to_string()),
        (
            "API Base".to_string(),
            config.api_base.clone().unwrap_or_else(|| "<not set>".to_string()),
        ),
        ("Pinned Build".to_string(), pinned_display),
        ("Binary Dir".to_string(), bin_dir_display),
        ("Peers Dir".to_string(), describe_dir(&layout.peers_dir())),
        ("Repos Dir".to_string(), describe_dir(&layout.repos_dir())),
        (
            "Fixtures Dir".to_string(),
            describe_dir(&layout.fixtures_dir()),
        ),
    ];

    ui::print_report("Harness Status", rows);
    Ok(())
}

fn describe_dir(path: &Path) -> String {
    let state = if path.is_dir() { "present" } else { "absent" };
    format!("{} ({state})", path.display())
}
