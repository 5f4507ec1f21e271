use crate::clock::{DEFAULT_BASE_EPOCH, SimulatedClock};
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::Builder;

const CONFIG_FILE: &str = "harness.json";

/// Harness configuration persisted as `harness.json` at the harness root.
///
/// Every field has a default, so a missing file is equivalent to an empty
/// one and repositories only commit the values they change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Name of the node binary under test.
    #[serde(default = "default_binary")]
    pub binary: String,
    /// Name of the version pin file at the harness root.
    #[serde(default = "default_version_file")]
    pub version_file: String,
    /// Base instant, in epoch seconds, for simulated time.
    #[serde(default = "default_base_epoch")]
    pub base_epoch: u64,
    /// Base URL of the node HTTP API, for readiness checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
}

fn default_binary() -> String {
    "grove".to_string()
}

fn default_version_file() -> String {
    "grove-version".to_string()
}

fn default_base_epoch() -> u64 {
    DEFAULT_BASE_EPOCH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            version_file: default_version_file(),
            base_epoch: default_base_epoch(),
            api_base: None,
        }
    }
}

impl Config {
    pub fn path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }

    pub fn load(root: &Path) -> Result<Self> {
        let config_path = Self::path(root);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents =
            fs::read_to_string(&config_path).context("Could not read harness configuration")?;
        let config: Config =
            serde_json::from_str(&contents).context("Could not parse harness configuration")?;

        Ok(config)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let config_path = Self::path(root);
        let contents =
            serde_json::to_string_pretty(self).context("Could not serialize configuration")?;
        fs::create_dir_all(root).context("Could not ensure the harness root exists")?;

        let mut temp_file = Builder::new()
            .prefix("harness")
            .suffix(".tmp")
            .tempfile_in(root)
            .context("Failed to create temporary configuration file")?;

        temp_file
            .write_all(contents.as_bytes())
            .context("Failed to write temporary configuration file")?;
        temp_file
            .flush()
            .context("Failed to flush temporary configuration file")?;

        temp_file
            .persist(&config_path)
            .map_err(|err| anyhow!("Failed to persist configuration file: {}", err))?;

        Ok(())
    }

    pub fn clock(&self) -> SimulatedClock {
        SimulatedClock::new(self.base_epoch)
    }
}
