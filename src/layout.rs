use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the harness root directory. Must be non-empty when set.
pub const ROOT_ENV: &str = "GROVE_HARNESS_ROOT";

/// Resolves every path the harness touches from a single root directory.
///
/// The root holds the version pin file and `harness.json`; everything
/// transient lives under `tmp/`, with pinned binaries in `tmp/bin/<short>`
/// and the scratch workspace in `tmp/peers` and `tmp/repos`.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves the harness root: `GROVE_HARNESS_ROOT` when set (created if
    /// missing), otherwise the current working directory.
    pub fn discover() -> Result<Self> {
        if let Ok(custom) = env::var(ROOT_ENV) {
            let custom_path = Path::new(&custom);
            if custom_path.as_os_str().is_empty() {
                anyhow::bail!("GROVE_HARNESS_ROOT cannot be empty");
            }
            fs::create_dir_all(custom_path).context("Could not create GROVE_HARNESS_ROOT")?;
            return Ok(Self::at(custom_path));
        }

        let cwd = env::current_dir().context("Could not determine current directory")?;
        Ok(Self::at(cwd))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tmp_dir(&self) -> PathBuf {
        self.root.join("tmp")
    }

    pub fn fixtures_dir(&self) -> PathBuf {
        self.root.join("fixtures")
    }

    /// Directory holding the node binaries for one pinned build.
    pub fn bin_dir(&self, short_hash: &str) -> PathBuf {
        self.tmp_dir().join("bin").join(short_hash)
    }

    pub fn peers_dir(&self) -> PathBuf {
        self.tmp_dir().join("peers")
    }

    pub fn repos_dir(&self) -> PathBuf {
        self.tmp_dir().join("repos")
    }

    /// The scratch directories deleted between test runs.
    pub fn workspace_dirs(&self) -> [PathBuf; 2] {
        [self.peers_dir(), self.repos_dir()]
    }

    pub fn version_file(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}
