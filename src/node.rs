use crate::clock::{LOCAL_TIME_ENV, SimulatedClock};
use crate::config::Config;
use crate::layout::Layout;
use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

/// Length of the short form of a pinned commit hash.
pub const SHORT_HASH_LEN: usize = 7;

/// Reads the version pin file and returns the short form of the commit hash.
pub fn pinned_short_hash(layout: &Layout, config: &Config) -> Result<String> {
    let path = layout.version_file(&config.version_file);
    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Could not read version pin {}", path.display()))?;
    let short: String = contents.trim().chars().take(SHORT_HASH_LEN).collect();
    if short.chars().count() < SHORT_HASH_LEN {
        anyhow::bail!(
            "version pin {} is too short to contain a commit hash",
            path.display()
        );
    }
    Ok(short)
}

/// Prepends the pinned binary directory to `PATH` so the node binary
/// resolves to the build under test.
///
/// Mutates the process environment; call before spawning threads.
pub fn prepend_bin_path(bin_dir: &Path) -> Result<()> {
    let mut paths = vec![bin_dir.to_path_buf()];
    if let Some(existing) = env::var_os("PATH") {
        paths.extend(env::split_paths(&existing));
    }
    let joined = env::join_paths(paths)
        .context("Could not compose PATH with the pinned binary directory")?;
    unsafe {
        env::set_var("PATH", &joined);
    }
    debug!(dir = %bin_dir.display(), "prepended pinned binary directory to PATH");
    Ok(())
}

/// Asserts that the node CLI on `PATH` is the pinned build.
///
/// Fails when `which` resolves the binary outside the pinned directory, or
/// when `--version` output does not mention the pinned short hash.
pub async fn assert_installed(config: &Config, bin_dir: &Path, short_hash: &str) -> Result<()> {
    let which = capture("which", &[config.binary.as_str()]).await?;
    let resolved = PathBuf::from(which.trim());
    if resolved.parent() != Some(bin_dir) {
        anyhow::bail!(
            "{} path doesn't match the pinned binary: {} != {}",
            config.binary,
            bin_dir.display(),
            resolved.display()
        );
    }

    let version = capture(&config.binary, &["--version"]).await?;
    if !version.contains(short_hash) {
        anyhow::bail!(
            "{} version {} does not satisfy {}",
            config.binary,
            version.trim(),
            short_hash
        );
    }

    debug!(binary = %config.binary, short_hash, "pinned binary verified");
    Ok(())
}

async fn capture(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .with_context(|| format!("Failed to run {program}"))?;
    if !output.status.success() {
        anyhow::bail!("{program} exited with {}", output.status);
    }
    String::from_utf8(output.stdout).with_context(|| format!("{program} produced non-UTF-8 output"))
}

/// Invocation options for running the node CLI inside a project folder at a
/// simulated day.
#[derive(Debug, Clone)]
pub struct CommandOptions {
    project_dir: PathBuf,
    clock: SimulatedClock,
    day: u64,
}

impl CommandOptions {
    pub fn new(project_dir: impl Into<PathBuf>, clock: SimulatedClock) -> Self {
        Self {
            project_dir: project_dir.into(),
            clock,
            day: 0,
        }
    }

    /// Day offset from the clock's base instant.
    pub fn at_day(mut self, day: u64) -> Self {
        self.day = day;
        self
    }

    /// Epoch seconds the spawned process will observe.
    pub fn local_time(&self) -> u64 {
        self.clock.at_day(self.day)
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Builds a process command with the project folder as working directory
    /// and the simulated-time variable set on the child only.
    pub fn command(&self, program: &str) -> Command {
        let mut cmd = Command::new(program);
        cmd.current_dir(&self.project_dir)
            .env(LOCAL_TIME_ENV, self.local_time().to_string());
        cmd
    }
}
