use crate::layout::Layout;
use anyhow::{Context, Result};
use std::io;
use tracing::debug;

/// Recursively deletes the scratch workspace directories.
///
/// A directory that does not exist counts as already clean; every other
/// I/O failure propagates.
pub async fn clean(layout: &Layout) -> Result<()> {
    for dir in layout.workspace_dirs() {
        match tokio::fs::remove_dir_all(&dir).await {
            Ok(()) => debug!(dir = %dir.display(), "removed workspace directory"),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => {
                return Err(err).with_context(|| format!("Could not remove {}", dir.display()));
            }
        }
    }
    Ok(())
}
