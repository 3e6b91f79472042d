use std::path::Path;

use routescout_core::snapshot;
use tracing::info;

use crate::terminal::print;

/// Reloads whatever snapshot the pointer file names and prints it.
pub fn resume() -> anyhow::Result<()> {
    let path = snapshot::last_snapshot_path(Path::new("."))?;
    info!("resuming from {}", path.display());

    let devices = snapshot::read_snapshot(&path)?;
    print::header("last discovered topology");
    print::device_trees(&devices);
    Ok(())
}
