//! Snapshot persistence: the device list as JSON, plus a one-line
//! pointer file naming the latest snapshot so `resume` can find it
//! without guessing at timestamps.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use routescout_common::error::DiscoveryError;
use routescout_common::topology::device::Device;
use tracing::{info, warn};

pub const LAST_FILE_POINTER: &str = "last-file.cfg";

/// Writes the snapshot as `<prefix><yy-mm-dd-HHMM>.json` and records its
/// path in the pointer file next to it. A pointer-write failure is only
/// worth a warning; the snapshot itself already exists.
pub fn write_snapshot(devices: &[Device], prefix: &str) -> Result<PathBuf, DiscoveryError> {
    let stamp = Utc::now().format("%y-%m-%d-%H%M");
    let path = PathBuf::from(format!("{prefix}{stamp}.json"));
    let payload = serde_json::to_string_pretty(devices)?;
    fs::write(&path, payload).map_err(|source| DiscoveryError::Persistence { source })?;
    info!("snapshot written to {}", path.display());

    let pointer = pointer_path_for(&path);
    if let Err(err) = fs::write(&pointer, path.display().to_string()) {
        warn!("last-file pointer not written: {err}");
    }
    Ok(path)
}

pub fn read_snapshot(path: &Path) -> Result<Vec<Device>, DiscoveryError> {
    let contents =
        fs::read_to_string(path).map_err(|source| DiscoveryError::Persistence { source })?;
    Ok(serde_json::from_str(&contents)?)
}

/// Follows the pointer file in `dir` to the most recent snapshot.
pub fn last_snapshot_path(dir: &Path) -> Result<PathBuf, DiscoveryError> {
    let pointer = dir.join(LAST_FILE_POINTER);
    let contents =
        fs::read_to_string(&pointer).map_err(|source| DiscoveryError::Persistence { source })?;
    Ok(PathBuf::from(contents.trim()))
}

fn pointer_path_for(snapshot: &Path) -> PathBuf {
    match snapshot.parent() {
        Some(parent) if parent != Path::new("") => parent.join(LAST_FILE_POINTER),
        _ => PathBuf::from(LAST_FILE_POINTER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routescout_common::topology::device::DeviceKind;

    #[test]
    fn snapshot_round_trip_follows_the_pointer() {
        let dir = std::env::temp_dir().join("routescout-snapshot-test");
        fs::create_dir_all(&dir).expect("temp dir");
        let prefix = format!("{}/pass-", dir.display());

        let devices = vec![Device::placeholder("r1", "192.0.2.1", DeviceKind::Router)];
        let written = write_snapshot(&devices, &prefix).expect("snapshot writes");
        let found = last_snapshot_path(&dir).expect("pointer resolves");
        assert_eq!(found, written);

        let restored = read_snapshot(&found).expect("snapshot reads");
        assert_eq!(restored, devices);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_pointer_is_a_persistence_error() {
        let dir = std::env::temp_dir().join("routescout-no-pointer-here");
        assert!(matches!(
            last_snapshot_path(&dir),
            Err(DiscoveryError::Persistence { .. })
        ));
    }
}
