//! Inventory loading: one `id,ip,type` line per device, `#` comments
//! ignored. Lines that do not parse are skipped with a warning rather
//! than sinking the whole file.

use std::fs;
use std::path::Path;

use routescout_common::error::DiscoveryError;
use routescout_common::topology::device::{Device, DeviceKind};
use tracing::{info, warn};

pub fn load_inventory(path: &Path) -> Result<Vec<Device>, DiscoveryError> {
    let contents =
        fs::read_to_string(path).map_err(|source| DiscoveryError::InventoryNotFound {
            path: path.to_path_buf(),
            source,
        })?;

    let mut devices: Vec<Device> = Vec::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let &[id, addr, kind] = fields.as_slice() else {
            warn!("inventory line '{line}' does not have three fields, skipping");
            continue;
        };
        match kind.parse::<DeviceKind>() {
            Ok(kind) => devices.push(Device::placeholder(id, addr, kind)),
            Err(err) => warn!("device {id} skipped: {err}"),
        }
    }

    info!("loaded {} devices from {}", devices.len(), path.display());
    Ok(devices)
}
