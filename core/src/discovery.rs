//! # Discovery Service
//!
//! Orchestrates one full pass: for each inventory device, open a session
//! through the [`SessionOpener`] seam, walk the fixed command sequence,
//! ingest and correlate the results into the device record, and release
//! the session on every exit path.
//!
//! Per-device failures are contained: the record keeps whatever was
//! populated before the failure and the pass moves on.

use async_trait::async_trait;
use chrono::Utc;
use routescout_common::config::Config;
use routescout_common::topology::device::{Device, DeviceKind};
use routescout_common::topology::ospf::OspfProcess;
use tracing::{info, warn};

use crate::session::{self, DeviceSession, SessionError};
use crate::{correlate, ingest, parse};

const SHOW_IP_INTERFACE: &str = "show ip interface";
const SHOW_INTERFACES: &str = "show interfaces";
const SHOW_IP_ROUTE: &str = "show ip route";
const SHOW_OSPF_NEIGHBOR: &str = "show ip ospf neighbor";
const SHOW_OSPF_SUMMARY: &str = "show ip ospf | include Routing";

fn show_ospf_config(process_id: &str) -> String {
    format!("show running-config | section router ospf {process_id}")
}

/// Called with the device ID as each poll starts; lets the CLI move its
/// spinner along without the service knowing about terminals.
pub type DeviceProgress = Box<dyn Fn(&str) + Send + Sync>;

/// How the pass obtains a session for a device. Injected so tests can
/// substitute a scripted transport.
#[async_trait]
pub trait SessionOpener: Send + Sync {
    async fn open(
        &self,
        device: &Device,
        cfg: &Config,
    ) -> Result<Box<dyn DeviceSession>, SessionError>;
}

/// Production opener: SSH with a single Telnet fallback.
pub struct TransportOpener;

#[async_trait]
impl SessionOpener for TransportOpener {
    async fn open(
        &self,
        device: &Device,
        cfg: &Config,
    ) -> Result<Box<dyn DeviceSession>, SessionError> {
        session::connect(&device.id, &device.addr, &cfg.username, &cfg.password).await
    }
}

/// Polls every device in turn, strictly sequentially. Returns how many
/// devices completed a full poll.
pub async fn run_pass(
    devices: &mut [Device],
    cfg: &Config,
    opener: &dyn SessionOpener,
    on_device: Option<DeviceProgress>,
) -> usize {
    let mut completed = 0usize;
    for device in devices.iter_mut() {
        if let Some(progress) = on_device.as_ref() {
            progress(&device.id);
        }

        if device.kind == DeviceKind::FirewallAsa {
            info!("{}: ASA state fetch not implemented, leaving placeholder", device.id);
            continue;
        }

        let mut session = match opener.open(device, cfg).await {
            Ok(session) => session,
            Err(err) => {
                warn!("{} unreachable, skipping: {err}", device.id);
                continue;
            }
        };

        let outcome = fetch_router_state(session.as_mut(), device).await;
        session.disconnect().await;

        match outcome {
            Ok(()) => {
                completed += 1;
                info!("{} polled successfully", device.id);
            }
            Err(err) => warn!("{} poll abandoned mid-sequence: {err}", device.id),
        }
    }
    completed
}

/// The fixed per-device command sequence. Results land on the device as
/// each step completes, so a mid-sequence transport failure leaves a
/// partially populated record; `last_updated` is only stamped at the
/// very end.
pub async fn fetch_router_state(
    session: &mut dyn DeviceSession,
    device: &mut Device,
) -> Result<(), SessionError> {
    let output = session.run(SHOW_IP_INTERFACE).await?;
    device.interfaces = ingest::interfaces_from_rows(parse::interfaces::interface_rows(&output));

    let output = session.run(SHOW_INTERFACES).await?;
    ingest::join_detail(&mut device.interfaces, &parse::interfaces::detail_rows(&output));

    let output = session.run(SHOW_IP_ROUTE).await?;
    device.statics = ingest::statics_from_rows(parse::routes::route_rows(&output));
    correlate::mark_static_interfaces(&mut device.interfaces, &device.statics);

    let output = session.run(SHOW_OSPF_NEIGHBOR).await?;
    let neighbor_rows = parse::ospf::neighbor_rows(&output);

    let summary = session.run(SHOW_OSPF_SUMMARY).await?;
    device.ospf = Vec::new();
    for (process_id, router_id) in correlate::processes_from_summary(&summary) {
        let config = session.run(&show_ospf_config(&process_id)).await?;
        let lines: Vec<&str> = config.lines().collect();
        let mut process = OspfProcess::new(process_id, router_id);
        correlate::scan_process_config(
            &mut process,
            &lines,
            &mut device.interfaces,
            &neighbor_rows,
        );
        device.ospf.push(process);
    }
    correlate::close_ospf_state(&mut device.interfaces);

    device.last_updated = Some(Utc::now());
    Ok(())
}
