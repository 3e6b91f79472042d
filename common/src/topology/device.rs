//! # Device Model
//!
//! The per-device entity graph built by a discovery pass. A device owns
//! all of its nested collections exclusively; they are rebuilt from
//! scratch on every pass, never patched incrementally.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::topology::ospf::OspfProcess;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceKind {
    Router,
    Switch,
    FirewallAsa,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown device kind '{0}'")]
pub struct UnknownDeviceKind(pub String);

impl FromStr for DeviceKind {
    type Err = UnknownDeviceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ios" | "router" => Ok(DeviceKind::Router),
            "switch" | "sw" => Ok(DeviceKind::Switch),
            "asa" | "firewall" => Ok(DeviceKind::FirewallAsa),
            _ => Err(UnknownDeviceKind(s.to_string())),
        }
    }
}

/// Whether a routing protocol was observed running on an interface.
///
/// `Unknown` means the device's configuration has not been evaluated
/// (fresh record, or the poll failed before OSPF discovery); `Disabled`
/// means it was evaluated and the interface sat in no advertised network.
/// The only transitions within a pass are Unknown -> Enabled and, once
/// the scan completes, Unknown -> Disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProtocolState {
    #[default]
    Unknown,
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    /// Parallel to `prefixes`; an interface may carry secondary addresses.
    pub addrs: Vec<String>,
    /// Prefix lengths as reported by the device, e.g. `"30"`.
    pub prefixes: Vec<String>,
    pub vrf: String,
    pub description: Option<String>,
    pub speed: Option<String>,
    pub mtu: Option<String>,
    /// True iff some static route's next hop falls inside one of this
    /// interface's subnets.
    pub has_static: bool,
    pub ospf: ProtocolState,
    pub eigrp: ProtocolState,
}

impl Interface {
    pub fn new(name: String, addrs: Vec<String>, prefixes: Vec<String>, vrf: String) -> Self {
        Self {
            name,
            addrs,
            prefixes,
            vrf,
            description: None,
            speed: None,
            mtu: None,
            has_static: false,
            ospf: ProtocolState::Unknown,
            eigrp: ProtocolState::Unknown,
        }
    }

    /// The (address, prefix) pairs, in declaration order.
    pub fn addr_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.addrs
            .iter()
            .zip(self.prefixes.iter())
            .map(|(a, p)| (a.as_str(), p.as_str()))
    }
}

/// One static entry from the route table. Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticRoute {
    pub subnet: String,
    pub prefix: String,
    pub next_hop: String,
    /// Administrative distance, kept as reported.
    pub distance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub addr: String,
    pub kind: DeviceKind,
    /// Stamped only after a full, transport-error-free poll.
    pub last_updated: Option<DateTime<Utc>>,
    pub interfaces: Vec<Interface>,
    pub statics: Vec<StaticRoute>,
    pub ospf: Vec<OspfProcess>,
}

impl Device {
    /// A fresh inventory record: identity filled in, everything else
    /// waiting for a discovery pass.
    pub fn placeholder(id: &str, addr: &str, kind: DeviceKind) -> Self {
        Self {
            id: id.to_string(),
            addr: addr.to_string(),
            kind,
            last_updated: None,
            interfaces: Vec::new(),
            statics: Vec::new(),
            ospf: Vec::new(),
        }
    }
}
