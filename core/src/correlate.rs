//! # Topology Correlator
//!
//! Cross-references the independently fetched record sets of one device
//! into a single consistent picture: static routes against interface
//! subnets, OSPF network statements against interface addresses, and the
//! flat neighbor table against the interfaces those statements resolve
//! to.
//!
//! All subnet comparisons degrade to "no match" on anomalous input; a
//! device handing back a mangled address must never abort its own poll.

use routescout_common::net::subnet;
use routescout_common::topology::device::{Interface, ProtocolState, StaticRoute};
use routescout_common::topology::ospf::{
    OspfArea, OspfInterface, OspfNeighbor, OspfProcess, Redistribution,
};
use tracing::warn;

use crate::rows::NeighborRow;

/// Flags every interface carrying a subnet that some static route's next
/// hop falls into. Comparison granularity is the interface's own prefix;
/// the first hit per interface wins and ends the search for it.
pub fn mark_static_interfaces(interfaces: &mut [Interface], statics: &[StaticRoute]) {
    for intf in interfaces.iter_mut() {
        intf.has_static = statics.iter().any(|route| {
            intf.addr_pairs().any(|(addr, prefix)| {
                match subnet::same_subnet(&route.next_hop, addr, prefix) {
                    Ok(hit) => hit,
                    Err(anomaly) => {
                        warn!("static matching on {}: {anomaly}", intf.name);
                        false
                    }
                }
            })
        });
    }
}

/// Locates OSPF processes in the one-line `Routing Process "ospf <id>"
/// with ID <router-id>` summary. The summary concatenates one such
/// clause per process; after quote removal the process ID and router ID
/// sit at whitespace-token offsets 3 and 6, seven tokens per clause.
pub fn processes_from_summary(summary: &str) -> Vec<(String, String)> {
    let cleaned = summary.replace('"', "");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    let mut found = Vec::new();
    let mut rest: &[&str] = &tokens;
    while rest.len() >= 7 {
        found.push((rest[3].to_string(), rest[6].to_string()));
        rest = &rest[7..];
    }
    found
}

/// What a running-config line means to the scanner. Classification is
/// by substring presence, matching the breadth of the device's own
/// grammar (`network` statements are always followed by an address,
/// hence the trailing space).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigLine {
    Redistribute,
    Network,
    Other,
}

fn classify(line: &str) -> ConfigLine {
    if line.contains("redistribute") {
        ConfigLine::Redistribute
    } else if line.contains("network ") {
        ConfigLine::Network
    } else {
        ConfigLine::Other
    }
}

/// Scans one process's running configuration top to bottom, one line per
/// step over the immutable line sequence, filling in redistribution
/// entries and area/interface bindings as they appear.
pub fn scan_process_config(
    process: &mut OspfProcess,
    lines: &[&str],
    interfaces: &mut [Interface],
    neighbors: &[NeighborRow],
) {
    for raw in lines {
        let line = raw.trim();
        match classify(line) {
            ConfigLine::Redistribute => process.redist.push(parse_redistribute(line)),
            ConfigLine::Network => apply_network_line(process, line, interfaces, neighbors),
            ConfigLine::Other => {}
        }
    }
}

/// `redistribute <protocol> [...] [route-map <name>]`. The protocol is
/// one word, or two when the first is not `static` (`eigrp 100`,
/// `connected subnets`); absent route-maps get the `N/A` sentinel.
fn parse_redistribute(line: &str) -> Redistribution {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let mut protocol = tokens.get(1).copied().unwrap_or_default().to_string();
    if tokens.get(1).copied() != Some("static") {
        if let Some(extra) = tokens.get(2) {
            protocol.push(' ');
            protocol.push_str(extra);
        }
    }
    let route_map = tokens
        .iter()
        .position(|t| *t == "route-map")
        .and_then(|at| tokens.get(at + 1))
        .map(|name| name.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    Redistribution {
        config: line.to_string(),
        protocol,
        route_map,
    }
}

/// `network <addr> <wildcard> area <number>`: resolves the area (created
/// once per process, reused afterwards), then binds the first interface
/// in declaration order that is not yet OSPF-enabled and has an address
/// inside the advertised network at the advertised prefix. At most one
/// interface binds per statement; zero matches bind nothing.
fn apply_network_line(
    process: &mut OspfProcess,
    line: &str,
    interfaces: &mut [Interface],
    neighbors: &[NeighborRow],
) {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(net_at) = tokens.iter().position(|t| *t == "network") else {
        return;
    };
    let Some(area_at) = tokens.iter().position(|t| *t == "area") else {
        return;
    };
    let (Some(network), Some(wildcard), Some(area_number)) = (
        tokens.get(net_at + 1),
        tokens.get(net_at + 2),
        tokens.get(area_at + 1),
    ) else {
        return;
    };

    let prefix = match subnet::wildcard_to_mask(wildcard)
        .and_then(|mask| subnet::mask_to_prefix(&mask))
    {
        Ok(prefix) => prefix,
        Err(anomaly) => {
            warn!("network statement '{line}' skipped: {anomaly}");
            return;
        }
    };

    let area_idx = match process.areas.iter().position(|a| a.number == *area_number) {
        Some(idx) => idx,
        None => {
            process.areas.push(OspfArea::new(area_number.to_string()));
            process.areas.len() - 1
        }
    };

    if let Some(bound) = bind_first_match(interfaces, network, prefix, neighbors) {
        process.areas[area_idx].interfaces.push(bound);
    }
}

/// First-unmarked-match-wins interface binding. The tie-break is plain
/// declaration order, faithfully kept rather than improved into some
/// longest-prefix notion.
fn bind_first_match(
    interfaces: &mut [Interface],
    network: &str,
    prefix: u8,
    neighbors: &[NeighborRow],
) -> Option<OspfInterface> {
    for intf in interfaces.iter_mut() {
        if intf.ospf == ProtocolState::Enabled {
            continue;
        }
        for addr in &intf.addrs {
            match subnet::same_subnet_at(addr, network, prefix) {
                Ok(true) => {
                    intf.ospf = ProtocolState::Enabled;
                    return Some(OspfInterface {
                        name: intf.name.clone(),
                        neighbors: neighbors_for(&intf.name, neighbors),
                        status: String::new(),
                    });
                }
                Ok(false) => {}
                Err(anomaly) => warn!("ospf matching on {}: {anomaly}", intf.name),
            }
        }
    }
    None
}

fn neighbors_for(interface: &str, neighbors: &[NeighborRow]) -> Vec<OspfNeighbor> {
    neighbors
        .iter()
        .filter(|row| row.interface == interface)
        .map(|row| OspfNeighbor {
            router_id: row.neighbor_id.clone(),
            next_hop: row.address.clone(),
            state: row.state.clone(),
            device_name: String::new(),
        })
        .collect()
}

/// Once every process's configuration has been scanned, interfaces still
/// unevaluated were in no advertised network.
pub fn close_ospf_state(interfaces: &mut [Interface]) {
    for intf in interfaces.iter_mut() {
        if intf.ospf == ProtocolState::Unknown {
            intf.ospf = ProtocolState::Disabled;
        }
    }
}
