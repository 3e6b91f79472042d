//! # Row Ingestion
//!
//! Projects parsed command rows into topology entities. This is the only
//! place where rows and entities meet; the correlator afterwards works on
//! entities alone.

use routescout_common::topology::device::{Interface, StaticRoute};

use crate::rows::{DetailRow, InterfaceRow, RouteRow};

/// Route-table protocol code marking a static entry.
const STATIC_MARKER: &str = "S";

/// Builds the interface list, dropping rows with no address at all
/// (unassigned sub-interfaces and the like carry nothing worth
/// correlating).
pub fn interfaces_from_rows(rows: Vec<InterfaceRow>) -> Vec<Interface> {
    rows.into_iter()
        .filter(|row| !row.ipaddr.is_empty())
        .map(|row| Interface::new(row.intf, row.ipaddr, row.mask, row.vrf))
        .collect()
}

/// Joins `show interfaces` detail onto the interface list by exact name.
/// Detail rows naming an unknown interface are ignored; interfaces with
/// no detail row keep their `None` fields. Empty columns stay `None`
/// rather than becoming empty strings.
pub fn join_detail(interfaces: &mut [Interface], details: &[DetailRow]) {
    for row in details {
        for intf in interfaces.iter_mut() {
            if intf.name == row.interface {
                intf.description = non_empty(&row.description);
                intf.speed = non_empty(&row.speed);
                intf.mtu = non_empty(&row.mtu);
            }
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Keeps only the static entries of the route table.
pub fn statics_from_rows(rows: Vec<RouteRow>) -> Vec<StaticRoute> {
    rows.into_iter()
        .filter(|row| row.protocol == STATIC_MARKER)
        .map(|row| StaticRoute {
            subnet: row.network,
            prefix: row.mask,
            next_hop: row.nexthop_ip,
            distance: row.distance,
        })
        .collect()
}
