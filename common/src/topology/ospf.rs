//! OSPF process structure as recovered from a device's running
//! configuration and neighbor table.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OspfProcess {
    pub process_id: String,
    pub router_id: String,
    /// Unique by area number, kept in first-seen order.
    pub areas: Vec<OspfArea>,
    pub redist: Vec<Redistribution>,
}

impl OspfProcess {
    pub fn new(process_id: String, router_id: String) -> Self {
        Self {
            process_id,
            router_id,
            areas: Vec::new(),
            redist: Vec::new(),
        }
    }
}

/// Areas keep their number as text: configurations express them in both
/// integer (`0`) and dotted (`0.0.0.0`) form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OspfArea {
    pub number: String,
    pub interfaces: Vec<OspfInterface>,
}

impl OspfArea {
    pub fn new(number: String) -> Self {
        Self {
            number,
            interfaces: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OspfInterface {
    pub name: String,
    pub neighbors: Vec<OspfNeighbor>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OspfNeighbor {
    pub router_id: String,
    pub next_hop: String,
    pub state: String,
    /// Resolved against the inventory by a later reporting stage; always
    /// empty at this layer.
    pub device_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Redistribution {
    /// The configuration line as found.
    pub config: String,
    /// May be a two-word compound such as `eigrp 100`.
    pub protocol: String,
    /// `N/A` when the line names no route-map.
    pub route_map: String,
}
