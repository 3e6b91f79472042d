//! Field-keyed rows produced by the per-command parsers, one struct per
//! command schema. Ingestion projects these into topology entities.

/// One row per interface from `show ip interface`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceRow {
    pub intf: String,
    /// Primary address first, then secondaries; parallel to `mask`.
    pub ipaddr: Vec<String>,
    /// Prefix lengths, e.g. `"30"`.
    pub mask: Vec<String>,
    pub vrf: String,
}

/// One row per interface from `show interfaces`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub interface: String,
    pub description: String,
    pub speed: String,
    pub mtu: String,
}

/// One row per route-table entry from `show ip route`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRow {
    /// Protocol code as printed, e.g. `S`, `O`, `C`.
    pub protocol: String,
    pub network: String,
    /// Prefix length of the destination.
    pub mask: String,
    pub nexthop_ip: String,
    pub distance: String,
}

/// One row per adjacency from `show ip ospf neighbor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborRow {
    pub interface: String,
    pub neighbor_id: String,
    pub address: String,
    pub state: String,
}
