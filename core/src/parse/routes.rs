//! Parser for `show ip route`.

use std::sync::OnceLock;

use regex::Regex;

use crate::rows::RouteRow;

static ROUTE_RE: OnceLock<Regex> = OnceLock::new();
static VIA_RE: OnceLock<Regex> = OnceLock::new();

fn route_re() -> &'static Regex {
    ROUTE_RE.get_or_init(|| {
        Regex::new(
            r"^(\S+)\s+(\d+\.\d+\.\d+\.\d+)/(\d+)\s+\[(\d+)/\d+\]\s+via\s+(\d+\.\d+\.\d+\.\d+)",
        )
        .expect("valid regex")
    })
}

fn via_re() -> &'static Regex {
    VIA_RE.get_or_init(|| {
        Regex::new(r"^\s+\[(\d+)/\d+\]\s+via\s+(\d+\.\d+\.\d+\.\d+)").expect("valid regex")
    })
}

/// One row per next hop. Equal-cost entries continue on indented
/// `[AD/metric] via ...` lines and inherit the destination of the row
/// above them.
pub fn route_rows(output: &str) -> Vec<RouteRow> {
    let mut rows: Vec<RouteRow> = Vec::new();
    for line in output.lines() {
        if let Some(caps) = route_re().captures(line) {
            rows.push(RouteRow {
                protocol: caps[1].to_string(),
                network: caps[2].to_string(),
                mask: caps[3].to_string(),
                distance: caps[4].to_string(),
                nexthop_ip: caps[5].to_string(),
            });
        } else if let Some(caps) = via_re().captures(line) {
            let Some(previous) = rows.last() else {
                continue;
            };
            let continued = RouteRow {
                protocol: previous.protocol.clone(),
                network: previous.network.clone(),
                mask: previous.mask.clone(),
                distance: caps[1].to_string(),
                nexthop_ip: caps[2].to_string(),
            };
            rows.push(continued);
        }
    }
    rows
}
