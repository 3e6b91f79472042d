//! Parsers for `show ip interface` and `show interfaces`.
//!
//! Both commands print one unindented header line per interface followed
//! by an indented attribute block, so both parsers share the same shape:
//! a header opens a new row, attribute lines amend the row most recently
//! opened.

use std::sync::OnceLock;

use regex::Regex;

use crate::rows::{DetailRow, InterfaceRow};

static ADDR_RE: OnceLock<Regex> = OnceLock::new();
static VRF_RE: OnceLock<Regex> = OnceLock::new();
static DESC_RE: OnceLock<Regex> = OnceLock::new();
static MTU_RE: OnceLock<Regex> = OnceLock::new();
static SPEED_RE: OnceLock<Regex> = OnceLock::new();

fn addr_re() -> &'static Regex {
    ADDR_RE.get_or_init(|| {
        Regex::new(r"(?:Internet address is|Secondary address) (\d+\.\d+\.\d+\.\d+)/(\d+)")
            .expect("valid regex")
    })
}

fn vrf_re() -> &'static Regex {
    VRF_RE.get_or_init(|| {
        Regex::new(r#"VPN Routing/Forwarding "([^"]+)""#).expect("valid regex")
    })
}

fn desc_re() -> &'static Regex {
    DESC_RE.get_or_init(|| Regex::new(r"Description: (.+)").expect("valid regex"))
}

fn mtu_re() -> &'static Regex {
    MTU_RE.get_or_init(|| Regex::new(r"MTU (\d+) bytes").expect("valid regex"))
}

fn speed_re() -> &'static Regex {
    SPEED_RE.get_or_init(|| Regex::new(r"-duplex, ([^,]+)").expect("valid regex"))
}

/// An unindented `<name> is <state>, line protocol is ...` line opens a
/// new interface block; returns the interface name.
fn header_name(line: &str) -> Option<&str> {
    if line.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    if !line.contains(" is ") {
        return None;
    }
    line.split_whitespace().next()
}

/// Rows from `show ip interface`. Interfaces with no configured address
/// still produce a row here; ingestion drops them.
pub fn interface_rows(output: &str) -> Vec<InterfaceRow> {
    let mut rows: Vec<InterfaceRow> = Vec::new();
    for line in output.lines() {
        if let Some(name) = header_name(line) {
            rows.push(InterfaceRow {
                intf: name.to_string(),
                ipaddr: Vec::new(),
                mask: Vec::new(),
                vrf: String::new(),
            });
            continue;
        }
        let Some(current) = rows.last_mut() else {
            continue;
        };
        if let Some(caps) = addr_re().captures(line) {
            current.ipaddr.push(caps[1].to_string());
            current.mask.push(caps[2].to_string());
        } else if let Some(caps) = vrf_re().captures(line) {
            current.vrf = caps[1].to_string();
        }
    }
    rows
}

/// Rows from `show interfaces`.
pub fn detail_rows(output: &str) -> Vec<DetailRow> {
    let mut rows: Vec<DetailRow> = Vec::new();
    for line in output.lines() {
        if let Some(name) = header_name(line) {
            rows.push(DetailRow {
                interface: name.to_string(),
                description: String::new(),
                speed: String::new(),
                mtu: String::new(),
            });
            continue;
        }
        let Some(current) = rows.last_mut() else {
            continue;
        };
        if let Some(caps) = desc_re().captures(line) {
            current.description = caps[1].trim().to_string();
        } else if let Some(caps) = mtu_re().captures(line) {
            current.mtu = caps[1].to_string();
        } else if let Some(caps) = speed_re().captures(line) {
            current.speed = caps[1].trim().to_string();
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOW_IP_INT: &str = "\
GigabitEthernet0/0 is up, line protocol is up
  Internet address is 10.0.0.1/30
  Broadcast address is 255.255.255.255
  Secondary address 10.0.1.1/24
  VPN Routing/Forwarding \"CUST-A\"
GigabitEthernet0/1 is administratively down, line protocol is down
  Internet protocol processing disabled
Loopback0 is up, line protocol is up
  Internet address is 1.1.1.1/32
";

    const SHOW_INT: &str = "\
GigabitEthernet0/0 is up, line protocol is up
  Hardware is iGbE, address is 5254.0012.3456 (bia 5254.0012.3456)
  Description: uplink-to-core
  MTU 1500 bytes, BW 1000000 Kbit/sec, DLY 10 usec,
  Full-duplex, 1000Mb/s, media type is T
Loopback0 is up, line protocol is up
  MTU 1514 bytes, BW 8000000 Kbit/sec, DLY 5000 usec,
";

    #[test]
    fn interface_rows_collect_addresses_in_order() {
        let rows = interface_rows(SHOW_IP_INT);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].intf, "GigabitEthernet0/0");
        assert_eq!(rows[0].ipaddr, vec!["10.0.0.1", "10.0.1.1"]);
        assert_eq!(rows[0].mask, vec!["30", "24"]);
        assert_eq!(rows[0].vrf, "CUST-A");
        assert!(rows[1].ipaddr.is_empty());
        assert_eq!(rows[2].ipaddr, vec!["1.1.1.1"]);
    }

    #[test]
    fn detail_rows_pick_up_attributes() {
        let rows = detail_rows(SHOW_INT);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].description, "uplink-to-core");
        assert_eq!(rows[0].mtu, "1500");
        assert_eq!(rows[0].speed, "1000Mb/s");
        assert_eq!(rows[1].description, "");
        assert_eq!(rows[1].mtu, "1514");
    }

    #[test]
    fn attribute_lines_before_any_header_are_skipped() {
        assert!(interface_rows("  Internet address is 10.0.0.1/24\n").is_empty());
    }
}
