//! Turns device records into the key/value pairs the tree printer
//! renders, with colors carrying state: green addresses, yellow static
//! flags, dimmed placeholders.

use colored::*;
use routescout_common::topology::device::{Device, DeviceKind, Interface, ProtocolState};
use routescout_common::topology::ospf::OspfProcess;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn device_details(device: &Device) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        ("kind".to_string(), kind_str(device.kind).normal()),
        ("address".to_string(), device.addr.color(colors::ADDR)),
        ("updated".to_string(), updated_detail(device)),
    ];

    for intf in &device.interfaces {
        details.push((intf.name.clone(), interface_summary(intf)));
    }

    if !device.statics.is_empty() {
        let summary = device
            .statics
            .iter()
            .map(|route| format!("{}/{} via {}", route.subnet, route.prefix, route.next_hop))
            .collect::<Vec<String>>()
            .join(", ");
        details.push(("statics".to_string(), summary.normal()));
    }

    for process in &device.ospf {
        details.push((
            format!("ospf {}", process.process_id),
            process_summary(process),
        ));
    }

    details
}

fn kind_str(kind: DeviceKind) -> &'static str {
    match kind {
        DeviceKind::Router => "Router",
        DeviceKind::Switch => "Switch",
        DeviceKind::FirewallAsa => "Firewall (ASA)",
    }
}

fn updated_detail(device: &Device) -> ColoredString {
    match device.last_updated {
        Some(stamp) => stamp
            .format("%Y-%m-%d %H:%M UTC")
            .to_string()
            .color(colors::ACCENT),
        None => "never".dimmed(),
    }
}

fn interface_summary(intf: &Interface) -> ColoredString {
    let addrs = intf
        .addrs
        .iter()
        .zip(intf.prefixes.iter())
        .map(|(addr, prefix)| format!("{addr}/{prefix}"))
        .collect::<Vec<String>>()
        .join(" ");

    let mut summary = addrs.color(colors::ADDR).to_string();
    if intf.has_static {
        summary.push_str(&format!(" {}", "static".yellow()));
    }
    if intf.ospf == ProtocolState::Enabled {
        summary.push_str(&format!(" {}", "ospf".cyan()));
    }
    summary.normal()
}

fn process_summary(process: &OspfProcess) -> ColoredString {
    let areas = process
        .areas
        .iter()
        .map(|area| format!("area {} ({} intf)", area.number, area.interfaces.len()))
        .collect::<Vec<String>>()
        .join(", ");

    let base = format!("router-id {}", process.router_id);
    if areas.is_empty() {
        base.normal()
    } else {
        format!("{base}, {areas}").normal()
    }
}
