//! End-to-end correlation over a scripted session: the full per-device
//! command sequence, ingestion and correlation, without touching a wire.

use std::collections::HashMap;

use routescout_common::config::Config;
use routescout_common::topology::device::{Device, DeviceKind, ProtocolState};
use routescout_core::discovery;

use crate::fake_session::{FakeOpener, FakeSession, UnreachableOpener};

const SHOW_IP_INT: &str = "\
GigabitEthernet0/0 is up, line protocol is up
  Internet address is 10.0.0.1/30
  VPN Routing/Forwarding \"CUST-A\"
GigabitEthernet0/1 is up, line protocol is up
  Internet address is 10.0.1.1/24
GigabitEthernet0/2 is administratively down, line protocol is down
  Internet protocol processing disabled
Loopback0 is up, line protocol is up
  Internet address is 1.1.1.1/32
";

const SHOW_INT: &str = "\
GigabitEthernet0/0 is up, line protocol is up
  Description: uplink-to-core
  MTU 1500 bytes, BW 1000000 Kbit/sec, DLY 10 usec,
  Full-duplex, 1000Mb/s, media type is T
";

const SHOW_IP_ROUTE: &str = "\
Codes: L - local, C - connected, S - static, O - OSPF

S     10.99.0.0/24 [1/0] via 10.0.0.2
O     10.50.0.0/24 [110/2] via 10.0.0.2, 00:12:03, GigabitEthernet0/0
C     10.0.0.0/30 is directly connected, GigabitEthernet0/0
";

const SHOW_OSPF_NEIGH: &str = "\
Neighbor ID     Pri   State           Dead Time   Address         Interface
2.2.2.2           1   FULL/DR         00:00:33    10.0.0.2        GigabitEthernet0/0
";

const SHOW_OSPF_SUMMARY: &str = " Routing Process \"ospf 10\" with ID 1.1.1.1\n";

const SHOW_OSPF_CONFIG: &str = "\
router ospf 10
 router-id 1.1.1.1
 redistribute static route-map STATIC-TO-OSPF
 network 10.0.0.0 0.0.0.3 area 0
 network 10.0.1.0 0.0.0.255 area 0
";

fn transcript() -> HashMap<String, String> {
    HashMap::from([
        ("show ip interface".to_string(), SHOW_IP_INT.to_string()),
        ("show interfaces".to_string(), SHOW_INT.to_string()),
        ("show ip route".to_string(), SHOW_IP_ROUTE.to_string()),
        ("show ip ospf neighbor".to_string(), SHOW_OSPF_NEIGH.to_string()),
        (
            "show ip ospf | include Routing".to_string(),
            SHOW_OSPF_SUMMARY.to_string(),
        ),
        (
            "show running-config | section router ospf 10".to_string(),
            SHOW_OSPF_CONFIG.to_string(),
        ),
    ])
}

fn lab_config() -> Config {
    Config {
        username: "admin".to_string(),
        password: "admin".to_string(),
        output_prefix: "unused-".to_string(),
    }
}

async fn polled_device() -> Device {
    let mut device = Device::placeholder("edge-1", "192.0.2.1", DeviceKind::Router);
    let mut session = FakeSession::new(transcript(), Default::default());
    discovery::fetch_router_state(&mut session, &mut device)
        .await
        .expect("scripted poll succeeds");
    device
}

#[tokio::test]
async fn full_poll_builds_a_consistent_record() {
    let device = polled_device().await;

    // The addressless Gi0/2 is gone; declaration order is kept.
    let names: Vec<&str> = device.interfaces.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["GigabitEthernet0/0", "GigabitEthernet0/1", "Loopback0"]);

    let gi0 = &device.interfaces[0];
    assert_eq!(gi0.vrf, "CUST-A");
    assert_eq!(gi0.description.as_deref(), Some("uplink-to-core"));
    assert_eq!(gi0.mtu.as_deref(), Some("1500"));
    assert_eq!(gi0.speed.as_deref(), Some("1000Mb/s"));
    assert!(gi0.has_static, "static next hop 10.0.0.2 sits on Gi0/0");
    assert!(!device.interfaces[1].has_static);

    assert_eq!(device.statics.len(), 1);
    assert_eq!(device.statics[0].next_hop, "10.0.0.2");

    assert_eq!(device.ospf.len(), 1);
    let process = &device.ospf[0];
    assert_eq!(process.process_id, "10");
    assert_eq!(process.router_id, "1.1.1.1");

    assert_eq!(process.redist.len(), 1);
    assert_eq!(process.redist[0].protocol, "static");
    assert_eq!(process.redist[0].route_map, "STATIC-TO-OSPF");

    // Both network statements funnel into the one area 0.
    assert_eq!(process.areas.len(), 1);
    let area = &process.areas[0];
    assert_eq!(area.number, "0");
    let bound: Vec<&str> = area.interfaces.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(bound, vec!["GigabitEthernet0/0", "GigabitEthernet0/1"]);
    assert_eq!(area.interfaces[0].neighbors.len(), 1);
    assert_eq!(area.interfaces[0].neighbors[0].router_id, "2.2.2.2");
    assert_eq!(area.interfaces[0].neighbors[0].device_name, "");
    assert!(area.interfaces[1].neighbors.is_empty());

    assert_eq!(device.interfaces[0].ospf, ProtocolState::Enabled);
    assert_eq!(device.interfaces[1].ospf, ProtocolState::Enabled);
    assert_eq!(device.interfaces[2].ospf, ProtocolState::Disabled);

    assert!(device.last_updated.is_some());
}

#[tokio::test]
async fn repolling_unchanged_outputs_is_idempotent() {
    let mut first = polled_device().await;
    let mut second = polled_device().await;

    // Only the completion stamps may differ.
    first.last_updated = None;
    second.last_updated = None;
    assert_eq!(first, second);
}

#[tokio::test]
async fn run_pass_releases_sessions_and_counts_completions() {
    let cfg = lab_config();
    let opener = FakeOpener::new(transcript());
    let mut devices = vec![Device::placeholder("edge-1", "192.0.2.1", DeviceKind::Router)];

    let completed = discovery::run_pass(&mut devices, &cfg, &opener, None).await;

    assert_eq!(completed, 1);
    assert!(opener.disconnected.load(std::sync::atomic::Ordering::Relaxed));
    assert!(devices[0].last_updated.is_some());
}

#[tokio::test]
async fn unreachable_device_keeps_its_placeholder_fields() {
    let cfg = lab_config();
    let opener = UnreachableOpener::new();
    let mut devices = vec![Device::placeholder("edge-1", "192.0.2.1", DeviceKind::Router)];

    let completed = discovery::run_pass(&mut devices, &cfg, &opener, None).await;

    assert_eq!(completed, 0);
    assert_eq!(
        devices[0],
        Device::placeholder("edge-1", "192.0.2.1", DeviceKind::Router)
    );
}

#[tokio::test]
async fn production_transport_plugs_into_the_pass() {
    let cfg = lab_config();
    let mut devices = vec![Device::placeholder("fw-1", "192.0.2.9", DeviceKind::FirewallAsa)];

    // ASA devices are skipped before any transport attempt, so the real
    // opener runs through the pass without a reachable device.
    let completed =
        discovery::run_pass(&mut devices, &cfg, &discovery::TransportOpener, None).await;

    assert_eq!(completed, 0);
    assert!(devices[0].last_updated.is_none());
}

#[tokio::test]
async fn asa_devices_are_skipped_without_a_session() {
    let cfg = lab_config();
    let opener = UnreachableOpener::new();
    let mut devices = vec![Device::placeholder("fw-1", "192.0.2.9", DeviceKind::FirewallAsa)];

    discovery::run_pass(&mut devices, &cfg, &opener, None).await;

    assert_eq!(opener.attempts.load(std::sync::atomic::Ordering::Relaxed), 0);
    assert!(devices[0].last_updated.is_none());
}
