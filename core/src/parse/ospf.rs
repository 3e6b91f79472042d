//! Parser for the `show ip ospf neighbor` table.

use crate::rows::NeighborRow;

/// Rows from the flat neighbor table.
///
/// The state column may itself contain whitespace (`FULL/  -` on
/// point-to-point links), so rows are taken apart from both ends:
/// neighbor ID and priority lead, dead-time, address and interface
/// trail, and whatever sits between is the state.
pub fn neighbor_rows(output: &str) -> Vec<NeighborRow> {
    let mut rows: Vec<NeighborRow> = Vec::new();
    for line in output.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 6 || fields[0] == "Neighbor" {
            continue;
        }
        if !fields[0].chars().next().is_some_and(|c| c.is_ascii_digit()) {
            continue;
        }
        let interface = fields[fields.len() - 1];
        let address = fields[fields.len() - 2];
        let state = fields[2..fields.len() - 3].join(" ");
        rows.push(NeighborRow {
            interface: interface.to_string(),
            neighbor_id: fields[0].to_string(),
            address: address.to_string(),
            state,
        });
    }
    rows
}
