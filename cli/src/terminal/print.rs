use colored::*;
use routescout_common::topology::device::Device;

use crate::terminal::{colors, format};

pub const TOTAL_WIDTH: usize = 64;

pub fn header(msg: &str) {
    let formatted = format!("⟦ {} ⟧", msg);
    let msg_len = formatted.chars().count();

    let dash_count = TOTAL_WIDTH.saturating_sub(msg_len);
    let left = dash_count / 2;
    let right = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println!("{line}");
}

pub fn fat_separator() {
    println!("{}", "═".repeat(TOTAL_WIDTH).bright_black());
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str = format!("[{}]", idx.to_string().color(colors::ACCENT));
    println!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    );
}

pub fn as_tree_one_level(key_value_pairs: Vec<(String, ColoredString)>) {
    let key_width = key_value_pairs
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    for (i, (key, value)) in key_value_pairs.iter().enumerate() {
        let last = i + 1 == key_value_pairs.len();
        let branch: ColoredString = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        println!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(key_width + 1 - key.chars().count())
                .color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        );
    }
}

/// One tree per device, numbered in inventory order.
pub fn device_trees(devices: &[Device]) {
    for (idx, device) in devices.iter().enumerate() {
        tree_head(idx, &device.id);
        as_tree_one_level(format::device_details(device));
        if idx + 1 != devices.len() {
            println!();
        }
    }
}
