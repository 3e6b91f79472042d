use std::path::PathBuf;
use std::time::{Duration, Instant};

use colored::*;
use routescout_common::config::Config;
use routescout_core::discovery::{self, DeviceProgress, TransportOpener};
use routescout_core::{inventory, snapshot};

use crate::terminal::{colors, print, spinner};

pub async fn discover(
    inventory_path: PathBuf,
    username: String,
    password: String,
    output_prefix: String,
) -> anyhow::Result<()> {
    let cfg = Config {
        username,
        password,
        output_prefix,
    };

    let mut devices = inventory::load_inventory(&inventory_path)?;
    if devices.is_empty() {
        anyhow::bail!("inventory {} holds no usable devices", inventory_path.display());
    }

    let started = Instant::now();
    let pb = spinner::start();
    let pb_ref = pb.clone();
    let progress: DeviceProgress = Box::new(move |id: &str| {
        pb_ref.set_message(format!("polling {id}"));
    });

    let completed = discovery::run_pass(&mut devices, &cfg, &TransportOpener, Some(progress)).await;
    pb.finish_and_clear();

    let snapshot_path = snapshot::write_snapshot(&devices, &cfg.output_prefix)?;

    print::header("discovered topology");
    print::device_trees(&devices);
    print_summary(completed, devices.len(), started.elapsed());
    println!("snapshot: {}", snapshot_path.display().to_string().color(colors::ACCENT));
    Ok(())
}

fn print_summary(completed: usize, total: usize, elapsed: Duration) {
    let polled: ColoredString = format!("{completed}/{total} devices").bold().green();
    let took: ColoredString = format!("{:.2}s", elapsed.as_secs_f64()).bold().yellow();

    print::fat_separator();
    println!(
        "{}",
        format!("Discovery complete: {polled} polled in {took}").color(colors::TEXT_DEFAULT)
    );
}
