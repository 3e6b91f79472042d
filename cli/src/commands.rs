pub mod discover;
pub mod resume;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "routescout")]
#[command(about = "Read-only routing topology discovery for IOS-style devices.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Poll every inventory device and snapshot the discovered topology
    #[command(alias = "d")]
    Discover {
        /// Inventory file, one `id,ip,type` line per device
        inventory: PathBuf,
        #[arg(short, long, default_value = "admin")]
        username: String,
        #[arg(short, long, default_value = "")]
        password: String,
        /// Snapshot filename prefix
        #[arg(long, default_value = "route-discovery-")]
        output_prefix: String,
    },
    /// Reload and print the last written snapshot
    #[command(alias = "r")]
    Resume,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
