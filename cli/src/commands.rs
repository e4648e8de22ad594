pub mod batch;
pub mod interactive;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ipvet")]
#[command(about = "Validates IPv4 addresses and subnet masks as dotted binary.")]
pub struct CommandLine {
    /// Suppress diagnostic log lines (validation output is unaffected)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
#[command(rename_all = "snake_case")]
pub enum Commands {
    /// Validate one address and one mask read from standard input
    Interactive,
    /// Validate addresses from batch_ips.txt
    BatchIps,
    /// Validate masks from batch_subnet_masks.txt
    BatchSubnetMasks,
}

impl CommandLine {
    /// `None` on any argument error, so the caller can print usage and still
    /// exit 0. No mode signals failure through the exit code.
    pub fn parse_args() -> Option<Self> {
        Self::try_parse().ok()
    }
}
