use std::path::Path;

use ipvet_common::{config::Config, success};
use ipvet_core::{address, batch, mask};

/// Fixed file names for the two batch modes.
pub const IPS_INPUT: &str = "batch_ips.txt";
pub const IPS_OUTPUT: &str = "batch_ip_validation_output.txt";
pub const MASKS_INPUT: &str = "batch_subnet_masks.txt";
pub const MASKS_OUTPUT: &str = "batch_subnet_mask_validation_output.txt";

/// Validates every address in `batch_ips.txt`, one report block per line.
pub fn run_ips(cfg: &Config) -> anyhow::Result<()> {
    batch::run_file(
        Path::new(IPS_INPUT),
        Path::new(IPS_OUTPUT),
        address::validate_address,
    )?;

    if !cfg.quiet {
        success!("batch address validation finished");
    }
    Ok(())
}

/// Validates every mask in `batch_subnet_masks.txt`, one report block per line.
pub fn run_subnet_masks(cfg: &Config) -> anyhow::Result<()> {
    batch::run_file(
        Path::new(MASKS_INPUT),
        Path::new(MASKS_OUTPUT),
        mask::validate_mask,
    )?;

    if !cfg.quiet {
        success!("batch subnet mask validation finished");
    }
    Ok(())
}
