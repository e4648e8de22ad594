use std::io::{self, Write};

/// Usage text listing the three modes. Goes to standard output, and the
/// process still exits 0 afterwards.
pub fn usage() {
    println!("Usage: ipvet <mode>");
    println!("Available modes:");
    println!("  interactive: Run in interactive mode");
    println!("  batch_ips: Run batch mode for IP addresses");
    println!("  batch_subnet_masks: Run batch mode for subnet masks");
}

/// Writes a prompt without a trailing newline and flushes, so the cursor
/// stays on the prompt line.
pub fn prompt(msg: &str) -> io::Result<()> {
    print!("{msg}");
    io::stdout().flush()
}
