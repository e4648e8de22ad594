use std::io::{self, BufRead};

use ipvet_common::warn;
use ipvet_core::{address, mask};

use crate::terminal::print;

/// Prompts for one IP address and one subnet mask on standard input, printing
/// a report block for each.
pub fn run() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let ip = read_prompted(&mut lines, "Enter IP address: ")?;
    println!("{}", address::validate_address(&ip).render_block(&ip));

    let mask_input = read_prompted(&mut lines, "Enter subnet mask: ")?;
    println!("{}", mask::validate_mask(&mask_input).render_block(&mask_input));

    Ok(())
}

fn read_prompted<I>(lines: &mut I, prompt: &str) -> anyhow::Result<String>
where
    I: Iterator<Item = io::Result<String>>,
{
    print::prompt(prompt)?;

    let line = match lines.next().transpose()? {
        Some(line) => line,
        None => {
            warn!("no input received, validating an empty line");
            String::new()
        }
    };

    Ok(line.trim_end().to_string())
}
