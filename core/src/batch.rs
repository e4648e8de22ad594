//! # Batch Validation
//!
//! Runs a validator over newline-separated input, one report block per line,
//! preserving input order 1:1.
//!
//! The file runner reads the whole input into memory and writes the whole
//! report at once; every line is an independent, stateless validation.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use ipvet_common::report::Verdict;
use tracing::debug;

/// Validates each line in order and renders its report block.
///
/// Trailing whitespace and line endings are stripped before validating and
/// before echoing the line back.
pub fn run_lines<'a, I, F>(lines: I, validate: F) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
    F: Fn(&str) -> Verdict,
{
    lines
        .into_iter()
        .map(|line| {
            let line = line.trim_end();
            validate(line).render_block(line)
        })
        .collect()
}

/// Reads `input`, validates line by line, and writes the report blocks to
/// `output` in the same order.
///
/// A missing input file is a silent skip: no output file is produced and no
/// error is surfaced. Any other I/O failure propagates.
pub fn run_file<F>(input: &Path, output: &Path, validate: F) -> anyhow::Result<()>
where
    F: Fn(&str) -> Verdict,
{
    let contents = match fs::read_to_string(input) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("input file {} not found, skipping", input.display());
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let blocks = run_lines(contents.lines(), validate);
    let mut report = blocks.join("\n");
    if !report.is_empty() {
        report.push('\n');
    }
    fs::write(output, report)?;

    Ok(())
}
