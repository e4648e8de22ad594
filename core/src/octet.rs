//! # Octet Parsing
//!
//! Splits dotted-decimal input into four octets and renders each one as an
//! 8-bit binary string.
//!
//! This is the shared front end of both validators: the address validator and
//! the subnet mask validator differ only in what they do with the parsed
//! octets, never in how the octets are parsed.

use thiserror::Error;

/// Marker rendered in place of a binary string for a part that failed
/// numeric validation.
pub const INVALID_MARKER: &str = "INVALID";

/// Input did not split into exactly four non-empty dot-separated parts.
///
/// This failure short-circuits every per-octet check.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("input must consist of four octets separated by periods")]
pub struct WrongOctetCount;

/// Parse result for a single dot-separated part. No identity, just a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Octet {
    /// The part was a base-10 integer in [0, 255].
    Value(u8),
    /// Non-numeric, signed, or out of range.
    Invalid,
}

impl Octet {
    /// A part is numeric only if every character is an ASCII decimal digit:
    /// no sign, no whitespace, no `+`. Leading zeros are fine ("007" is 7).
    fn parse(part: &str) -> Self {
        if !part.chars().all(|c| c.is_ascii_digit()) {
            return Octet::Invalid;
        }
        match part.parse::<u8>() {
            Ok(value) => Octet::Value(value),
            // All digits but over 255.
            Err(_) => Octet::Invalid,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Octet::Value(_))
    }

    /// Exactly 8 binary digits, MSB first, zero padded ("5" renders as
    /// "00000101"); invalid parts render as the literal `INVALID` marker.
    pub fn render(self) -> String {
        match self {
            Octet::Value(value) => format!("{value:08b}"),
            Octet::Invalid => INVALID_MARKER.to_string(),
        }
    }
}

/// Splits `text` on `.` and classifies each part.
///
/// Anything other than four non-empty parts is a structural failure and no
/// per-part classification happens at all.
pub fn split_octets(text: &str) -> Result<[Octet; 4], WrongOctetCount> {
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != 4 || parts.iter().any(|part| part.is_empty()) {
        return Err(WrongOctetCount);
    }

    Ok([
        Octet::parse(parts[0]),
        Octet::parse(parts[1]),
        Octet::parse(parts[2]),
        Octet::parse(parts[3]),
    ])
}

/// The four per-octet renderings joined by `.`, valid binary strings mixed
/// with `INVALID` markers.
pub fn render_joined(octets: &[Octet; 4]) -> String {
    octets
        .iter()
        .map(|octet| octet.render())
        .collect::<Vec<String>>()
        .join(".")
}
