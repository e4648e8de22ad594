//! Subnet mask validation.
//!
//! A mask passes octet parsing like an address does, then must additionally
//! satisfy the contiguous-ones rule: across the concatenated 32-bit pattern,
//! every 1-bit precedes every 0-bit (`1*0*`). "0.0.0.0" and
//! "255.255.255.255" both satisfy the rule.

use ipvet_common::report::Verdict;

use crate::octet::{self, Octet};

/// Fixed message for input that does not split into four octets.
pub const WRONG_COUNT_MESSAGE: &str =
    "Invalid subnet mask: Subnet mask must consist of four octets separated by periods.";

/// Validates a dotted-decimal subnet mask.
///
/// The verdict message is always the four per-octet renderings joined by `.`,
/// never the concatenated 32-bit pattern. An octet that parsed numerically
/// but sits on the wrong side of the ones/zeros boundary still shows its
/// binary value; the message does not distinguish that case from a valid
/// placement.
pub fn validate_mask(text: &str) -> Verdict {
    let octets = match octet::split_octets(text) {
        Ok(octets) => octets,
        Err(_) => return Verdict::invalid(WRONG_COUNT_MESSAGE),
    };

    let message = octet::render_joined(&octets);
    if is_contiguous(&octets) {
        Verdict::valid(message)
    } else {
        Verdict::invalid(message)
    }
}

/// Contiguous-ones check over the mask as a single 32-bit value.
///
/// Any `INVALID` marker fails the rule implicitly, since the part has no
/// bits to contribute.
fn is_contiguous(octets: &[Octet; 4]) -> bool {
    let mut bits: u32 = 0;
    for octet in octets {
        let Octet::Value(value) = octet else {
            return false;
        };
        bits = (bits << 8) | u32::from(*value);
    }

    // Holds exactly when the pattern matches 1*0*.
    bits.count_ones() == bits.leading_ones()
}
