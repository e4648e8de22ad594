//! IPv4 address validation.

use ipvet_common::report::Verdict;

use crate::octet;

/// Fixed message for input that does not split into four octets.
pub const WRONG_COUNT_MESSAGE: &str =
    "Invalid IP: IP address must consist of four octets separated by periods.";

/// Validates a dotted-decimal IPv4 address.
///
/// Pure function of its input: the verdict message is the four per-octet
/// binary renderings joined by `.`, with `INVALID` standing in for octets
/// that failed numeric validation. The status is INVALID if any octet
/// failed, but the message still shows which ones did.
pub fn validate_address(text: &str) -> Verdict {
    let octets = match octet::split_octets(text) {
        Ok(octets) => octets,
        Err(_) => return Verdict::invalid(WRONG_COUNT_MESSAGE),
    };

    let message = octet::render_joined(&octets);
    if octets.iter().all(|octet| octet.is_valid()) {
        Verdict::valid(message)
    } else {
        Verdict::invalid(message)
    }
}
