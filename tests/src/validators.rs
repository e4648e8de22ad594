#![cfg(test)]
use ipvet_common::report::{Status, Verdict};
use ipvet_core::address::validate_address;
use ipvet_core::mask::validate_mask;

fn assert_verdict(verdict: Verdict, status: Status, message: &str) {
    assert_eq!(verdict.status, status);
    assert_eq!(verdict.message, message);
}

#[test]
fn address_contract_pairs() {
    assert_verdict(
        validate_address("192.168.1.1"),
        Status::Valid,
        "11000000.10101000.00000001.00000001",
    );
    assert_verdict(
        validate_address("1.2.3"),
        Status::Invalid,
        "Invalid IP: IP address must consist of four octets separated by periods.",
    );
    assert_verdict(
        validate_address("192.168.1.256"),
        Status::Invalid,
        "11000000.10101000.00000001.INVALID",
    );
}

#[test]
fn mask_contract_pairs() {
    assert_verdict(
        validate_mask("255.255.255.0"),
        Status::Valid,
        "11111111.11111111.11111111.00000000",
    );
    assert_verdict(
        validate_mask("255.0.255.0"),
        Status::Invalid,
        "11111111.00000000.11111111.00000000",
    );
    assert_verdict(
        validate_mask("abc.255.255.0"),
        Status::Invalid,
        "INVALID.11111111.11111111.00000000",
    );
    assert_verdict(
        validate_mask("1.2"),
        Status::Invalid,
        "Invalid subnet mask: Subnet mask must consist of four octets separated by periods.",
    );
}

#[test]
fn validation_has_no_hidden_state() {
    for input in ["192.168.1.1", "255.0.255.0", "not.an.ip.addr", "1.2.3"] {
        assert_eq!(validate_address(input), validate_address(input));
        assert_eq!(validate_mask(input), validate_mask(input));
    }
}

/// A VALID mask verdict implies the concatenated 32-bit pattern matches
/// `1*0*`; addresses carry no such structural constraint.
#[test]
fn valid_masks_are_ones_then_zeros() {
    let samples = [
        "0.0.0.0",
        "128.0.0.0",
        "255.255.0.0",
        "255.255.255.255",
        "255.0.255.0",
        "0.255.0.0",
        "192.168.1.1",
    ];

    for input in samples {
        let verdict = validate_mask(input);
        if verdict.status.is_valid() {
            let pattern: String = verdict.message.split('.').collect();
            assert_eq!(pattern.len(), 32);
            let boundary = pattern.find('0').unwrap_or(32);
            assert!(pattern[..boundary].bytes().all(|b| b == b'1'));
            assert!(pattern[boundary..].bytes().all(|b| b == b'0'));
        }
    }

    // An address with a non-contiguous bit pattern is still a valid address.
    assert_eq!(validate_address("255.0.255.0").status, Status::Valid);
}
