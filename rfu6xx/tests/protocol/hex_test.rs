#[path = "../common/mod.rs"]
mod common;

use rfu6xx::Error;
use rfu6xx::utils::{bytes_to_hex, parse_hex};

#[test]
fn parse_matches_hex_crate() {
    assert_eq!(
        parse_hex(common::SAMPLE_TAG_HEX).unwrap(),
        common::sample_tag_bytes()
    );
    assert_eq!(
        bytes_to_hex(&common::sample_tag_bytes()),
        common::SAMPLE_TAG_HEX.to_lowercase()
    );
}

#[test]
fn malformed_inputs() {
    for bad in ["abc", "zz", "0x00", "af fe", "a"] {
        assert!(
            matches!(parse_hex(bad), Err(Error::MalformedHex(_))),
            "accepted {:?}",
            bad
        );
    }
}
