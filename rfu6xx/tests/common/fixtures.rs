// Commonly used tag ids, payloads and mock readers

use rfu6xx::protocol::Variant;
use rfu6xx::resolver::Role;
use rfu6xx::test_support;
use rfu6xx::transport::MockTransport;
use rfu6xx::types::DeviceStatus;

/// EPC as reported by `LastScanData`
pub const SAMPLE_TAG_HEX: &str = "E2801160600002084E5A2B3C";

pub fn sample_tag_bytes() -> Vec<u8> {
    hex::decode(SAMPLE_TAG_HEX).unwrap()
}

/// Expected Tag-ID extension object body for [`SAMPLE_TAG_HEX`].
pub fn sample_tag_payload() -> Vec<u8> {
    let mut payload = vec![0x02, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00];
    payload.extend_from_slice(&sample_tag_bytes());
    payload
}

/// Mock reader whose status reads follow `statuses` (the last one sticks).
pub fn reader_with_statuses(statuses: &[DeviceStatus]) -> MockTransport {
    let mut m = test_support::mock_reader();
    let node = test_support::reader_node(Role::DeviceStatus);
    m.attributes.remove(&node);
    for s in statuses {
        m.queue_attribute(node, Variant::Int32(s.as_i32()));
    }
    m
}

pub fn with_last_scan(mut m: MockTransport, data: &str) -> MockTransport {
    m.set_attribute(
        test_support::reader_node(Role::LastScanData),
        Variant::String(data.to_string()),
    );
    m
}
