#[path = "../common/mod.rs"]
mod common;

use rfu6xx::protocol::Variant;
use rfu6xx::resolver::Role;
use rfu6xx::test_support;
use rfu6xx::types::{DeviceStatus, ReaderResponseCode, ScanParameters, TagAddress};

#[test]
fn scan_read_stop_write_read() {
    // status: Idle for start, Scanning for stop
    let m = common::reader_with_statuses(&[DeviceStatus::Idle, DeviceStatus::Scanning]);
    let mut m = common::with_last_scan(m, common::SAMPLE_TAG_HEX);
    m.push_call_response(vec![]); // ScanStart
    m.push_call_response(vec![]); // ScanStop
    m.push_call_response(vec![Variant::Int32(0)]); // WriteTag
    m.push_call_response(vec![
        Variant::ByteString(b"affedeafbeadaffe".to_vec()),
        Variant::Int32(0),
    ]); // ReadTag

    let (shared, mut dev) = test_support::shared_mock_device(m).unwrap();

    dev.start_scan(&ScanParameters::new(0.0, 0, false)).unwrap();
    let tag = dev.read_last_scan_data().unwrap();
    assert_eq!(tag, common::SAMPLE_TAG_HEX);
    dev.stop_scan().unwrap();

    let code = dev
        .write_tag(&tag, TagAddress::new(3, 0), "affedeafbeadaffe")
        .unwrap();
    assert!(code.ensure_success().is_ok());

    let read = dev
        .read_tag(&tag, TagAddress::new(3, 0).with_length(16))
        .unwrap();
    assert_eq!(read.response, ReaderResponseCode::Success);
    assert_eq!(read.data, b"affedeafbeadaffe".to_vec());

    let m = shared.borrow();
    let methods: Vec<_> = m.calls.iter().map(|c| c.method).collect();
    assert_eq!(
        methods,
        vec![
            test_support::reader_node(Role::ScanStart),
            test_support::reader_node(Role::ScanStop),
            test_support::reader_node(Role::WriteTag),
            test_support::reader_node(Role::ReadTag),
        ]
    );
    match &m.calls[2].params[0] {
        Variant::ExtensionObject(eo) => assert_eq!(eo.body, common::sample_tag_payload()),
        other => panic!("expected extension object, got: {:?}", other),
    }
}

#[test]
fn reader_failure_is_a_value_not_an_error() {
    let mut m = test_support::mock_reader();
    m.push_call_response(vec![Variant::Int32(15)]);
    let mut dev = test_support::initialized_mock_device(m).unwrap();

    let code = dev
        .write_tag(common::SAMPLE_TAG_HEX, TagAddress::new(1, 0), "00")
        .unwrap();
    assert_eq!(code, ReaderResponseCode::NotSupportedByDevice);
    assert!(code.ensure_success().is_err());
}
