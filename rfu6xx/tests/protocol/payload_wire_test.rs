#[path = "../common/mod.rs"]
mod common;

use rfu6xx::protocol::{ExtensionObject, build_scan_start_payload, build_tag_id_payload};
use rfu6xx::types::{NodeRef, ScanParameters, TagId};

#[test]
fn scan_start_wire_bytes() {
    let p = build_scan_start_payload(&ScanParameters::new(2.5, 3, true));
    // 2.5 = 0x4004000000000000
    assert_eq!(hex::encode(&p), "0000000000000000000004400300000001");
    assert_eq!(
        p,
        vec![
            0x00, 0x00, 0x00, 0x00, // reserved
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x40, // duration
            0x03, 0x00, 0x00, 0x00, // cycle
            0x01, // data available
        ]
    );
}

#[test]
fn scan_start_defaults_used_by_demo() {
    // duration 0, cycle 0, no data-available event
    assert_eq!(
        build_scan_start_payload(&ScanParameters::new(0.0, 0, false)),
        vec![0u8; 17]
    );
}

#[test]
fn tag_id_wire_bytes() {
    let id = TagId::parse("AFFE").unwrap();
    assert_eq!(hex::encode(build_tag_id_payload(&id)), "0200000002000000affe");

    let id = TagId::parse(common::SAMPLE_TAG_HEX).unwrap();
    assert_eq!(build_tag_id_payload(&id), common::sample_tag_payload());
}

#[test]
fn extension_object_type_ids() {
    let eo = ExtensionObject::scan_start(3, &ScanParameters::default());
    assert_eq!(eo.type_id, NodeRef::new(3, 3010));

    let eo = ExtensionObject::tag_id(3, &TagId::parse("01").unwrap());
    assert_eq!(eo.type_id, NodeRef::new(3, 5030));
}
