//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the MockTransport setup of a typical RFU6xx
//! server so tests across the crate, the tests/ directory and the demo can
//! reuse the same address space.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::{AUTO_ID_NAMESPACE_URI, OPC_DI_NAMESPACE_URI, RFU_NAMESPACE_URI};
use crate::device::{Device, Initialized};
use crate::protocol::Variant;
use crate::resolver::{AddressTable, NamespaceIndices, Role};
use crate::transport::MockTransport;
use crate::types::{BrowseEntry, DeviceStatus, NodeIdentifier, NodeRef};
use crate::Result;

pub const NS_DI: u16 = 2;
pub const NS_AUTO_ID: u16 = 3;
pub const NS_RFU: u16 = 4;

/// Numeric id of each role in the mock address space.
pub fn reader_node_id(role: Role) -> u32 {
    match role {
        Role::DeviceSet => 5001,
        Role::Rfu6xxRoot => 5002,
        Role::LastScanData => 6001,
        Role::DeviceStatus => 6002,
        Role::WriteTag => 7001,
        Role::ReadTag => 7002,
        Role::ScanStart => 7003,
        Role::ScanStop => 7004,
    }
}

/// Node of `role` as a resolved session addresses it.
pub fn reader_node(role: Role) -> NodeRef {
    reader_node_in(role, NS_RFU)
}

/// Like [`reader_node`] for a server that put the vendor model at `rfu_ns`.
pub fn reader_node_in(role: Role, rfu_ns: u16) -> NodeRef {
    let ns = if role == Role::DeviceSet { NS_DI } else { rfu_ns };
    NodeRef::new(ns, reader_node_id(role))
}

pub fn expected_address_table() -> AddressTable {
    AddressTable::new(
        NamespaceIndices {
            auto_id: NS_AUTO_ID,
            opc_di: NS_DI,
            rfu: NS_RFU,
        },
        Role::ALL.map(reader_node),
    )
}

/// A MockTransport serving the RFU6xx address space with the device Idle
/// and an empty `LastScanData`. Browse results carry some unrelated and
/// non-numeric entries, like a real server.
#[doc(hidden)]
pub fn mock_reader() -> MockTransport {
    mock_reader_with_rfu_ns(RFU_NAMESPACE_URI, NS_RFU)
}

/// The same address space with the vendor model registered as `rfu_uri`
/// at index `rfu_ns`.
#[doc(hidden)]
pub fn mock_reader_with_rfu_ns(rfu_uri: &str, rfu_ns: u16) -> MockTransport {
    let node = |role| reader_node_in(role, rfu_ns);
    let mut m = MockTransport::new();
    m.add_namespace("http://opcfoundation.org/UA/", 0);
    m.add_namespace(OPC_DI_NAMESPACE_URI, NS_DI);
    m.add_namespace(AUTO_ID_NAMESPACE_URI, NS_AUTO_ID);
    m.add_namespace(rfu_uri, rfu_ns);

    m.add_child(
        NodeRef::objects_folder(),
        BrowseEntry::numeric("Server", NodeRef::new(0, 2253)),
    );
    m.add_child(
        NodeRef::objects_folder(),
        BrowseEntry::numeric("DeviceSet", node(Role::DeviceSet)),
    );

    let device_set = node(Role::DeviceSet);
    m.add_child(
        device_set,
        BrowseEntry {
            browse_name: "RFU6xx".into(),
            namespace: rfu_ns,
            identifier: NodeIdentifier::String("RFU6xx".into()),
        },
    );
    m.add_child(
        device_set,
        BrowseEntry::numeric("RFU6xx", node(Role::Rfu6xxRoot)),
    );

    let root = node(Role::Rfu6xxRoot);
    m.add_child(
        root,
        BrowseEntry::numeric("DeviceManual", NodeRef::new(NS_DI, 6100)),
    );
    for role in Role::READER_CHILDREN {
        m.add_child(root, BrowseEntry::numeric(role.browse_name(), node(role)));
    }

    m.set_attribute(
        node(Role::DeviceStatus),
        Variant::Int32(DeviceStatus::Idle.as_i32()),
    );
    m.set_attribute(
        node(Role::LastScanData),
        Variant::String(String::new()),
    );
    m
}

/// Replace the reported device status.
pub fn set_status(mock: &mut MockTransport, status: DeviceStatus) {
    mock.set_attribute(
        reader_node(Role::DeviceStatus),
        Variant::Int32(status.as_i32()),
    );
}

/// Create and initialize a Device backed by `mock`.
#[doc(hidden)]
pub fn initialized_mock_device(mock: MockTransport) -> Result<Device<Initialized>> {
    Device::new_with_transport(Box::new(mock)).initialize()
}

/// Like [`initialized_mock_device`] but keeps a handle on the mock so the
/// test can inspect recorded traffic. Resolution traffic is cleared.
#[doc(hidden)]
pub fn shared_mock_device(
    mock: MockTransport,
) -> Result<(Rc<RefCell<MockTransport>>, Device<Initialized>)> {
    let shared = Rc::new(RefCell::new(mock));
    let device = Device::new_with_transport(Box::new(shared.clone())).initialize()?;
    {
        let mut m = shared.borrow_mut();
        m.browsed.clear();
        m.reads.clear();
        m.calls.clear();
    }
    Ok((shared, device))
}
