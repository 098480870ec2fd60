#[path = "../common/mod.rs"]
mod common;

use rfu6xx::config::NamespaceUris;
use rfu6xx::resolver::{Role, resolve_all};
use rfu6xx::test_support;
use rfu6xx::types::NodeRef;
use rfu6xx::Error;

#[test]
fn resolves_standard_address_space() {
    let mut m = test_support::mock_reader();
    let table = resolve_all(&mut m, &NamespaceUris::default()).unwrap();
    for (role, node) in table.iter() {
        assert_eq!(node, test_support::reader_node(role), "{:?}", role);
    }
}

#[test]
fn every_missing_role_aborts_resolution() {
    for missing in Role::ALL {
        let mut m = test_support::mock_reader();
        for entries in m.children.values_mut() {
            entries.retain(|e| e.browse_name != missing.browse_name());
        }

        match resolve_all(&mut m, &NamespaceUris::default()) {
            Err(Error::NodeNotFound { name, .. }) => assert_eq!(name, missing.browse_name()),
            other => panic!("{:?} missing, expected NodeNotFound, got: {:?}", missing, other),
        }
    }
}

#[test]
fn every_missing_namespace_aborts_resolution() {
    let defaults = NamespaceUris::default();
    for uri in [&defaults.auto_id, &defaults.opc_di, &defaults.rfu] {
        let mut m = test_support::mock_reader();
        m.namespaces.remove(uri.as_str());
        match resolve_all(&mut m, &defaults) {
            Err(Error::NamespaceNotFound(u)) => assert_eq!(&u, uri),
            other => panic!("expected NamespaceNotFound, got: {:?}", other),
        }
    }
}

#[test]
fn device_set_is_addressed_in_di_namespace() {
    let mut m = test_support::mock_reader();
    let table = resolve_all(&mut m, &NamespaceUris::default()).unwrap();
    assert_eq!(
        table.node(Role::DeviceSet),
        NodeRef::new(test_support::NS_DI, 5001)
    );
    // the RFU6xx object is browsed through the DI-qualified DeviceSet
    assert!(m.browsed.contains(&table.node(Role::DeviceSet)));
}
