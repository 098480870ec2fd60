#[path = "../common/mod.rs"]
mod common;

use rfu6xx::device::{Device, DeviceBuilder};
use rfu6xx::test_support;
use rfu6xx::transport::{MockConnector, Transport};
use rfu6xx::config::SessionConfig;

#[test]
fn initialize_transitions_and_exposes_addresses() {
    let boxed: Box<dyn Transport> = Box::new(test_support::mock_reader());
    let device = Device::new_with_transport(boxed);

    // Transition to initialized
    let initialized = device.initialize().unwrap();
    assert_eq!(
        initialized.address_table(),
        &test_support::expected_address_table()
    );
}

#[test]
fn connect_then_initialize() {
    let connector = MockConnector::new(test_support::mock_reader());
    let mut dev = DeviceBuilder::new()
        .with_config(SessionConfig::default())
        .connect(&connector)
        .unwrap()
        .build_uninitialized()
        .unwrap()
        .initialize()
        .unwrap();

    assert_eq!(connector.connected.borrow()[0].0, "opc.tcp://localhost:4840");
    assert!(dev.read_device_status().is_ok());
}
