#[path = "../common/mod.rs"]
mod common;

use rfu6xx::test_support;
use rfu6xx::types::{DeviceStatus, ScanParameters};
use rfu6xx::Error;

#[test]
fn start_scan_while_scanning_issues_no_call() {
    let m = common::reader_with_statuses(&[DeviceStatus::Scanning]);
    let (shared, mut dev) = test_support::shared_mock_device(m).unwrap();

    let err = dev.start_scan(&ScanParameters::new(1.0, 1, false)).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidState {
            status: DeviceStatus::Scanning,
            ..
        }
    ));
    assert!(shared.borrow().calls.is_empty());
    assert_eq!(shared.borrow().reads.len(), 1);
}

#[test]
fn state_change_between_calls_is_observed() {
    // Another client starts a scan behind our back: Idle, then Scanning.
    let mut m = common::reader_with_statuses(&[DeviceStatus::Idle, DeviceStatus::Scanning]);
    m.push_call_response(vec![]);
    let (shared, mut dev) = test_support::shared_mock_device(m).unwrap();

    assert_eq!(dev.read_device_status().unwrap(), DeviceStatus::Idle);
    assert!(matches!(
        dev.start_scan(&ScanParameters::default()),
        Err(Error::InvalidState { .. })
    ));
    assert!(shared.borrow().calls.is_empty());
}

#[test]
fn busy_device_rejects_both_scan_calls() {
    let m = common::reader_with_statuses(&[DeviceStatus::Busy]);
    let (shared, mut dev) = test_support::shared_mock_device(m).unwrap();

    assert!(dev.start_scan(&ScanParameters::default()).is_err());
    assert!(dev.stop_scan().is_err());
    assert!(shared.borrow().calls.is_empty());
}
