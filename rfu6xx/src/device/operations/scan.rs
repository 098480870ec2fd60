use log::{debug, warn};

use crate::device::{Device, Initialized};
use crate::protocol::ExtensionObject;
use crate::resolver::Role;
use crate::types::{DeviceStatus, ScanParameters};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Read the status fresh from the device and require `expected`.
fn require_status(
    device: &mut Device<Initialized>,
    expected: DeviceStatus,
    operation: &'static str,
) -> Result<()> {
    let status = device.read_device_status()?;
    if status != expected {
        warn!(
            "{} was called, but the device is in status {}",
            operation, status
        );
        return Err(Error::InvalidState { operation, status });
    }
    Ok(())
}

/// Call ScanStart with the encoded scan parameters. Output arguments are
/// ignored.
pub fn start_scan(device: &mut Device<Initialized>, params: &ScanParameters) -> Result<()> {
    require_status(device, DeviceStatus::Idle, "start scan")?;

    let auto_id = device.address_table().namespaces().auto_id;
    let eo = ExtensionObject::scan_start(auto_id, params);
    debug!("ScanStart body: {}", bytes_to_hex_spaced(&eo.body));

    device.call_method(Role::ScanStart, &[eo.into()])?;
    Ok(())
}

/// Call ScanStop without arguments.
pub fn stop_scan(device: &mut Device<Initialized>) -> Result<()> {
    require_status(device, DeviceStatus::Scanning, "stop scan")?;
    device.call_method(Role::ScanStop, &[])?;
    Ok(())
}
