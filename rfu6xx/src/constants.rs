// rfu6xx/src/constants.rs
//! Information-model constants of the RFU6xx OPC UA server

/// Namespace URI of the OPC UA AutoID companion model.
pub const AUTO_ID_NAMESPACE_URI: &str = "http://opcfoundation.org/UA/AutoID/";

/// Namespace URI of the OPC UA Device Integration (DI) model.
pub const OPC_DI_NAMESPACE_URI: &str = "http://opcfoundation.org/UA/DI/";

/// Namespace URI of the SICK RFU6xx vendor model.
pub const RFU_NAMESPACE_URI: &str = "http://www.sick.com/RFU6xx/";

/// Namespace 0 (the OPC UA base namespace)
pub const BASE_NAMESPACE: u16 = 0;

/// Numeric identifier of the standard `Objects` folder in namespace 0.
pub const OBJECTS_FOLDER_ID: u32 = 85;

/// Extension object type id (AutoID namespace) of the ScanStart arguments.
pub const START_SCAN_TYPE_ID: u32 = 3010;

/// Extension object type id (AutoID namespace) of a tag identifier.
pub const TAG_ID_TYPE_ID: u32 = 5030;

/// Code type passed to ReadTag/WriteTag.
pub const CODE_TYPE_RAW_STRING: &str = "RAW:STRING";

/// Leading tag of the Tag-ID payload header.
pub const TAG_ID_HEADER_TAG: u32 = 2;

/// Tag-ID payload header: tag(4) + length(4)
pub const TAG_ID_HEADER_LEN: usize = 8;

/// Scan-Start payload: reserved(4) + duration(8) + cycle(4) + flag(1)
pub const SCAN_START_PAYLOAD_LEN: usize = 17;

/// Browse names walked while resolving the address table.
pub mod browse_names {
    pub const DEVICE_SET: &str = "DeviceSet";
    pub const RFU6XX: &str = "RFU6xx";
    pub const LAST_SCAN_DATA: &str = "LastScanData";
    pub const WRITE_TAG: &str = "WriteTag";
    pub const READ_TAG: &str = "ReadTag";
    pub const SCAN_START: &str = "ScanStart";
    pub const SCAN_STOP: &str = "ScanStop";
    pub const DEVICE_STATUS: &str = "DeviceStatus";
}
