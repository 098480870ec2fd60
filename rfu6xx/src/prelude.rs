// rfu6xx/src/prelude.rs

pub use crate::config::{NamespaceUris, SessionConfig};
pub use crate::device::{Device, DeviceBuilder, Initialized, Uninitialized};
pub use crate::protocol::{ExtensionObject, Variant};
pub use crate::resolver::{AddressTable, NamespaceIndices, Role};
pub use crate::transport::{Connector, Transport};
pub use crate::{
    BrowseEntry, DeviceStatus, Error, NodeIdentifier, NodeRef, ReaderResponseCode, Result,
    ScanParameters, TagAddress, TagId, TagReadResult,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
