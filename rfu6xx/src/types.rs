// rfu6xx/src/types.rs

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use derive_more::Display;

use crate::Error;

/// Numeric node id: (namespace index, numeric identifier)
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "ns={};i={}", namespace, identifier)]
pub struct NodeRef {
    namespace: u16,
    identifier: u32,
}

impl NodeRef {
    pub const fn new(namespace: u16, identifier: u32) -> Self {
        Self {
            namespace,
            identifier,
        }
    }

    /// `Objects` folder of namespace 0, the root of every browse walk.
    pub const fn objects_folder() -> Self {
        Self::new(
            crate::constants::BASE_NAMESPACE,
            crate::constants::OBJECTS_FOLDER_ID,
        )
    }

    pub fn namespace(&self) -> u16 {
        self.namespace
    }

    pub fn identifier(&self) -> u32 {
        self.identifier
    }

    /// Same identifier, qualified with another namespace index.
    pub fn in_namespace(self, namespace: u16) -> Self {
        Self::new(namespace, self.identifier)
    }
}

/// Identifier part of a browsed node id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeIdentifier {
    Numeric(u32),
    String(String),
    Guid([u8; 16]),
    Opaque(Vec<u8>),
}

/// One child reference returned by a browse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseEntry {
    pub browse_name: String,
    pub namespace: u16,
    pub identifier: NodeIdentifier,
}

impl BrowseEntry {
    pub fn numeric(browse_name: impl Into<String>, node: NodeRef) -> Self {
        Self {
            browse_name: browse_name.into(),
            namespace: node.namespace(),
            identifier: NodeIdentifier::Numeric(node.identifier()),
        }
    }

    /// The child as a `NodeRef`, or `None` for non-numeric identifiers.
    pub fn node_ref(&self) -> Option<NodeRef> {
        match self.identifier {
            NodeIdentifier::Numeric(id) => Some(NodeRef::new(self.namespace, id)),
            _ => None,
        }
    }
}

/// Operating state reported by the reader's `DeviceStatus` variable
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum DeviceStatus {
    Idle,
    Scanning,
    Busy,
    #[display(fmt = "Unknown({})", _0)]
    Unknown(i32),
}

impl DeviceStatus {
    pub fn from_i32(raw: i32) -> Self {
        match raw {
            0 => Self::Idle,
            2 => Self::Scanning,
            3 => Self::Busy,
            other => Self::Unknown(other),
        }
    }

    pub fn as_i32(&self) -> i32 {
        match self {
            Self::Idle => 0,
            Self::Scanning => 2,
            Self::Busy => 3,
            Self::Unknown(raw) => *raw,
        }
    }
}

/// Result code of the reader logic, carried inside a successful call result
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ReaderResponseCode {
    Success,
    RegionNotFound,
    ReadOutOfRange,
    ReadError,
    WriteError,
    NotSupportedByDevice,
    #[display(fmt = "Other({})", _0)]
    Other(u32),
}

impl ReaderResponseCode {
    pub fn from_u32(code: u32) -> Self {
        match code {
            0 => Self::Success,
            5 => Self::RegionNotFound,
            7 => Self::ReadOutOfRange,
            10 => Self::ReadError,
            14 => Self::WriteError,
            15 => Self::NotSupportedByDevice,
            other => Self::Other(other),
        }
    }

    pub fn as_u32(&self) -> u32 {
        match self {
            Self::Success => 0,
            Self::RegionNotFound => 5,
            Self::ReadOutOfRange => 7,
            Self::ReadError => 10,
            Self::WriteError => 14,
            Self::NotSupportedByDevice => 15,
            Self::Other(code) => *code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Turn a logical failure into `Error::Reader` so callers can use `?`.
    pub fn ensure_success(self) -> crate::Result<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(Error::Reader(self))
        }
    }
}

/// Tag identifier, parsed from an even-length hex string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagId(Vec<u8>);

impl TagId {
    /// Parse a case-insensitive hex string.
    pub fn parse(hex: &str) -> crate::Result<Self> {
        crate::utils::parse_hex(hex).map(Self)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex form.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for TagId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for TagId {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

/// Arguments of the ScanStart method
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct ScanParameters {
    /// Scan duration in seconds
    pub duration: f64,
    pub cycle: i32,
    pub data_available: bool,
}

impl ScanParameters {
    pub fn new(duration: f64, cycle: i32, data_available: bool) -> Self {
        Self {
            duration,
            cycle,
            data_available,
        }
    }
}

/// Tag memory region addressed by ReadTag/WriteTag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct TagAddress {
    pub bank: i32,
    pub offset: i32,
    /// Number of bytes to read; ignored by writes.
    pub length: i32,
}

impl TagAddress {
    pub fn new(bank: i32, offset: i32) -> Self {
        Self {
            bank,
            offset,
            length: 0,
        }
    }

    pub fn with_length(mut self, length: i32) -> Self {
        self.length = length;
        self
    }
}

/// Output of a ReadTag call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagReadResult {
    pub data: Vec<u8>,
    pub response: ReaderResponseCode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ref_display_and_requalify() {
        let n = NodeRef::new(0, 5001);
        assert_eq!(n.to_string(), "ns=0;i=5001");
        let q = n.in_namespace(4);
        assert_eq!(q, NodeRef::new(4, 5001));
        assert_ne!(n, q);
    }

    #[test]
    fn browse_entry_only_numeric_converts() {
        let e = BrowseEntry::numeric("ScanStart", NodeRef::new(3, 7011));
        assert_eq!(e.node_ref(), Some(NodeRef::new(3, 7011)));

        let s = BrowseEntry {
            browse_name: "ScanStart".into(),
            namespace: 3,
            identifier: NodeIdentifier::String("ScanStart".into()),
        };
        assert_eq!(s.node_ref(), None);
    }

    #[test]
    fn device_status_mapping() {
        assert_eq!(DeviceStatus::from_i32(0), DeviceStatus::Idle);
        assert_eq!(DeviceStatus::from_i32(2), DeviceStatus::Scanning);
        assert_eq!(DeviceStatus::from_i32(3), DeviceStatus::Busy);
        assert_eq!(DeviceStatus::from_i32(1), DeviceStatus::Unknown(1));
        assert_eq!(DeviceStatus::Unknown(1).to_string(), "Unknown(1)");
        assert_eq!(DeviceStatus::Busy.as_i32(), 3);
    }

    #[test]
    fn reader_response_code_mapping() {
        for code in [0u32, 5, 7, 10, 14, 15, 99] {
            assert_eq!(ReaderResponseCode::from_u32(code).as_u32(), code);
        }
        assert_eq!(
            ReaderResponseCode::from_u32(99),
            ReaderResponseCode::Other(99)
        );
        assert!(ReaderResponseCode::Success.ensure_success().is_ok());
        assert!(matches!(
            ReaderResponseCode::WriteError.ensure_success(),
            Err(Error::Reader(ReaderResponseCode::WriteError))
        ));
    }

    #[test]
    fn tag_id_parse_normalizes_case() {
        let id: TagId = "AffE01".parse().unwrap();
        assert_eq!(id.as_bytes(), &[0xaf, 0xfe, 0x01]);
        assert_eq!(id.to_string(), "affe01");
        assert_eq!(id.len(), 3);
    }

    #[test]
    fn tag_id_rejects_malformed() {
        assert!(matches!(TagId::parse("abc"), Err(Error::MalformedHex(_))));
        assert!(matches!(TagId::try_from("zz"), Err(Error::MalformedHex(_))));
    }

    #[test]
    fn tag_address_builder() {
        let a = TagAddress::new(3, 0).with_length(16);
        assert_eq!(
            a,
            TagAddress {
                bank: 3,
                offset: 0,
                length: 16
            }
        );
    }
}
