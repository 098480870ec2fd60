// rfu6xx/src/resolver/address.rs

use crate::constants::browse_names;
use crate::types::NodeRef;

/// Namespace indices the session needs, as assigned by this server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamespaceIndices {
    pub auto_id: u16,
    pub opc_di: u16,
    pub rfu: u16,
}

/// Logical roles of the nodes a session addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    DeviceSet,
    Rfu6xxRoot,
    LastScanData,
    WriteTag,
    ReadTag,
    ScanStart,
    ScanStop,
    DeviceStatus,
}

impl Role {
    pub const COUNT: usize = 8;

    pub const ALL: [Role; Role::COUNT] = [
        Role::DeviceSet,
        Role::Rfu6xxRoot,
        Role::LastScanData,
        Role::WriteTag,
        Role::ReadTag,
        Role::ScanStart,
        Role::ScanStop,
        Role::DeviceStatus,
    ];

    /// Roles found directly below the `RFU6xx` object, in lookup order.
    pub const READER_CHILDREN: [Role; 6] = [
        Role::LastScanData,
        Role::WriteTag,
        Role::ReadTag,
        Role::ScanStart,
        Role::ScanStop,
        Role::DeviceStatus,
    ];

    pub fn browse_name(&self) -> &'static str {
        match self {
            Role::DeviceSet => browse_names::DEVICE_SET,
            Role::Rfu6xxRoot => browse_names::RFU6XX,
            Role::LastScanData => browse_names::LAST_SCAN_DATA,
            Role::WriteTag => browse_names::WRITE_TAG,
            Role::ReadTag => browse_names::READ_TAG,
            Role::ScanStart => browse_names::SCAN_START,
            Role::ScanStop => browse_names::SCAN_STOP,
            Role::DeviceStatus => browse_names::DEVICE_STATUS,
        }
    }
}

/// Fully resolved addresses of one reader. Every role is populated by
/// construction; the table never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressTable {
    namespaces: NamespaceIndices,
    nodes: [NodeRef; Role::COUNT],
}

impl AddressTable {
    /// `nodes` is indexed in [`Role::ALL`] order.
    pub fn new(namespaces: NamespaceIndices, nodes: [NodeRef; Role::COUNT]) -> Self {
        Self { namespaces, nodes }
    }

    pub fn namespaces(&self) -> NamespaceIndices {
        self.namespaces
    }

    pub fn node(&self, role: Role) -> NodeRef {
        self.nodes[role as usize]
    }

    pub fn rfu6xx_root(&self) -> NodeRef {
        self.node(Role::Rfu6xxRoot)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, NodeRef)> + '_ {
        Role::ALL.iter().map(move |&r| (r, self.node(r)))
    }
}
