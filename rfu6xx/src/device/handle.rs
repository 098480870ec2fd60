// rfu6xx/src/device/handle.rs

use log::debug;

use crate::config::NamespaceUris;
use crate::device::operations;
use crate::protocol::Variant;
use crate::resolver::{self, AddressTable, Role};
use crate::transport::Transport;
use crate::types::{DeviceStatus, ScanParameters, TagAddress, TagReadResult};
use crate::{ReaderResponseCode, Result};

/// Type-state markers. An uninitialized device only knows which namespace
/// URIs to resolve; an initialized one owns the resolved addresses.
pub struct Uninitialized {
    namespaces: NamespaceUris,
}

pub struct Initialized {
    addresses: AddressTable,
}

/// Device handle that enforces address resolution at compile time.
pub struct Device<State = Uninitialized> {
    transport: Box<dyn Transport>,
    state: State,
}

impl Device<Uninitialized> {
    /// Create a Device from an already connected Transport.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            state: Uninitialized {
                namespaces: NamespaceUris::default(),
            },
        }
    }

    /// Override the namespace URIs resolved by [`Device::initialize`].
    pub fn with_namespaces(mut self, namespaces: NamespaceUris) -> Self {
        self.state.namespaces = namespaces;
        self
    }

    /// Resolve namespace indices and node ids. Any missing namespace or
    /// node fails the whole initialization.
    pub fn initialize(mut self) -> Result<Device<Initialized>> {
        let addresses = resolver::resolve_all(&mut *self.transport, &self.state.namespaces)?;
        Ok(Device::with_address_table(self.transport, addresses))
    }
}

impl Device<Initialized> {
    /// Build a session from addresses resolved earlier, e.g. by another
    /// session against the same server.
    pub fn with_address_table(transport: Box<dyn Transport>, addresses: AddressTable) -> Self {
        Self {
            transport,
            state: Initialized { addresses },
        }
    }

    pub fn address_table(&self) -> &AddressTable {
        &self.state.addresses
    }

    /// Read the reader's current `DeviceStatus` (an Int32 on the wire).
    pub fn read_device_status(&mut self) -> Result<DeviceStatus> {
        match self.read_value(Role::DeviceStatus)? {
            Variant::Int32(raw) => Ok(DeviceStatus::from_i32(raw)),
            other => Err(crate::Error::TypeMismatch {
                expected: "Int32",
                actual: other.type_name(),
            }),
        }
    }

    /// Read the id of the last scanned tag as reported in `LastScanData`.
    pub fn read_last_scan_data(&mut self) -> Result<String> {
        match self.read_value(Role::LastScanData)? {
            Variant::String(s) => Ok(s),
            other => Err(crate::Error::TypeMismatch {
                expected: "String",
                actual: other.type_name(),
            }),
        }
    }

    /// Start scanning. The device must currently be Idle.
    pub fn start_scan(&mut self, params: &ScanParameters) -> Result<()> {
        operations::start_scan(self, params)
    }

    /// Stop scanning. The device must currently be Scanning.
    pub fn stop_scan(&mut self) -> Result<()> {
        operations::stop_scan(self)
    }

    /// Read `address.length` bytes of tag memory from the tag with hex id `id`.
    pub fn read_tag(&mut self, id: &str, address: TagAddress) -> Result<TagReadResult> {
        operations::read_tag(self, id, address)
    }

    /// Write `data` into tag memory at `address.bank`/`address.offset`.
    pub fn write_tag(
        &mut self,
        id: &str,
        address: TagAddress,
        data: &str,
    ) -> Result<ReaderResponseCode> {
        operations::write_tag(self, id, address, data)
    }

    pub(crate) fn read_value(&mut self, role: Role) -> Result<Variant> {
        let node = self.state.addresses.node(role);
        self.transport.read_attribute(node)
    }

    /// Call a method of the RFU6xx object.
    pub(crate) fn call_method(&mut self, method: Role, params: &[Variant]) -> Result<Vec<Variant>> {
        let object = self.state.addresses.rfu6xx_root();
        let method_node = self.state.addresses.node(method);
        debug!(
            "calling {} ({}) with {} argument(s)",
            method.browse_name(),
            method_node,
            params.len()
        );
        self.transport.call(object, method_node, params)
    }
}
