// rfu6xx/src/transport/traits.rs

use std::time::Duration;

use crate::Result;
use crate::protocol::Variant;
use crate::types::{BrowseEntry, NodeRef};

/// Transport trait abstracts the OPC UA client stack away from the
/// resolver and device logic. Every call blocks until the server answers
/// or the transport gives up.
pub trait Transport {
    /// Look up a namespace index by URI. `Ok(None)` means the server's
    /// namespace array has no such entry.
    fn namespace_index(&mut self, uri: &str) -> Result<Option<u16>>;

    /// List the forward references of `node`, in server order.
    fn browse_children(&mut self, node: NodeRef) -> Result<Vec<BrowseEntry>>;

    /// Read the Value attribute of `node`.
    fn read_attribute(&mut self, node: NodeRef) -> Result<Variant>;

    /// Invoke `method` on `object` and return its output arguments.
    fn call(&mut self, object: NodeRef, method: NodeRef, params: &[Variant])
    -> Result<Vec<Variant>>;
}

/// Opens transports to an endpoint URL such as `opc.tcp://host:4840`.
pub trait Connector {
    fn connect(&self, url: &str, timeout: Duration) -> Result<Box<dyn Transport>>;
}
