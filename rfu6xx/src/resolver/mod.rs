// rfu6xx/src/resolver/mod.rs
//! Node resolution: turns the reader's browse names into node ids.
//!
//! Node ids of the RFU6xx model are assigned per server instance, so a
//! session walks `Objects -> DeviceSet -> RFU6xx -> {methods, variables}`
//! once at start-up and keeps the result in an [`AddressTable`].

mod address;

pub use address::{AddressTable, NamespaceIndices, Role};

use log::{debug, error, info};

use crate::config::NamespaceUris;
use crate::transport::Transport;
use crate::types::NodeRef;
use crate::{Error, Result};

/// Look up a namespace index by URI.
pub fn resolve_namespace_index(transport: &mut dyn Transport, uri: &str) -> Result<u16> {
    let index = transport
        .namespace_index(uri)?
        .ok_or_else(|| Error::NamespaceNotFound(uri.to_string()))?;
    info!("Namespace index {}: {}", uri, index);
    Ok(index)
}

/// Find the first numeric-id child of `parent` whose browse name equals
/// `name` exactly. Children with string/guid/opaque ids never match.
pub fn resolve_child_by_name(
    transport: &mut dyn Transport,
    parent: NodeRef,
    name: &str,
) -> Result<NodeRef> {
    transport
        .browse_children(parent)?
        .iter()
        .filter(|entry| entry.browse_name == name)
        .find_map(|entry| entry.node_ref())
        .ok_or_else(|| Error::NodeNotFound {
            parent,
            name: name.to_string(),
        })
}

/// Resolve all three namespace indices, AutoID first.
pub fn resolve_namespaces(
    transport: &mut dyn Transport,
    uris: &NamespaceUris,
) -> Result<NamespaceIndices> {
    Ok(NamespaceIndices {
        auto_id: resolve_namespace_index(transport, &uris.auto_id)?,
        opc_di: resolve_namespace_index(transport, &uris.opc_di)?,
        rfu: resolve_namespace_index(transport, &uris.rfu)?,
    })
}

// One step of the walk: find `role` below `parent` and qualify the result
// with the namespace of that hierarchy level.
fn resolve_role(
    transport: &mut dyn Transport,
    parent: NodeRef,
    role: Role,
    namespace: u16,
) -> Result<NodeRef> {
    let found = resolve_child_by_name(transport, parent, role.browse_name())?;
    if found.namespace() != namespace {
        debug!(
            "{} reported as {}, addressing it in namespace {}",
            role.browse_name(),
            found,
            namespace
        );
    }
    let node = found.in_namespace(namespace);
    info!("Node id {}: {}", role.browse_name(), node);
    Ok(node)
}

/// Resolve the complete address table. The first failure aborts the walk;
/// no partially resolved table is ever returned.
pub fn resolve_all(transport: &mut dyn Transport, uris: &NamespaceUris) -> Result<AddressTable> {
    walk(transport, uris).inspect_err(|e| error!("Init failed: {}", e))
}

fn walk(transport: &mut dyn Transport, uris: &NamespaceUris) -> Result<AddressTable> {
    let namespaces = resolve_namespaces(transport, uris)?;

    let device_set = resolve_role(
        transport,
        NodeRef::objects_folder(),
        Role::DeviceSet,
        namespaces.opc_di,
    )?;
    let root = resolve_role(transport, device_set, Role::Rfu6xxRoot, namespaces.rfu)?;

    let mut nodes = [root; Role::COUNT];
    nodes[Role::DeviceSet as usize] = device_set;
    for role in Role::READER_CHILDREN {
        nodes[role as usize] = resolve_role(transport, root, role, namespaces.rfu)?;
    }

    Ok(AddressTable::new(namespaces, nodes))
}
