// rfu6xx/src/transport/opcua.rs
//! OPC UA client backend (requires the `opcua` feature).
//!
//! Wraps a synchronous `opcua` client session using security policy None
//! and an anonymous identity.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use opcua::client::prelude::{
    AttributeService, Client, ClientBuilder, IdentityToken, MethodService, Session, ViewService,
};
use opcua::crypto::SecurityPolicy;
use opcua::sync::RwLock;
use opcua::types::{
    AttributeId, BrowseDescription, BrowseDirection, BrowseResultMask, ByteString,
    CallMethodRequest, ExtensionObject as UaExtensionObject, ExtensionObjectEncoding, Identifier,
    MessageSecurityMode, NodeId, QualifiedName, ReadValueId, ReferenceDescription, StatusCode,
    TimestampsToReturn, UAString, UserTokenPolicy, Variant as UaVariant,
};

use crate::protocol::{ExtensionObject, Variant};
use crate::transport::traits::{Connector, Transport};
use crate::types::{BrowseEntry, NodeIdentifier, NodeRef};
use crate::{Error, Result};

/// `Server_NamespaceArray` variable in namespace 0.
const NAMESPACE_ARRAY_ID: u32 = 2255;

const APPLICATION_NAME: &str = "rfu6xx client";
const APPLICATION_URI: &str = "urn:rfu6xx:client";

fn service_error(service: &str, status: StatusCode) -> Error {
    if status == StatusCode::BadTimeout {
        Error::Timeout
    } else {
        Error::Transport(format!("{} failed: {}", service, status))
    }
}

// A null UA string reads as empty.
fn ua_string(s: &UAString) -> String {
    s.value().clone().unwrap_or_default()
}

fn to_node_id(node: NodeRef) -> NodeId {
    NodeId::new(node.namespace(), node.identifier())
}

fn to_ua_variant(value: &Variant) -> UaVariant {
    match value {
        Variant::Boolean(v) => UaVariant::Boolean(*v),
        Variant::Int16(v) => UaVariant::Int16(*v),
        Variant::Int32(v) => UaVariant::Int32(*v),
        Variant::UInt32(v) => UaVariant::UInt32(*v),
        Variant::Double(v) => UaVariant::Double(*v),
        Variant::String(s) => UaVariant::String(UAString::from(s.as_str())),
        Variant::ByteString(b) => UaVariant::ByteString(ByteString::from(b.clone())),
        Variant::ExtensionObject(eo) => UaVariant::ExtensionObject(Box::new(UaExtensionObject {
            node_id: to_node_id(eo.type_id),
            body: ExtensionObjectEncoding::ByteString(ByteString::from(eo.body.clone())),
        })),
    }
}

fn from_ua_variant(value: UaVariant) -> Result<Variant> {
    match value {
        UaVariant::Boolean(v) => Ok(Variant::Boolean(v)),
        UaVariant::Int16(v) => Ok(Variant::Int16(v)),
        UaVariant::Int32(v) => Ok(Variant::Int32(v)),
        UaVariant::UInt32(v) => Ok(Variant::UInt32(v)),
        UaVariant::Double(v) => Ok(Variant::Double(v)),
        UaVariant::String(s) => Ok(Variant::String(ua_string(&s))),
        UaVariant::ByteString(b) => Ok(Variant::ByteString(b.value.unwrap_or_default())),
        UaVariant::ExtensionObject(eo) => {
            let type_id = match eo.node_id.identifier {
                Identifier::Numeric(id) => NodeRef::new(eo.node_id.namespace, id),
                _ => {
                    return Err(Error::PayloadFormat(format!(
                        "extension object type id {} is not numeric",
                        eo.node_id
                    )));
                }
            };
            match eo.body {
                ExtensionObjectEncoding::ByteString(b) => Ok(Variant::ExtensionObject(
                    ExtensionObject::new(type_id, b.value.unwrap_or_default()),
                )),
                _ => Err(Error::PayloadFormat(format!(
                    "extension object {} is not byte-string encoded",
                    type_id
                ))),
            }
        }
        other => Err(Error::Transport(format!(
            "unsupported value type {:?}",
            other.type_id()
        ))),
    }
}

fn to_browse_entry(reference: ReferenceDescription) -> BrowseEntry {
    let node_id = reference.node_id.node_id;
    let identifier = match node_id.identifier {
        Identifier::Numeric(id) => NodeIdentifier::Numeric(id),
        Identifier::String(s) => NodeIdentifier::String(ua_string(&s)),
        Identifier::Guid(g) => NodeIdentifier::Guid(*g.as_bytes()),
        Identifier::ByteString(b) => NodeIdentifier::Opaque(b.value.unwrap_or_default()),
    };
    BrowseEntry {
        browse_name: ua_string(&reference.browse_name.name),
        namespace: node_id.namespace,
        identifier,
    }
}

/// Transport over an established OPC UA session.
pub struct OpcUaTransport {
    // The session is only valid while its client is alive.
    _client: Client,
    session: Arc<RwLock<Session>>,
}

impl OpcUaTransport {
    fn read_value(&mut self, node_id: NodeId) -> Result<UaVariant> {
        let request = ReadValueId {
            node_id,
            attribute_id: AttributeId::Value as u32,
            index_range: UAString::null(),
            data_encoding: QualifiedName::null(),
        };
        let values = self
            .session
            .write()
            .read(&[request], TimestampsToReturn::Neither, 0.0)
            .map_err(|sc| service_error("Read", sc))?;

        let value = values
            .into_iter()
            .next()
            .ok_or_else(|| Error::Transport("Read returned no result".into()))?;
        if let Some(status) = value.status.filter(|s| s.is_bad()) {
            return Err(service_error("Read", status));
        }
        value
            .value
            .ok_or_else(|| Error::Transport("Read returned no value".into()))
    }
}

impl Transport for OpcUaTransport {
    fn namespace_index(&mut self, uri: &str) -> Result<Option<u16>> {
        let array = match self.read_value(NodeId::new(0, NAMESPACE_ARRAY_ID))? {
            UaVariant::Array(array) => array,
            other => {
                return Err(Error::TypeMismatch {
                    expected: "Array",
                    actual: from_ua_variant(other).map_or("unsupported", |v| v.type_name()),
                });
            }
        };
        let index = array.values.iter().position(|v| match v {
            UaVariant::String(s) => s.value().as_deref() == Some(uri),
            _ => false,
        });
        Ok(index.and_then(|i| u16::try_from(i).ok()))
    }

    fn browse_children(&mut self, node: NodeRef) -> Result<Vec<BrowseEntry>> {
        let description = BrowseDescription {
            node_id: to_node_id(node),
            browse_direction: BrowseDirection::Forward,
            // null reference type: follow every reference
            reference_type_id: NodeId::null(),
            include_subtypes: true,
            node_class_mask: 0,
            result_mask: BrowseResultMask::All as u32,
        };
        let results = self
            .session
            .write()
            .browse(&[description])
            .map_err(|sc| service_error("Browse", sc))?
            .unwrap_or_default();

        let result = results
            .into_iter()
            .next()
            .ok_or_else(|| Error::Transport(format!("Browse of {} returned no result", node)))?;
        if result.status_code.is_bad() {
            return Err(service_error("Browse", result.status_code));
        }
        if !result.continuation_point.is_null() {
            warn!("Browse of {} truncated by the server", node);
        }
        Ok(result
            .references
            .unwrap_or_default()
            .into_iter()
            .map(to_browse_entry)
            .collect())
    }

    fn read_attribute(&mut self, node: NodeRef) -> Result<Variant> {
        from_ua_variant(self.read_value(to_node_id(node))?)
    }

    fn call(
        &mut self,
        object: NodeRef,
        method: NodeRef,
        params: &[Variant],
    ) -> Result<Vec<Variant>> {
        let request = CallMethodRequest {
            object_id: to_node_id(object),
            method_id: to_node_id(method),
            input_arguments: Some(params.iter().map(to_ua_variant).collect()),
        };
        let result = self
            .session
            .write()
            .call(request)
            .map_err(|sc| service_error("Call", sc))?;
        if !result.status_code.is_good() {
            return Err(service_error("Call", result.status_code));
        }
        result
            .output_arguments
            .unwrap_or_default()
            .into_iter()
            .map(from_ua_variant)
            .collect()
    }
}

impl Drop for OpcUaTransport {
    fn drop(&mut self) {
        debug!("disconnecting OPC UA session");
        self.session.write().disconnect();
    }
}

/// Connects to an RFU6xx OPC UA server.
#[derive(Debug, Default)]
pub struct OpcUaConnector;

impl OpcUaConnector {
    pub fn new() -> Self {
        Self
    }
}

impl Connector for OpcUaConnector {
    fn connect(&self, url: &str, timeout: Duration) -> Result<Box<dyn Transport>> {
        // Request deadlines are enforced by the client stack itself.
        debug!("connecting to {} (request timeout {:?})", url, timeout);
        let mut client = ClientBuilder::new()
            .application_name(APPLICATION_NAME)
            .application_uri(APPLICATION_URI)
            .create_sample_keypair(false)
            .trust_server_certs(false)
            .session_retry_limit(0)
            .client()
            .ok_or_else(|| Error::Connect(format!("{}: invalid client configuration", url)))?;

        let endpoint = (
            url,
            SecurityPolicy::None.to_str(),
            MessageSecurityMode::None,
            UserTokenPolicy::anonymous(),
        );
        let session = client
            .connect_to_endpoint(endpoint, IdentityToken::Anonymous)
            .map_err(|sc| Error::Connect(format!("{}: {}", url, sc)))?;
        info!("Connected to {}", url);

        Ok(Box::new(OpcUaTransport {
            _client: client,
            session,
        }))
    }
}
