// rfu6xx/src/protocol/value.rs

use crate::constants::{START_SCAN_TYPE_ID, TAG_ID_TYPE_ID};
use crate::protocol::payload;
use crate::types::{NodeRef, ScanParameters, TagId};

/// Extension object in byte-string encoding: a type id plus an opaque body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionObject {
    pub type_id: NodeRef,
    pub body: Vec<u8>,
}

impl ExtensionObject {
    pub fn new(type_id: NodeRef, body: Vec<u8>) -> Self {
        Self { type_id, body }
    }

    /// ScanStart argument structure, tagged with the AutoID type id 3010.
    pub fn scan_start(auto_id_namespace: u16, params: &ScanParameters) -> Self {
        Self::new(
            NodeRef::new(auto_id_namespace, START_SCAN_TYPE_ID),
            payload::build_scan_start_payload(params),
        )
    }

    /// Tag identifier structure, tagged with the AutoID type id 5030.
    pub fn tag_id(auto_id_namespace: u16, id: &TagId) -> Self {
        Self::new(
            NodeRef::new(auto_id_namespace, TAG_ID_TYPE_ID),
            payload::build_tag_id_payload(id),
        )
    }
}

/// Scalar values exchanged with the server (attribute values, call
/// arguments and call outputs).
#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    Boolean(bool),
    Int16(i16),
    Int32(i32),
    UInt32(u32),
    Double(f64),
    String(String),
    ByteString(Vec<u8>),
    ExtensionObject(ExtensionObject),
}

impl Variant {
    /// Name of the built-in type, used in `TypeMismatch` errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "Boolean",
            Self::Int16(_) => "Int16",
            Self::Int32(_) => "Int32",
            Self::UInt32(_) => "UInt32",
            Self::Double(_) => "Double",
            Self::String(_) => "String",
            Self::ByteString(_) => "ByteString",
            Self::ExtensionObject(_) => "ExtensionObject",
        }
    }
}

impl From<ExtensionObject> for Variant {
    fn from(eo: ExtensionObject) -> Self {
        Self::ExtensionObject(eo)
    }
}

impl From<&str> for Variant {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_start_extension_object_is_tagged() {
        let eo = ExtensionObject::scan_start(4, &ScanParameters::new(0.0, 0, false));
        assert_eq!(eo.type_id, NodeRef::new(4, 3010));
        assert_eq!(eo.body.len(), crate::constants::SCAN_START_PAYLOAD_LEN);
    }

    #[test]
    fn tag_id_extension_object_is_tagged() {
        let id = TagId::parse("affe").unwrap();
        let eo = ExtensionObject::tag_id(4, &id);
        assert_eq!(eo.type_id, NodeRef::new(4, 5030));
        assert_eq!(eo.body, vec![2, 0, 0, 0, 2, 0, 0, 0, 0xaf, 0xfe]);
    }

    #[test]
    fn variant_conversions() {
        assert_eq!(Variant::from("x"), Variant::String("x".into()));
        assert_eq!(Variant::ByteString(vec![]).type_name(), "ByteString");
        let eo = ExtensionObject::new(NodeRef::new(3, 5030), vec![]);
        assert_eq!(Variant::from(eo).type_name(), "ExtensionObject");
    }
}
