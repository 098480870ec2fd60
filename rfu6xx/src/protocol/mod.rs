// rfu6xx/src/protocol/mod.rs

pub mod payload;
pub mod primitives;
pub mod value;

pub use payload::{
    build_scan_start_payload, build_tag_id_payload, decode_scan_start_payload,
    decode_tag_id_payload,
};
pub use primitives::{ByteWriter, bits_to_double, double_to_bits};
pub use value::{ExtensionObject, Variant};
