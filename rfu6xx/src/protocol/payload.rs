// rfu6xx/src/protocol/payload.rs

use crate::constants::{SCAN_START_PAYLOAD_LEN, TAG_ID_HEADER_LEN, TAG_ID_HEADER_TAG};
use crate::protocol::primitives::{ByteWriter, bits_to_double, double_to_bits};
use crate::types::{ScanParameters, TagId};
use crate::{Error, Result};

/// Encode the ScanStart argument body.
/// Layout: reserved(4, zero) + duration bits(8) + cycle(4) + data_available(1)
/// All multi-byte fields little-endian.
pub fn build_scan_start_payload(params: &ScanParameters) -> Vec<u8> {
    let mut w = ByteWriter::with_capacity(SCAN_START_PAYLOAD_LEN);
    w.append_u32_le(0)
        .append_u64_le(double_to_bits(params.duration))
        .append_i32_le(params.cycle)
        .append_u8(u8::from(params.data_available));
    w.into_bytes()
}

/// Encode a tag identifier body.
/// Layout: tag(4) = 2 + id length(4) + raw id bytes(N)
pub fn build_tag_id_payload(id: &TagId) -> Vec<u8> {
    let raw = id.as_bytes();
    let mut w = ByteWriter::with_capacity(TAG_ID_HEADER_LEN + raw.len());
    w.append_u32_le(TAG_ID_HEADER_TAG)
        .append_u32_le(raw.len() as u32)
        .append_bytes(raw);
    debug_assert_eq!(w.len(), TAG_ID_HEADER_LEN + raw.len());
    w.into_bytes()
}

fn read_u32_le(bytes: &[u8], at: usize) -> u32 {
    let mut arr = [0u8; 4];
    arr.copy_from_slice(&bytes[at..at + 4]);
    u32::from_le_bytes(arr)
}

/// Decode a ScanStart argument body produced by [`build_scan_start_payload`].
pub fn decode_scan_start_payload(bytes: &[u8]) -> Result<ScanParameters> {
    if bytes.len() != SCAN_START_PAYLOAD_LEN {
        return Err(Error::InvalidLength {
            expected: SCAN_START_PAYLOAD_LEN,
            actual: bytes.len(),
        });
    }

    let reserved = read_u32_le(bytes, 0);
    if reserved != 0 {
        return Err(Error::PayloadFormat(format!(
            "reserved field is {:#010x}, expected 0",
            reserved
        )));
    }

    let mut bits = [0u8; 8];
    bits.copy_from_slice(&bytes[4..12]);

    Ok(ScanParameters {
        duration: bits_to_double(u64::from_le_bytes(bits)),
        cycle: read_u32_le(bytes, 12) as i32,
        data_available: bytes[16] != 0,
    })
}

/// Decode a tag identifier body produced by [`build_tag_id_payload`].
pub fn decode_tag_id_payload(bytes: &[u8]) -> Result<TagId> {
    if bytes.len() < TAG_ID_HEADER_LEN {
        return Err(Error::InvalidLength {
            expected: TAG_ID_HEADER_LEN,
            actual: bytes.len(),
        });
    }

    let tag = read_u32_le(bytes, 0);
    if tag != TAG_ID_HEADER_TAG {
        return Err(Error::PayloadFormat(format!(
            "tag id header tag is {}, expected {}",
            tag, TAG_ID_HEADER_TAG
        )));
    }

    let declared = read_u32_le(bytes, 4) as usize;
    let raw = &bytes[TAG_ID_HEADER_LEN..];
    if raw.len() != declared {
        return Err(Error::InvalidLength {
            expected: declared.saturating_add(TAG_ID_HEADER_LEN),
            actual: bytes.len(),
        });
    }

    Ok(TagId::from_bytes(raw.to_vec()))
}
