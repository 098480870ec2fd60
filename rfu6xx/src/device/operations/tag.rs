use log::debug;

use crate::constants::CODE_TYPE_RAW_STRING;
use crate::device::{Device, Initialized};
use crate::protocol::{ExtensionObject, Variant};
use crate::resolver::Role;
use crate::types::{ReaderResponseCode, TagAddress, TagId, TagReadResult};
use crate::{Error, Result};

/// Argument list shared by ReadTag and WriteTag:
/// [tag id, code type, bank (Int16), offset, `slot`, password]
/// The id is validated before anything is sent.
fn tag_arguments(
    device: &Device<Initialized>,
    id: &str,
    address: TagAddress,
    slot: Variant,
) -> Result<Vec<Variant>> {
    let tag = TagId::parse(id)?;
    let eo = ExtensionObject::tag_id(device.address_table().namespaces().auto_id, &tag);
    debug!("tag id {} -> {}", tag, crate::utils::bytes_to_hex_spaced(&eo.body));

    Ok(vec![
        eo.into(),
        Variant::from(CODE_TYPE_RAW_STRING),
        // bank is Int16 in the method signature
        Variant::Int16(address.bank as i16),
        Variant::Int32(address.offset),
        slot,
        // no access password
        Variant::String(String::new()),
    ])
}

fn into_array<const N: usize>(outputs: Vec<Variant>) -> Result<[Variant; N]> {
    outputs
        .try_into()
        .map_err(|v: Vec<Variant>| Error::UnexpectedResultCount {
            expected: N,
            actual: v.len(),
        })
}

fn response_code(value: Variant) -> Result<ReaderResponseCode> {
    match value {
        Variant::Int32(code) => Ok(ReaderResponseCode::from_u32(code as u32)),
        Variant::UInt32(code) => Ok(ReaderResponseCode::from_u32(code)),
        other => Err(Error::TypeMismatch {
            expected: "Int32",
            actual: other.type_name(),
        }),
    }
}

/// Call ReadTag; the reader answers with [data (ByteString), status code].
pub fn read_tag(
    device: &mut Device<Initialized>,
    id: &str,
    address: TagAddress,
) -> Result<TagReadResult> {
    let args = tag_arguments(device, id, address, Variant::Int32(address.length))?;
    let [data, code] = into_array::<2>(device.call_method(Role::ReadTag, &args)?)?;

    let data = match data {
        Variant::ByteString(bytes) => bytes,
        other => {
            return Err(Error::TypeMismatch {
                expected: "ByteString",
                actual: other.type_name(),
            });
        }
    };
    let response = response_code(code)?;
    debug!("ReadTag returned {} byte(s), {}", data.len(), response);

    Ok(TagReadResult { data, response })
}

/// Call WriteTag; the reader answers with a single status code.
pub fn write_tag(
    device: &mut Device<Initialized>,
    id: &str,
    address: TagAddress,
    data: &str,
) -> Result<ReaderResponseCode> {
    let args = tag_arguments(device, id, address, Variant::from(data))?;
    let [code] = into_array::<1>(device.call_method(Role::WriteTag, &args)?)?;
    response_code(code)
}
