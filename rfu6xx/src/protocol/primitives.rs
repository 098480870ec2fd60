// rfu6xx/src/protocol/primitives.rs

/// Serialize a u32 least-significant byte first.
pub fn serialize_u32_le(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Serialize a u64 least-significant byte first.
pub fn serialize_u64_le(value: u64) -> [u8; 8] {
    value.to_le_bytes()
}

/// Reinterpret the IEEE-754 bit pattern of a double as u64.
pub fn double_to_bits(value: f64) -> u64 {
    value.to_bits()
}

/// Inverse of [`double_to_bits`].
pub fn bits_to_double(bits: u64) -> f64 {
    f64::from_bits(bits)
}

/// Append-only little-endian byte builder for extension object bodies.
#[derive(Debug, Clone)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn append_u8(&mut self, value: u8) -> &mut Self {
        self.buf.push(value);
        self
    }

    pub fn append_u32_le(&mut self, value: u32) -> &mut Self {
        self.buf.extend_from_slice(&serialize_u32_le(value));
        self
    }

    /// Two's complement bytes of a signed value.
    pub fn append_i32_le(&mut self, value: i32) -> &mut Self {
        self.append_u32_le(value as u32)
    }

    pub fn append_u64_le(&mut self, value: u64) -> &mut Self {
        self.buf.extend_from_slice(&serialize_u64_le(value));
        self
    }

    pub fn append_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
