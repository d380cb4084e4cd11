//! Append-only writer producing wire-format bytes.

use crate::IoResult;

/// Writes wire-format values into an owned byte buffer.
#[derive(Default)]
pub struct BinaryWriter {
    buffer: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Consumes the writer, returning the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Copies out the written bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buffer.clone()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[inline]
    pub fn write_byte(&mut self, value: u8) -> IoResult<()> {
        self.buffer.push(value);
        Ok(())
    }

    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) -> IoResult<()> {
        self.buffer.extend_from_slice(bytes);
        Ok(())
    }

    #[inline]
    pub fn write_u16(&mut self, value: u16) -> IoResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    #[inline]
    pub fn write_u32(&mut self, value: u32) -> IoResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    #[inline]
    pub fn write_u64(&mut self, value: u64) -> IoResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes a variable-length integer (1/3/5/9 byte encoding).
    pub fn write_var_int(&mut self, value: u64) -> IoResult<()> {
        if value < 0xFD {
            self.write_byte(value as u8)
        } else if value <= 0xFFFF {
            self.write_byte(0xFD)?;
            self.write_u16(value as u16)
        } else if value <= 0xFFFF_FFFF {
            self.write_byte(0xFE)?;
            self.write_u32(value as u32)
        } else {
            self.write_byte(0xFF)?;
            self.write_u64(value)
        }
    }

    /// Writes a varint-length-prefixed byte string.
    pub fn write_var_bytes(&mut self, bytes: &[u8]) -> IoResult<()> {
        self.write_var_int(bytes.len() as u64)?;
        self.write_bytes(bytes)
    }

    /// Writes a varint-length-prefixed UTF-8 string.
    pub fn write_var_string(&mut self, value: &str) -> IoResult<()> {
        self.write_var_bytes(value.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn var_int_boundary_encodings() {
        let cases: &[(u64, &[u8])] = &[
            (0x00, &[0x00]),
            (0xFC, &[0xFC]),
            (0xFD, &[0xFD, 0xFD, 0x00]),
            (0xFFFF, &[0xFD, 0xFF, 0xFF]),
            (0x1_0000, &[0xFE, 0x00, 0x00, 0x01, 0x00]),
            (0xFFFF_FFFF, &[0xFE, 0xFF, 0xFF, 0xFF, 0xFF]),
            (
                0x1_0000_0000,
                &[0xFF, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00],
            ),
        ];
        for (value, expected) in cases {
            let mut writer = BinaryWriter::new();
            writer.write_var_int(*value).unwrap();
            assert_eq!(writer.into_bytes(), *expected, "value {:#x}", value);
        }
    }

    #[test]
    fn var_bytes_prefixes_length() {
        let mut writer = BinaryWriter::new();
        writer.write_var_bytes(b"abc").unwrap();
        assert_eq!(writer.into_bytes(), vec![0x03, b'a', b'b', b'c']);
    }

    #[test]
    fn fixed_width_is_little_endian() {
        let mut writer = BinaryWriter::new();
        writer.write_u32(0x1234_5678).unwrap();
        writer.write_u64(1).unwrap();
        assert_eq!(
            writer.into_bytes(),
            vec![0x78, 0x56, 0x34, 0x12, 1, 0, 0, 0, 0, 0, 0, 0]
        );
    }
}
