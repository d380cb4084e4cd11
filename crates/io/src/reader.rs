//! Sequential reader over an in-memory byte slice.

use crate::{IoError, IoResult};

/// Reads wire-format values from a borrowed byte slice, tracking position.
pub struct MemoryReader<'a> {
    memory: &'a [u8],
    pos: usize,
}

impl<'a> MemoryReader<'a> {
    pub fn new(memory: &'a [u8]) -> Self {
        Self { memory, pos: 0 }
    }

    #[inline]
    fn ensure(&self, count: usize) -> IoResult<()> {
        if self.pos + count > self.memory.len() {
            Err(IoError::UnexpectedEof { position: self.pos })
        } else {
            Ok(())
        }
    }

    /// Current read offset from the start of the input.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.memory.len() - self.pos
    }

    #[inline]
    pub fn read_byte(&mut self) -> IoResult<u8> {
        self.ensure(1)?;
        let value = self.memory[self.pos];
        self.pos += 1;
        Ok(value)
    }

    pub fn read_bytes(&mut self, count: usize) -> IoResult<Vec<u8>> {
        self.ensure(count)?;
        let value = self.memory[self.pos..self.pos + count].to_vec();
        self.pos += count;
        Ok(value)
    }

    /// Reads a fixed-size byte array, e.g. a hash or address field.
    pub fn read_array<const N: usize>(&mut self) -> IoResult<[u8; N]> {
        self.ensure(N)?;
        let mut value = [0u8; N];
        value.copy_from_slice(&self.memory[self.pos..self.pos + N]);
        self.pos += N;
        Ok(value)
    }

    #[inline]
    pub fn read_u16(&mut self) -> IoResult<u16> {
        Ok(u16::from_le_bytes(self.read_array::<2>()?))
    }

    #[inline]
    pub fn read_u32(&mut self) -> IoResult<u32> {
        Ok(u32::from_le_bytes(self.read_array::<4>()?))
    }

    #[inline]
    pub fn read_u64(&mut self) -> IoResult<u64> {
        Ok(u64::from_le_bytes(self.read_array::<8>()?))
    }

    /// Reads a variable-length integer, rejecting values above `max`.
    pub fn read_var_int(&mut self, max: u64) -> IoResult<u64> {
        let prefix = self.read_byte()?;
        let value = match prefix {
            0xFD => self.read_u16()? as u64,
            0xFE => self.read_u32()? as u64,
            0xFF => self.read_u64()?,
            _ => prefix as u64,
        };
        if value > max {
            return Err(IoError::InvalidData {
                context: "varint".to_string(),
                value: format!("{} exceeds maximum {}", value, max),
            });
        }
        Ok(value)
    }

    /// Reads a varint-length-prefixed byte string.
    pub fn read_var_bytes(&mut self, max: usize) -> IoResult<Vec<u8>> {
        let len = self.read_var_int(max as u64)? as usize;
        self.read_bytes(len)
    }

    /// Reads a varint-length-prefixed UTF-8 string.
    pub fn read_var_string(&mut self, max: usize) -> IoResult<String> {
        let bytes = self.read_var_bytes(max)?;
        String::from_utf8(bytes).map_err(|_| IoError::InvalidUtf8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_fixed_width_little_endian() {
        let data = [0x78, 0x56, 0x34, 0x12, 0xFF];
        let mut reader = MemoryReader::new(&data);
        assert_eq!(reader.read_u32().unwrap(), 0x1234_5678);
        assert_eq!(reader.read_byte().unwrap(), 0xFF);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn truncated_read_reports_eof() {
        let data = [0x01, 0x02];
        let mut reader = MemoryReader::new(&data);
        let err = reader.read_u32().unwrap_err();
        assert_eq!(err, IoError::UnexpectedEof { position: 0 });
    }

    #[test]
    fn var_int_prefixes() {
        let data = [
            0x10, // direct
            0xFD, 0x34, 0x12, // u16
            0xFE, 0x78, 0x56, 0x34, 0x12, // u32
            0xFF, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // u64
        ];
        let mut reader = MemoryReader::new(&data);
        assert_eq!(reader.read_var_int(u64::MAX).unwrap(), 0x10);
        assert_eq!(reader.read_var_int(u64::MAX).unwrap(), 0x1234);
        assert_eq!(reader.read_var_int(u64::MAX).unwrap(), 0x1234_5678);
        assert_eq!(reader.read_var_int(u64::MAX).unwrap(), 1);
    }

    #[test]
    fn var_int_above_max_is_rejected() {
        let data = [0xFD, 0x34, 0x12];
        let mut reader = MemoryReader::new(&data);
        assert!(reader.read_var_int(0x100).is_err());
    }

    #[test]
    fn var_bytes_round_trip() {
        let data = [0x03, b'a', b'b', b'c'];
        let mut reader = MemoryReader::new(&data);
        assert_eq!(reader.read_var_bytes(16).unwrap(), b"abc");
    }

    #[test]
    fn var_string_rejects_bad_utf8() {
        let data = [0x02, 0xFF, 0xFE];
        let mut reader = MemoryReader::new(&data);
        assert_eq!(reader.read_var_string(16).unwrap_err(), IoError::InvalidUtf8);
    }
}
