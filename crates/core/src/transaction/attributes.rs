//! Transaction attributes: a usage tag plus opaque payload bytes.

use ont_io::{helper, BinaryWriter, IoError, IoResult, MemoryReader, Serializable};

use super::MAX_WIRE_FIELD_SIZE;

/// Known attribute usage tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AttributeUsage {
    Nonce = 0x00,
    Script = 0x20,
    DescriptionUrl = 0x81,
    Description = 0x90,
}

impl TryFrom<u8> for AttributeUsage {
    type Error = IoError;

    fn try_from(value: u8) -> IoResult<Self> {
        match value {
            0x00 => Ok(AttributeUsage::Nonce),
            0x20 => Ok(AttributeUsage::Script),
            0x81 => Ok(AttributeUsage::DescriptionUrl),
            0x90 => Ok(AttributeUsage::Description),
            _ => Err(IoError::InvalidData {
                context: "attribute usage".to_string(),
                value: format!("{:#04x}", value),
            }),
        }
    }
}

/// A single transaction attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionAttribute {
    pub usage: AttributeUsage,
    pub data: Vec<u8>,
}

impl TransactionAttribute {
    pub fn new(usage: AttributeUsage, data: Vec<u8>) -> Self {
        Self { usage, data }
    }
}

impl Serializable for TransactionAttribute {
    fn size(&self) -> usize {
        1 + helper::get_var_bytes_size(&self.data)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_byte(self.usage as u8)?;
        writer.write_var_bytes(&self.data)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let usage = AttributeUsage::try_from(reader.read_byte()?)?;
        let data = reader.read_var_bytes(MAX_WIRE_FIELD_SIZE)?;
        Ok(Self { usage, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ont_io::SerializableExt;

    #[test]
    fn round_trip() {
        let attribute =
            TransactionAttribute::new(AttributeUsage::Description, b"transfer memo".to_vec());
        let bytes = attribute.to_array().unwrap();
        assert_eq!(bytes.len(), attribute.size());
        assert_eq!(TransactionAttribute::from_array(&bytes).unwrap(), attribute);
    }

    #[test]
    fn wire_layout_is_usage_then_var_bytes() {
        let attribute = TransactionAttribute::new(AttributeUsage::Script, vec![0xAA, 0xBB]);
        assert_eq!(attribute.to_array().unwrap(), vec![0x20, 0x02, 0xAA, 0xBB]);
    }

    #[test]
    fn unknown_usage_is_rejected() {
        assert!(TransactionAttribute::from_array(&[0x42, 0x00]).is_err());
    }
}
