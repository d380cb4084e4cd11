//! Serialization traits for wire-format objects.

use crate::{BinaryWriter, IoResult, MemoryReader};

/// Objects with a canonical wire-format byte layout.
pub trait Serializable {
    /// The size of the object in bytes after serialization.
    fn size(&self) -> usize;

    /// Serializes the object using the specified writer.
    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()>;

    /// Deserializes the object using the specified reader.
    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self>
    where
        Self: Sized;
}

/// Extension methods for serializable objects.
pub trait SerializableExt: Serializable {
    /// Serializes the object to a byte array.
    fn to_array(&self) -> IoResult<Vec<u8>> {
        let mut writer = BinaryWriter::with_capacity(self.size());
        self.serialize(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Deserializes an object from a byte array.
    fn from_array(data: &[u8]) -> IoResult<Self>
    where
        Self: Sized,
    {
        let mut reader = MemoryReader::new(data);
        Self::deserialize(&mut reader)
    }
}

impl<T: Serializable> SerializableExt for T {}

/// Helper functions for serializing collections.
pub mod helper {
    use super::Serializable;
    use crate::{BinaryWriter, IoResult, MemoryReader};

    /// Serializes a varint-counted sequence of objects.
    pub fn serialize_array<T: Serializable>(
        items: &[T],
        writer: &mut BinaryWriter,
    ) -> IoResult<()> {
        writer.write_var_int(items.len() as u64)?;
        for item in items {
            item.serialize(writer)?;
        }
        Ok(())
    }

    /// Deserializes a varint-counted sequence of objects, at most `max`.
    pub fn deserialize_array<T: Serializable>(
        reader: &mut MemoryReader,
        max: usize,
    ) -> IoResult<Vec<T>> {
        let count = reader.read_var_int(max as u64)? as usize;
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            items.push(T::deserialize(reader)?);
        }
        Ok(items)
    }

    /// Serialized size of a varint-counted sequence.
    pub fn get_array_size<T: Serializable>(items: &[T]) -> usize {
        items
            .iter()
            .fold(get_var_size(items.len() as u64), |acc, item| {
                acc + item.size()
            })
    }

    /// Serialized size of a variable-length integer.
    pub fn get_var_size(value: u64) -> usize {
        if value < 0xFD {
            1
        } else if value <= 0xFFFF {
            3
        } else if value <= 0xFFFF_FFFF {
            5
        } else {
            9
        }
    }

    /// Serialized size of a varint-length-prefixed byte string.
    pub fn get_var_bytes_size(bytes: &[u8]) -> usize {
        get_var_size(bytes.len() as u64) + bytes.len()
    }
}
