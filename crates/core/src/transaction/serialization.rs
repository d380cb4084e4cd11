//! Wire codec for transactions and their fee entries.

use ont_io::{helper, BinaryWriter, IoError, IoResult, MemoryReader, Serializable};

use crate::address::Address;

use super::core::{Fee, Transaction, TxType};
use super::payload::{DeployCode, InvokeCode, Payload};
use super::{MAX_TX_ATTRIBUTES, MAX_TX_FEES, MAX_TX_PROGRAMS};

impl Serializable for Fee {
    fn size(&self) -> usize {
        8 + Address::LEN
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u64(self.amount)?;
        writer.write_bytes(self.payer.as_bytes())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self {
            amount: reader.read_u64()?,
            payer: Address::from_program_hash(reader.read_array()?),
        })
    }
}

impl Transaction {
    fn serialize_unsigned(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_byte(self.version)?;
        writer.write_byte(self.tx_type.byte())?;
        writer.write_u32(self.nonce)?;
        self.payload.serialize(writer)?;
        helper::serialize_array(&self.attributes, writer)?;
        helper::serialize_array(&self.fees, writer)?;
        writer.write_u64(self.network_fee)
    }

    /// The unsigned serialization, the input to hashing and signing.
    pub fn unsigned_bytes(&self) -> IoResult<Vec<u8>> {
        let mut writer = BinaryWriter::with_capacity(self.unsigned_size());
        self.serialize_unsigned(&mut writer)?;
        Ok(writer.into_bytes())
    }

    fn unsigned_size(&self) -> usize {
        1 + 1
            + 4
            + self.payload.size()
            + helper::get_array_size(&self.attributes)
            + helper::get_array_size(&self.fees)
            + 8
    }
}

impl Serializable for Transaction {
    fn size(&self) -> usize {
        self.unsigned_size() + helper::get_array_size(&self.programs)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        self.serialize_unsigned(writer)?;
        helper::serialize_array(&self.programs, writer)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let version = reader.read_byte()?;
        let tx_type = TxType::from_byte(reader.read_byte()?);
        let nonce = reader.read_u32()?;

        // Unknown type tags get the permissive invoke layout so foreign
        // records survive decode and re-encode byte for byte.
        let payload = match tx_type {
            TxType::Deploy => Payload::Deploy(DeployCode::deserialize(reader)?),
            TxType::Invoke | TxType::Other(_) => {
                Payload::Invoke(InvokeCode::deserialize(reader)?)
            }
        };

        let attributes = helper::deserialize_array(reader, MAX_TX_ATTRIBUTES)?;
        let fees = helper::deserialize_array(reader, MAX_TX_FEES)?;
        let network_fee = reader.read_u64()?;

        // The unsigned form simply ends here.
        let programs = if reader.remaining() > 0 {
            helper::deserialize_array(reader, MAX_TX_PROGRAMS)?
        } else {
            Vec::new()
        };
        if reader.remaining() > 0 {
            return Err(IoError::InvalidData {
                context: "transaction".to_string(),
                value: format!("{} trailing bytes", reader.remaining()),
            });
        }

        Ok(Self {
            version,
            tx_type,
            nonce,
            payload,
            attributes,
            fees,
            network_fee,
            programs,
        })
    }
}
