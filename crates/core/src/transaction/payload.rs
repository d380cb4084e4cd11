//! Transaction payload variants.
//!
//! `InvokeCode` carries an invocation script; `DeployCode` carries the
//! contract image and its metadata. Each variant serializes only the
//! fields it needs; the transaction's type byte selects which variant to
//! read back.

use ont_io::{helper, BinaryWriter, IoError, IoResult, MemoryReader, Serializable};
use ont_vm::{OpCode, ScriptBuilder, ScriptValue};

use crate::address::Address;

use super::MAX_WIRE_FIELD_SIZE;

/// Execution engine selector carried by deploy payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum VmType {
    Native = 0xFF,
    NeoVm = 0x80,
    Wasm = 0x90,
}

impl TryFrom<u8> for VmType {
    type Error = IoError;

    fn try_from(value: u8) -> IoResult<Self> {
        match value {
            0xFF => Ok(VmType::Native),
            0x80 => Ok(VmType::NeoVm),
            0x90 => Ok(VmType::Wasm),
            _ => Err(IoError::InvalidData {
                context: "vm type".to_string(),
                value: format!("{:#04x}", value),
            }),
        }
    }
}

/// Invocation payload: a var-bytes script blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeCode {
    pub code: Vec<u8>,
}

impl InvokeCode {
    /// Wraps an already-built invocation script.
    pub fn from_code(code: Vec<u8>) -> Self {
        Self { code }
    }

    /// Composes the invocation script for a contract call: the encoded
    /// parameter list terminated by the `0xC1` marker, the pushed
    /// function name, then APPCALL with the target script hash.
    pub fn for_contract_call(
        contract: &Address,
        function: &str,
        params: &[ScriptValue],
    ) -> Self {
        let mut builder = ScriptBuilder::new();
        builder
            .push_params(params)
            .emit(OpCode::PACK)
            .emit_push_bytes(function.as_bytes())
            .emit(OpCode::APPCALL)
            .emit_raw(contract.as_bytes());
        Self {
            code: builder.into_bytes(),
        }
    }
}

impl Serializable for InvokeCode {
    fn size(&self) -> usize {
        helper::get_var_bytes_size(&self.code)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_var_bytes(&self.code)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self {
            code: reader.read_var_bytes(MAX_WIRE_FIELD_SIZE)?,
        })
    }
}

/// Deployment payload: contract image plus descriptive metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployCode {
    pub code: Vec<u8>,
    pub vm_type: VmType,
    pub name: String,
    pub version: String,
    pub author: String,
    pub email: String,
    pub description: String,
}

impl Serializable for DeployCode {
    fn size(&self) -> usize {
        helper::get_var_bytes_size(&self.code)
            + 1
            + helper::get_var_bytes_size(self.name.as_bytes())
            + helper::get_var_bytes_size(self.version.as_bytes())
            + helper::get_var_bytes_size(self.author.as_bytes())
            + helper::get_var_bytes_size(self.email.as_bytes())
            + helper::get_var_bytes_size(self.description.as_bytes())
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_var_bytes(&self.code)?;
        writer.write_byte(self.vm_type as u8)?;
        writer.write_var_string(&self.name)?;
        writer.write_var_string(&self.version)?;
        writer.write_var_string(&self.author)?;
        writer.write_var_string(&self.email)?;
        writer.write_var_string(&self.description)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self {
            code: reader.read_var_bytes(MAX_WIRE_FIELD_SIZE)?,
            vm_type: VmType::try_from(reader.read_byte()?)?,
            name: reader.read_var_string(MAX_WIRE_FIELD_SIZE)?,
            version: reader.read_var_string(MAX_WIRE_FIELD_SIZE)?,
            author: reader.read_var_string(MAX_WIRE_FIELD_SIZE)?,
            email: reader.read_var_string(MAX_WIRE_FIELD_SIZE)?,
            description: reader.read_var_string(MAX_WIRE_FIELD_SIZE)?,
        })
    }
}

/// The payload carried by a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Invoke(InvokeCode),
    Deploy(DeployCode),
}

impl Payload {
    pub fn size(&self) -> usize {
        match self {
            Payload::Invoke(invoke) => invoke.size(),
            Payload::Deploy(deploy) => deploy.size(),
        }
    }

    pub fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        match self {
            Payload::Invoke(invoke) => invoke.serialize(writer),
            Payload::Deploy(deploy) => deploy.serialize(writer),
        }
    }
}
