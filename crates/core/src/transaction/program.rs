//! Signature programs: the proof-of-authorization pairs appended to a
//! signed transaction.
//!
//! On the wire a program is two var-bytes fields. The invocation script
//! pushes the signature; the verification script pushes the public key
//! and ends with CHECKSIG. Program order is significant for multi-signer
//! transactions and is preserved exactly.

use ont_io::{helper, BinaryWriter, IoError, IoResult, MemoryReader, Serializable};
use ont_vm::{OpCode, ScriptBuilder};

use super::MAX_WIRE_FIELD_SIZE;

/// A signature/public-key pair authorizing a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub signature: Vec<u8>,
    pub public_key: Vec<u8>,
}

impl Program {
    pub fn new(signature: Vec<u8>, public_key: Vec<u8>) -> Self {
        Self {
            signature,
            public_key,
        }
    }

    /// The invocation script: a single push of the signature.
    pub fn invocation_script(&self) -> Vec<u8> {
        let mut builder = ScriptBuilder::new();
        builder.emit_push_bytes(&self.signature);
        builder.into_bytes()
    }

    /// The verification script: push of the key followed by CHECKSIG.
    pub fn verification_script(&self) -> Vec<u8> {
        let mut builder = ScriptBuilder::new();
        builder
            .emit_push_bytes(&self.public_key)
            .emit(OpCode::CHECKSIG);
        builder.into_bytes()
    }
}

/// Strips a direct-length data push, returning the pushed bytes.
fn unwrap_push(script: &[u8], context: &str) -> IoResult<Vec<u8>> {
    let malformed = || IoError::InvalidData {
        context: context.to_string(),
        value: "malformed push".to_string(),
    };

    let (&len, rest) = script.split_first().ok_or_else(malformed)?;
    if len as usize != rest.len() || len >= 0x4C {
        return Err(malformed());
    }
    Ok(rest.to_vec())
}

/// Size of a data push including its length prefix.
fn push_size(len: usize) -> usize {
    let prefix = if len < 0x4C {
        1
    } else if len < 0x100 {
        2
    } else if len < 0x1000 {
        3
    } else {
        5
    };
    prefix + len
}

impl Serializable for Program {
    fn size(&self) -> usize {
        let invocation = push_size(self.signature.len());
        let verification = push_size(self.public_key.len()) + 1;
        helper::get_var_size(invocation as u64)
            + invocation
            + helper::get_var_size(verification as u64)
            + verification
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_var_bytes(&self.invocation_script())?;
        writer.write_var_bytes(&self.verification_script())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let invocation = reader.read_var_bytes(MAX_WIRE_FIELD_SIZE)?;
        let signature = unwrap_push(&invocation, "invocation script")?;

        let verification = reader.read_var_bytes(MAX_WIRE_FIELD_SIZE)?;
        let (&tail, push) = verification.split_last().ok_or(IoError::InvalidData {
            context: "verification script".to_string(),
            value: "empty".to_string(),
        })?;
        if tail != OpCode::CHECKSIG as u8 {
            return Err(IoError::InvalidData {
                context: "verification script".to_string(),
                value: format!("unexpected terminal opcode {:#04x}", tail),
            });
        }
        let public_key = unwrap_push(push, "verification script")?;

        Ok(Self {
            signature,
            public_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ont_io::SerializableExt;

    #[test]
    fn wire_layout() {
        let program = Program::new(vec![0xAA; 64], vec![0x02; 33]);
        let bytes = program.to_array().unwrap();
        assert_eq!(bytes.len(), program.size());

        // varint(65) ‖ push(64B sig) ‖ varint(35) ‖ push(33B key) ‖ CHECKSIG
        assert_eq!(bytes[0], 65);
        assert_eq!(bytes[1], 64);
        assert_eq!(bytes[66], 35);
        assert_eq!(bytes[67], 33);
        assert_eq!(bytes[101], 0xAC);
    }

    #[test]
    fn size_matches_serialization_for_long_scripts() {
        // 0x4C bytes and up switch the push to a PUSHDATA1 prefix.
        for len in [0x4B, 0x4C, 0x60] {
            let program = Program::new(vec![0xAA; len], vec![0x02; 33]);
            assert_eq!(
                program.to_array().unwrap().len(),
                program.size(),
                "signature length {:#x}",
                len
            );
        }
    }

    #[test]
    fn round_trip() {
        let program = Program::new(vec![0x11; 64], vec![0x03; 33]);
        let bytes = program.to_array().unwrap();
        assert_eq!(Program::from_array(&bytes).unwrap(), program);
    }

    #[test]
    fn truncated_input_is_eof() {
        let program = Program::new(vec![0x11; 64], vec![0x03; 33]);
        let bytes = program.to_array().unwrap();
        let err = Program::from_array(&bytes[..bytes.len() - 1]).unwrap_err();
        assert!(matches!(err, IoError::UnexpectedEof { .. }));
    }

    #[test]
    fn bad_terminal_opcode_is_rejected() {
        let program = Program::new(vec![0x11; 64], vec![0x03; 33]);
        let mut bytes = program.to_array().unwrap();
        let last = bytes.len() - 1;
        bytes[last] = 0xAD;
        assert!(Program::from_array(&bytes).is_err());
    }
}
