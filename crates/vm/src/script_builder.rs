//! Builds the bytecode sequence pushing contract-call arguments.

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::op_code::OpCode;
use crate::script_value::ScriptValue;

/// Constructs argument-pushing scripts for the legacy stack machine.
pub struct ScriptBuilder {
    script: Vec<u8>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self { script: Vec::new() }
    }

    /// Emits a single opcode.
    pub fn emit(&mut self, op: OpCode) -> &mut Self {
        self.script.push(op as u8);
        self
    }

    /// Emits a raw byte.
    pub fn emit_byte(&mut self, byte: u8) -> &mut Self {
        self.script.push(byte);
        self
    }

    /// Emits raw bytes without a push prefix.
    pub fn emit_raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.script.extend_from_slice(bytes);
        self
    }

    /// Emits a data push, selecting the prefix by length.
    ///
    /// Lengths below `0x4C` use the length byte itself as the opcode.
    /// The PUSHDATA2 length prefix is big-endian; this is a quirk of the
    /// source wire format and must not be normalized.
    pub fn emit_push_bytes(&mut self, data: &[u8]) -> &mut Self {
        let len = data.len();
        if len < 0x4C {
            self.emit_byte(len as u8);
        } else if len < 0x100 {
            self.emit(OpCode::PUSHDATA1);
            self.emit_byte(len as u8);
        } else if len < 0x1000 {
            self.emit(OpCode::PUSHDATA2);
            self.emit_raw(&(len as u16).to_be_bytes());
        } else {
            self.emit(OpCode::PUSHDATA4);
            self.emit_raw(&(len as u32).to_le_bytes());
        }
        self.emit_raw(data)
    }

    /// Emits a boolean as its single-opcode push.
    pub fn emit_push_bool(&mut self, value: bool) -> &mut Self {
        if value {
            self.emit(OpCode::PUSH1)
        } else {
            self.emit(OpCode::PUSH0)
        }
    }

    /// Emits an integer, using the immediate opcodes where possible.
    pub fn emit_push_int(&mut self, value: i64) -> &mut Self {
        self.emit_push_bigint(&BigInt::from(value))
    }

    /// Emits an arbitrary-precision integer.
    pub fn emit_push_bigint(&mut self, value: &BigInt) -> &mut Self {
        if *value == BigInt::from(-1) {
            return self.emit(OpCode::PUSHM1);
        }
        if let Some(small) = value.to_i64() {
            if small == 0 {
                return self.emit(OpCode::PUSH0);
            }
            if (1..=16).contains(&small) {
                return self.emit_byte(OpCode::PUSH1 as u8 + (small as u8 - 1));
            }
        }
        // Minimal two's-complement little-endian bytes, sign-extended so
        // the top bit reflects the sign.
        let bytes = value.to_signed_bytes_le();
        self.emit_push_bytes(&bytes)
    }

    /// Encodes one value by its kind.
    pub fn push_value(&mut self, value: &ScriptValue) -> &mut Self {
        match value {
            ScriptValue::Bool(b) => self.emit_push_bool(*b),
            ScriptValue::Int(i) => self.emit_push_int(*i),
            ScriptValue::ByteArray(bytes) => self.emit_push_bytes(bytes),
            ScriptValue::String(s) => self.emit_push_bytes(s.as_bytes()),
            ScriptValue::Address(hash) => self.emit_push_bytes(hash),
            ScriptValue::BigNum(n) => self.emit_push_bigint(n),
            ScriptValue::Struct(members) => self.push_struct(members),
            ScriptValue::Array(list) => {
                if ScriptValue::is_struct_array(list) {
                    self.push_struct_array(list)
                } else {
                    self.push_params(list);
                    self.emit_push_int(list.len() as i64);
                    self.emit(OpCode::PACK)
                }
            }
        }
    }

    /// Encodes an argument list in reverse order, so the first logical
    /// argument ends up on top of the stack.
    pub fn push_params(&mut self, params: &[ScriptValue]) -> &mut Self {
        for value in params.iter().rev() {
            self.push_value(value);
        }
        self
    }

    /// Builds a fresh struct on the alt stack and appends each member.
    fn push_struct(&mut self, members: &[ScriptValue]) -> &mut Self {
        self.emit(OpCode::PUSH0);
        self.emit(OpCode::NEWSTRUCT);
        self.emit(OpCode::TOALTSTACK);
        for member in members {
            self.push_value(member);
            self.emit(OpCode::DUPFROMALTSTACK);
            self.emit(OpCode::SWAP);
            self.emit(OpCode::APPEND);
        }
        self.emit(OpCode::FROMALTSTACK)
    }

    /// Encodes a homogeneous struct array: one alt-stack struct collects
    /// every member of every element, then the result is packed with the
    /// element count. This mirrors the source SDK byte-for-byte.
    fn push_struct_array(&mut self, list: &[ScriptValue]) -> &mut Self {
        self.emit(OpCode::PUSH0);
        self.emit(OpCode::NEWSTRUCT);
        self.emit(OpCode::TOALTSTACK);
        for element in list {
            if let ScriptValue::Struct(members) = element {
                for member in members {
                    self.push_value(member);
                    self.emit(OpCode::DUPFROMALTSTACK);
                    self.emit(OpCode::SWAP);
                    self.emit(OpCode::APPEND);
                }
            }
        }
        self.emit(OpCode::FROMALTSTACK);
        self.emit_push_int(list.len() as i64);
        self.emit(OpCode::PACK)
    }

    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    /// Consumes the builder, returning the script bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.script
    }

    /// Copies out the script bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.script.clone()
    }
}

impl Default for ScriptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(values: &[ScriptValue]) -> Vec<u8> {
        let mut builder = ScriptBuilder::new();
        builder.push_params(values);
        builder.into_bytes()
    }

    #[test]
    fn bool_pushes() {
        assert_eq!(build(&[ScriptValue::Bool(true)]), vec![0x51]);
        assert_eq!(build(&[ScriptValue::Bool(false)]), vec![0x00]);
    }

    #[test]
    fn int_immediates() {
        assert_eq!(build(&[ScriptValue::Int(-1)]), vec![0x4F]);
        assert_eq!(build(&[ScriptValue::Int(0)]), vec![0x00]);
        assert_eq!(build(&[ScriptValue::Int(1)]), vec![0x51]);
        assert_eq!(build(&[ScriptValue::Int(16)]), vec![0x60]);
    }

    #[test]
    fn int_data_pushes_are_minimal_twos_complement() {
        assert_eq!(build(&[ScriptValue::Int(100)]), vec![0x01, 0x64]);
        assert_eq!(build(&[ScriptValue::Int(-100)]), vec![0x01, 0x9C]);
        // 255 needs a sign byte so it stays positive.
        assert_eq!(build(&[ScriptValue::Int(255)]), vec![0x02, 0xFF, 0x00]);
        assert_eq!(build(&[ScriptValue::Int(256)]), vec![0x02, 0x00, 0x01]);
    }

    #[test]
    fn bignum_matches_int_encoding() {
        assert_eq!(
            build(&[ScriptValue::BigNum(BigInt::from(256))]),
            build(&[ScriptValue::Int(256)])
        );
        // 2^80, out of i64 range.
        let big = BigInt::from(1u8) << 80;
        let script = build(&[ScriptValue::BigNum(big)]);
        assert_eq!(script[0], 11); // minimal little-endian magnitude
        assert_eq!(script.len(), 12);
    }

    #[test]
    fn byte_array_prefix_selection() {
        // Direct length byte below 0x4C.
        let script = build(&[ScriptValue::ByteArray(vec![0xAB; 3])]);
        assert_eq!(script, vec![0x03, 0xAB, 0xAB, 0xAB]);

        // PUSHDATA1 from 0x4C to 0xFF.
        let script = build(&[ScriptValue::ByteArray(vec![0u8; 0x4C])]);
        assert_eq!(&script[..2], &[0x4C, 0x4C]);

        // PUSHDATA2 with big-endian length below 0x1000.
        let script = build(&[ScriptValue::ByteArray(vec![0u8; 0x0123])]);
        assert_eq!(&script[..3], &[0x4D, 0x01, 0x23]);

        // PUSHDATA4 with little-endian length from 0x1000.
        let script = build(&[ScriptValue::ByteArray(vec![0u8; 0x1000])]);
        assert_eq!(&script[..5], &[0x4E, 0x00, 0x10, 0x00, 0x00]);
    }

    #[test]
    fn address_is_fixed_twenty_byte_push() {
        let script = build(&[ScriptValue::Address([0x11; 20])]);
        assert_eq!(script[0], 20);
        assert_eq!(script.len(), 21);
    }

    #[test]
    fn string_pushes_utf8_bytes() {
        assert_eq!(
            build(&[ScriptValue::String("abc".to_string())]),
            vec![0x03, b'a', b'b', b'c']
        );
    }

    #[test]
    fn params_are_emitted_in_reverse() {
        let script = build(&[ScriptValue::Int(1), ScriptValue::Int(2)]);
        assert_eq!(script, vec![0x52, 0x51]);
    }

    #[test]
    fn empty_array_is_push0_pack() {
        assert_eq!(build(&[ScriptValue::Array(vec![])]), vec![0x00, 0xC1]);
    }

    #[test]
    fn generic_array_packs_reversed_elements() {
        let script = build(&[ScriptValue::Array(vec![
            ScriptValue::Int(1),
            ScriptValue::Int(2),
        ])]);
        // Reversed elements, then PUSH2 PACK.
        assert_eq!(script, vec![0x52, 0x51, 0x52, 0xC1]);
    }

    #[test]
    fn struct_uses_alt_stack_append_idiom() {
        let script = build(&[ScriptValue::Struct(vec![
            ScriptValue::Int(1),
            ScriptValue::ByteArray(vec![0xAB]),
        ])]);
        assert_eq!(
            script,
            vec![
                0x00, 0xC6, 0x6B, // PUSH0 NEWSTRUCT TOALTSTACK
                0x51, 0x6A, 0x7C, 0xC8, // member 1 + DUPFROMALTSTACK SWAP APPEND
                0x01, 0xAB, 0x6A, 0x7C, 0xC8, // member 2
                0x6C, // FROMALTSTACK
            ]
        );
    }

    #[test]
    fn struct_array_flattens_members_then_packs() {
        let script = build(&[ScriptValue::Array(vec![
            ScriptValue::Struct(vec![ScriptValue::Int(1)]),
            ScriptValue::Struct(vec![ScriptValue::Int(2)]),
        ])]);
        assert_eq!(
            script,
            vec![
                0x00, 0xC6, 0x6B, // PUSH0 NEWSTRUCT TOALTSTACK
                0x51, 0x6A, 0x7C, 0xC8, // first struct's member
                0x52, 0x6A, 0x7C, 0xC8, // second struct's member
                0x6C, 0x52, 0xC1, // FROMALTSTACK PUSH2 PACK
            ]
        );
    }

    #[test]
    fn encoding_is_deterministic() {
        let value = ScriptValue::Struct(vec![
            ScriptValue::Int(42),
            ScriptValue::String("id".to_string()),
            ScriptValue::Array(vec![ScriptValue::Bool(true)]),
        ]);
        assert_eq!(
            build(std::slice::from_ref(&value)),
            build(std::slice::from_ref(&value))
        );
    }
}
