//! Typed values accepted as contract-call arguments.

use num_bigint::BigInt;

/// A contract-call argument value.
///
/// `Struct` is an ordered, heterogeneous, append-only sequence that owns
/// its elements; `Array` is the generic list form. Every variant has an
/// encoding rule in [`crate::ScriptBuilder`], so an argument that reaches
/// the encoder can never be silently dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptValue {
    Bool(bool),
    Int(i64),
    ByteArray(Vec<u8>),
    String(String),
    /// A 20-byte program hash, pushed as a fixed-length byte array.
    Address([u8; 20]),
    /// Arbitrary-precision integer, minimal two's-complement encoding.
    BigNum(BigInt),
    Struct(Vec<ScriptValue>),
    Array(Vec<ScriptValue>),
}

impl ScriptValue {
    /// Whether every element of `list` is a `Struct`. Empty lists do not
    /// count, so they take the generic array encoding.
    pub fn is_struct_array(list: &[ScriptValue]) -> bool {
        !list.is_empty()
            && list
                .iter()
                .all(|value| matches!(value, ScriptValue::Struct(_)))
    }
}

impl From<bool> for ScriptValue {
    fn from(value: bool) -> Self {
        ScriptValue::Bool(value)
    }
}

impl From<i64> for ScriptValue {
    fn from(value: i64) -> Self {
        ScriptValue::Int(value)
    }
}

impl From<Vec<u8>> for ScriptValue {
    fn from(value: Vec<u8>) -> Self {
        ScriptValue::ByteArray(value)
    }
}

impl From<&str> for ScriptValue {
    fn from(value: &str) -> Self {
        ScriptValue::String(value.to_string())
    }
}

impl From<BigInt> for ScriptValue {
    fn from(value: BigInt) -> Self {
        ScriptValue::BigNum(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn struct_array_detection() {
        let structs = vec![
            ScriptValue::Struct(vec![ScriptValue::Int(1)]),
            ScriptValue::Struct(vec![]),
        ];
        assert!(ScriptValue::is_struct_array(&structs));

        let mixed = vec![
            ScriptValue::Struct(vec![]),
            ScriptValue::Int(1),
        ];
        assert!(!ScriptValue::is_struct_array(&mixed));
        assert!(!ScriptValue::is_struct_array(&[]));
    }
}
