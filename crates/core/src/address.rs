//! Program-hash addresses and their Base58Check string form.
//!
//! An address is the 20-byte Hash160 of a locking script. For a single
//! public key the locking script is `0x21 ‖ compressed_key ‖ CHECKSIG`.
//! The string form is `Base58Check(version ‖ program_hash)` with a fixed
//! version byte.

use std::fmt;

use thiserror::Error;

use ont_crypto::base58check::{self, Base58CheckError};
use ont_crypto::hash::hash160;
use ont_crypto::keypair::PublicKey;
use ont_vm::{OpCode, ScriptBuilder};

/// Fixed version byte prepended to the program hash.
pub const ADDRESS_VERSION: u8 = 0x17;

/// Errors raised while decoding an address string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Not Base58, wrong payload length, or wrong version byte.
    #[error("address: malformed encoding")]
    Format,

    /// The Base58Check trailer does not match.
    #[error("address: checksum mismatch")]
    Checksum,
}

impl From<Base58CheckError> for AddressError {
    fn from(err: Base58CheckError) -> Self {
        match err {
            Base58CheckError::Format => AddressError::Format,
            Base58CheckError::Checksum => AddressError::Checksum,
        }
    }
}

/// A 20-byte program hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// Length of the program hash in bytes.
    pub const LEN: usize = 20;

    /// Wraps an existing program hash.
    pub fn from_program_hash(hash: [u8; 20]) -> Self {
        Self(hash)
    }

    /// Derives the address of a single-key locking script.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let mut builder = ScriptBuilder::new();
        builder
            .emit_push_bytes(&public_key.to_compressed())
            .emit(OpCode::CHECKSIG);
        Self::from_script(&builder.into_bytes())
    }

    /// Derives the address of an arbitrary locking script.
    pub fn from_script(script: &[u8]) -> Self {
        Self(hash160(script))
    }

    /// The raw program hash.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Encodes the Base58Check string form.
    pub fn to_base58(&self) -> String {
        let mut payload = [0u8; 21];
        payload[0] = ADDRESS_VERSION;
        payload[1..].copy_from_slice(&self.0);
        base58check::encode(&payload)
    }

    /// Decodes the Base58Check string form.
    pub fn from_base58(encoded: &str) -> Result<Self, AddressError> {
        let payload = base58check::decode(encoded)?;
        if payload.len() != 21 || payload[0] != ADDRESS_VERSION {
            return Err(AddressError::Format);
        }
        let mut hash = [0u8; 20];
        hash.copy_from_slice(&payload[1..]);
        Ok(Self(hash))
    }

    /// The program hash as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl From<[u8; 20]> for Address {
    fn from(hash: [u8; 20]) -> Self {
        Self(hash)
    }
}
