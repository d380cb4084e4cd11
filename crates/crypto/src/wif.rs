//! Wallet Import Format: Base58Check of `0x80 ‖ key(32B) ‖ 0x01`.
//!
//! The trailing `0x01` marks the key as belonging to a compressed public
//! key; every key this SDK produces is compressed, so encoding always
//! emits it and decoding requires it.

use thiserror::Error;

use crate::base58check::{self, Base58CheckError};

/// WIF version byte, shared with the legacy interchange format.
pub const WIF_VERSION: u8 = 0x80;

/// Compression-flag suffix byte.
pub const WIF_COMPRESSED_FLAG: u8 = 0x01;

/// Errors raised while decoding a WIF string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WifError {
    #[error("wif: malformed base58check input")]
    Format,

    #[error("wif: checksum mismatch")]
    Checksum,

    #[error("wif: invalid payload length {0}")]
    InvalidLength(usize),

    #[error("wif: unexpected version byte {0:#04x}")]
    InvalidVersion(u8),

    #[error("wif: unexpected compression flag {0:#04x}")]
    InvalidCompressionFlag(u8),
}

impl From<Base58CheckError> for WifError {
    fn from(err: Base58CheckError) -> Self {
        match err {
            Base58CheckError::Format => WifError::Format,
            Base58CheckError::Checksum => WifError::Checksum,
        }
    }
}

/// Encodes a raw private key as a compressed-key WIF string.
pub fn encode(private_key: &[u8; 32]) -> String {
    let mut payload = Vec::with_capacity(34);
    payload.push(WIF_VERSION);
    payload.extend_from_slice(private_key);
    payload.push(WIF_COMPRESSED_FLAG);
    base58check::encode(&payload)
}

/// Decodes a compressed-key WIF string back to the raw private key.
pub fn decode(wif: &str) -> Result<[u8; 32], WifError> {
    let payload = base58check::decode(wif)?;
    if payload.len() != 34 {
        return Err(WifError::InvalidLength(payload.len()));
    }
    if payload[0] != WIF_VERSION {
        return Err(WifError::InvalidVersion(payload[0]));
    }
    if payload[33] != WIF_COMPRESSED_FLAG {
        return Err(WifError::InvalidCompressionFlag(payload[33]));
    }

    let mut key = [0u8; 32];
    key.copy_from_slice(&payload[1..33]);
    Ok(key)
}
