//! Base58Check encoding: Base58 over `payload ‖ hash256(payload)[..4]`.

use thiserror::Error;

use crate::hash::checksum;

/// Errors raised while decoding a Base58Check string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Base58CheckError {
    /// Not valid Base58, or too short to carry a checksum.
    #[error("base58check: malformed input")]
    Format,

    /// The trailing four bytes do not match the payload digest.
    #[error("base58check: checksum mismatch")]
    Checksum,
}

/// Encodes a payload with its four-byte checksum trailer.
pub fn encode(payload: &[u8]) -> String {
    let mut buf = Vec::with_capacity(payload.len() + 4);
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&checksum(payload));
    bs58::encode(buf).into_string()
}

/// Decodes a Base58Check string, returning the payload without checksum.
pub fn decode(encoded: &str) -> Result<Vec<u8>, Base58CheckError> {
    let data = bs58::decode(encoded)
        .into_vec()
        .map_err(|_| Base58CheckError::Format)?;
    if data.len() < 5 {
        return Err(Base58CheckError::Format);
    }

    let (payload, trailer) = data.split_at(data.len() - 4);
    if checksum(payload) != trailer {
        return Err(Base58CheckError::Checksum);
    }
    Ok(payload.to_vec())
}
