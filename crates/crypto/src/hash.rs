//! Hash functions and combinations used across the protocol.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Computes SHA-256 of the input data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Computes RIPEMD-160 of the input data.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Computes Hash160 (RIPEMD-160 of SHA-256), the program-hash digest.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// Computes Hash256 (double SHA-256), the transaction/checksum digest.
pub fn hash256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// First four bytes of Hash256, used as a Base58Check trailer and as the
/// address-binding salt of the encrypted-key scheme.
pub fn checksum(data: &[u8]) -> [u8; 4] {
    let digest = hash256(data);
    [digest[0], digest[1], digest[2], digest[3]]
}
