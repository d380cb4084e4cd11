//! Password-based private key encryption.
//!
//! Keys at rest are stored as a Base58Check string wrapping a 39-byte
//! blob: a fixed three-byte header, a four-byte address hash, and the
//! 32-byte ciphertext. Encryption derives a 64-byte scrypt key from the
//! NFC-normalized passphrase, XORs the private scalar with the first
//! half, and encrypts the result with AES-256-ECB under the second half.
//!
//! Decryption does not authenticate the passphrase. A wrong passphrase
//! yields a structurally valid but different private key; callers that
//! need confirmation use [`encrypted_key::decrypt_verified`].

pub mod encrypted_key;
pub mod scrypt_parameters;

pub use encrypted_key::{decrypt_private_key, decrypt_verified, encrypt_private_key};
pub use scrypt_parameters::ScryptParameters;

use thiserror::Error;

/// Result type for wallet operations.
pub type WalletResult<T> = std::result::Result<T, WalletError>;

/// Errors raised while encrypting or decrypting stored keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WalletError {
    /// Not Base58, wrong blob length, or wrong header bytes.
    #[error("encrypted key: malformed encoding")]
    Format,

    /// The Base58Check trailer does not match.
    #[error("encrypted key: checksum mismatch")]
    Checksum,

    /// Scrypt cost parameters are out of range.
    #[error(transparent)]
    Kdf(#[from] ont_crypto::scrypt_kdf::KdfError),

    #[error(transparent)]
    Cipher(#[from] ont_crypto::aes_ecb::EcbError),

    #[error(transparent)]
    Key(#[from] ont_crypto::keypair::KeyError),

    /// The decrypted key does not belong to the expected address.
    #[error("encrypted key: decrypted key does not match the expected address")]
    KeyMismatch,
}

impl From<ont_crypto::Base58CheckError> for WalletError {
    fn from(err: ont_crypto::Base58CheckError) -> Self {
        match err {
            ont_crypto::Base58CheckError::Format => WalletError::Format,
            ont_crypto::Base58CheckError::Checksum => WalletError::Checksum,
        }
    }
}
