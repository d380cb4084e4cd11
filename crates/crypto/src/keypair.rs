//! ECDSA key material over NIST P-256.
//!
//! Signatures are computed over the SHA-256 digest of the message and
//! serialized as the fixed 64-byte `r ‖ s` form used in signature
//! programs. Public keys travel in 33-byte compressed SEC1 encoding.

use p256::ecdsa::{
    signature::{Signer, Verifier},
    Signature, SigningKey, VerifyingKey,
};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, Zeroizing};

/// Size of a compressed SEC1 public key.
pub const COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;

/// Size of a raw `r ‖ s` signature.
pub const SIGNATURE_SIZE: usize = 64;

/// Errors raised by key and signature handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The scalar is zero, out of range, or not 32 bytes.
    #[error("key: invalid private key")]
    InvalidPrivateKey,

    /// The bytes are not a valid SEC1 point on the curve.
    #[error("key: invalid public key")]
    InvalidPublicKey,

    /// The bytes are not a valid `r ‖ s` signature.
    #[error("key: invalid signature")]
    InvalidSignature,
}

/// A raw 32-byte private scalar. The backing buffer is zeroed on drop;
/// callers holding copies are responsible for zeroing those themselves.
#[derive(Clone)]
pub struct PrivateKey {
    bytes: Zeroizing<[u8; 32]>,
}

impl PrivateKey {
    /// Validates and wraps a raw 32-byte scalar.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        let array: [u8; 32] = bytes.try_into().map_err(|_| KeyError::InvalidPrivateKey)?;
        SigningKey::from_bytes(&array.into()).map_err(|_| KeyError::InvalidPrivateKey)?;
        Ok(Self {
            bytes: Zeroizing::new(array),
        })
    }

    /// The raw scalar bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Overwrites the scalar bytes with zeros ahead of the drop.
    pub fn zeroize(&mut self) {
        self.bytes.zeroize();
    }

    /// Derives the public point for this scalar.
    pub fn public_key(&self) -> PublicKey {
        let signing = SigningKey::from_bytes(&(*self.bytes).into())
            .expect("scalar validated on construction");
        PublicKey {
            key: *signing.verifying_key(),
        }
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material.
        f.write_str("PrivateKey(..)")
    }
}

/// A P-256 public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey {
    key: VerifyingKey,
}

impl PublicKey {
    /// Parses a SEC1-encoded point (compressed or uncompressed).
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        let key = VerifyingKey::from_sec1_bytes(bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self { key })
    }

    /// The 33-byte compressed SEC1 encoding.
    pub fn to_compressed(&self) -> [u8; COMPRESSED_PUBLIC_KEY_SIZE] {
        let point = self.key.to_encoded_point(true);
        let mut bytes = [0u8; COMPRESSED_PUBLIC_KEY_SIZE];
        bytes.copy_from_slice(point.as_bytes());
        bytes
    }

    /// The 65-byte uncompressed SEC1 encoding.
    pub fn to_uncompressed(&self) -> Vec<u8> {
        self.key.to_encoded_point(false).as_bytes().to_vec()
    }

    /// Verifies a 64-byte `r ‖ s` signature over `message`.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool, KeyError> {
        let signature =
            Signature::from_slice(signature).map_err(|_| KeyError::InvalidSignature)?;
        Ok(self.key.verify(message, &signature).is_ok())
    }
}

/// A private scalar with its derived public point.
#[derive(Debug, Clone)]
pub struct KeyPair {
    private: PrivateKey,
    public: PublicKey,
}

impl KeyPair {
    /// Generates a fresh key pair from the OS random source.
    pub fn generate() -> Self {
        let signing = SigningKey::random(&mut OsRng);
        let private = PrivateKey {
            bytes: Zeroizing::new(signing.to_bytes().into()),
        };
        let public = PublicKey {
            key: *signing.verifying_key(),
        };
        Self { private, public }
    }

    /// Builds a key pair from an existing private key.
    pub fn from_private_key(private: PrivateKey) -> Self {
        let public = private.public_key();
        Self { private, public }
    }

    /// Builds a key pair from raw scalar bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        Ok(Self::from_private_key(PrivateKey::from_bytes(bytes)?))
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Signs `message` (SHA-256 prehash), returning the 64-byte `r ‖ s`.
    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        let signing = SigningKey::from_bytes(&(*self.private.bytes).into())
            .expect("scalar validated on construction");
        let signature: Signature = signing.sign(message);
        signature.to_bytes().to_vec()
    }
}
