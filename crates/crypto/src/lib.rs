//! Cryptographic primitives for the Ontology SDK.
//!
//! Everything in this crate is a pure, deterministic computation over
//! byte slices: hash combinations, Base58Check and WIF encodings, ECDSA
//! over NIST P-256, scrypt key derivation, the raw AES-256-ECB block
//! cipher used by the encrypted-key scheme, and Merkle audit-path
//! verification. The only non-determinism is key generation, which draws
//! from the operating system's secure random source.

pub mod aes_ecb;
pub mod base58check;
pub mod hash;
pub mod keypair;
pub mod merkle;
pub mod scrypt_kdf;
pub mod wif;

pub use base58check::Base58CheckError;
pub use keypair::{KeyPair, PrivateKey, PublicKey};
pub use merkle::{MerkleError, MerkleProof};
