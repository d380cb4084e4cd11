//! Rust SDK for the Ontology-compatible blockchain protocol.
//!
//! The SDK is split into focused crates, re-exported here under one
//! roof:
//!
//! - [`ont_io`]: little-endian wire primitives and the [`Serializable`]
//!   trait.
//! - [`ont_crypto`]: hashing, Base58Check and WIF encodings, P-256
//!   ECDSA, scrypt, and Merkle audit-path verification.
//! - [`ont_vm`]: invocation script construction for the legacy VM.
//! - [`ont_core`]: addresses and the transaction wire codec.
//! - [`ont_wallet`]: password-based private key encryption.
//!
//! # Example
//!
//! Build, sign, and serialize a contract invocation:
//!
//! ```
//! use ont_sdk::{Address, InvokeCode, KeyPair, ScriptValue, Transaction};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sender = KeyPair::generate();
//! let contract = Address::from_base58("AceQbAj2xuFLiH5hQAHMnV39wtmjUKiVRj")?;
//!
//! let payload = InvokeCode::for_contract_call(
//!     &contract,
//!     "transfer",
//!     &[
//!         ScriptValue::Address(*Address::from_public_key(sender.public_key()).as_bytes()),
//!         ScriptValue::Int(500),
//!     ],
//! );
//!
//! let mut tx = Transaction::invoke(payload);
//! tx.sign(&sender)?;
//!
//! let raw = tx.to_hex()?;
//! let id = tx.hash()?;
//! # assert_eq!(id.len(), 64);
//! # let _ = raw;
//! # Ok(())
//! # }
//! ```

pub use ont_io::{IoError, Serializable, SerializableExt};

pub use ont_crypto::wif;
pub use ont_crypto::{KeyPair, MerkleError, MerkleProof, PrivateKey, PublicKey};

pub use ont_vm::{OpCode, ScriptBuilder, ScriptValue};

pub use ont_core::{
    Address, AddressError, AttributeUsage, CoreError, DeployCode, Fee, InvokeCode, Payload,
    Program, Transaction, TransactionAttribute, TxType, VmType,
};

pub use ont_wallet::{
    decrypt_private_key, decrypt_verified, encrypt_private_key, ScryptParameters, WalletError,
};
