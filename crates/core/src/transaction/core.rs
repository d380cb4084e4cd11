//! The transaction record, its hash, and signing.

use rand::Rng;
use tracing::debug;

use ont_crypto::hash::hash256;
use ont_crypto::KeyPair;
use ont_io::SerializableExt;

use crate::address::Address;
use crate::CoreResult;

use super::payload::{DeployCode, InvokeCode, Payload};
use super::program::Program;
use super::TransactionAttribute;

/// Transaction type tag. Unknown tags are preserved so that records
/// produced by newer peers survive a decode and re-encode unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxType {
    Deploy,
    Invoke,
    Other(u8),
}

impl TxType {
    pub const DEPLOY: u8 = 0xD0;
    pub const INVOKE: u8 = 0xD1;

    pub fn from_byte(value: u8) -> Self {
        match value {
            Self::DEPLOY => TxType::Deploy,
            Self::INVOKE => TxType::Invoke,
            other => TxType::Other(other),
        }
    }

    pub fn byte(self) -> u8 {
        match self {
            TxType::Deploy => Self::DEPLOY,
            TxType::Invoke => Self::INVOKE,
            TxType::Other(other) => other,
        }
    }
}

/// A fee entry: an amount debited from the paying address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fee {
    pub amount: u64,
    pub payer: Address,
}

impl Fee {
    pub fn new(amount: u64, payer: Address) -> Self {
        Self { amount, payer }
    }
}

/// A transaction, either unsigned or carrying signature programs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub version: u8,
    pub tx_type: TxType,
    pub nonce: u32,
    pub payload: Payload,
    pub attributes: Vec<TransactionAttribute>,
    pub fees: Vec<Fee>,
    pub network_fee: u64,
    pub programs: Vec<Program>,
}

impl Transaction {
    /// Builds an unsigned invocation transaction with a random nonce.
    pub fn invoke(payload: InvokeCode) -> Self {
        Self::with_payload(TxType::Invoke, Payload::Invoke(payload))
    }

    /// Builds an unsigned deployment transaction with a random nonce.
    pub fn deploy(payload: DeployCode) -> Self {
        Self::with_payload(TxType::Deploy, Payload::Deploy(payload))
    }

    fn with_payload(tx_type: TxType, payload: Payload) -> Self {
        Self {
            version: 0,
            tx_type,
            nonce: rand::thread_rng().gen(),
            payload,
            attributes: Vec::new(),
            fees: Vec::new(),
            network_fee: 0,
            programs: Vec::new(),
        }
    }

    /// The transaction hash: hex of the double SHA-256 of the unsigned
    /// serialization. Signature programs are excluded, so signing never
    /// changes the hash.
    pub fn hash(&self) -> CoreResult<String> {
        Ok(hex::encode(hash256(&self.unsigned_bytes()?)))
    }

    /// Signs the unsigned serialization and appends the resulting
    /// signature program. Order of calls fixes program order.
    pub fn sign(&mut self, key_pair: &KeyPair) -> CoreResult<()> {
        let message = self.unsigned_bytes()?;
        let signature = key_pair.sign(&message);
        let public_key = key_pair.public_key().to_compressed().to_vec();
        self.programs.push(Program::new(signature, public_key));
        debug!(
            programs = self.programs.len(),
            tx_type = self.tx_type.byte(),
            "signed transaction"
        );
        Ok(())
    }

    /// Serializes the signed form as lowercase hex.
    pub fn to_hex(&self) -> CoreResult<String> {
        Ok(hex::encode(self.to_array()?))
    }
}
