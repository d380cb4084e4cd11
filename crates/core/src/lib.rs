//! Addresses and the canonical transaction wire codec.

pub mod address;
pub mod transaction;

pub use address::{Address, AddressError, ADDRESS_VERSION};
pub use transaction::{
    AttributeUsage, DeployCode, Fee, InvokeCode, Payload, Program, Transaction,
    TransactionAttribute, TxType, VmType,
};

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Errors raised while building, signing, or (de)serializing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error(transparent)]
    Io(#[from] ont_io::IoError),

    #[error(transparent)]
    Key(#[from] ont_crypto::keypair::KeyError),

    #[error(transparent)]
    Address(#[from] AddressError),
}
