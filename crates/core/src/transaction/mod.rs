//! The canonical transaction record and its wire codec.
//!
//! Layout of the unsigned portion, in serialization order:
//!
//! ```text
//! version(1B) ‖ type(1B) ‖ nonce(4B LE) ‖ payload
//!   ‖ varint(len(attributes)) ‖ attributes[]
//!   ‖ varint(len(fees)) ‖ fees[] ‖ network_fee(8B LE)
//! ```
//!
//! The signed form appends `varint(len(programs)) ‖ programs[]`. The
//! transaction hash covers only the unsigned portion, so adding signature
//! programs never changes the hash.

mod attributes;
mod core;
mod payload;
mod program;
mod serialization;

pub use attributes::{AttributeUsage, TransactionAttribute};
pub use self::core::{Fee, Transaction, TxType};
pub use payload::{DeployCode, InvokeCode, Payload, VmType};
pub use program::Program;

/// Upper bound on attribute count accepted while deserializing.
pub const MAX_TX_ATTRIBUTES: usize = 16;

/// Upper bound on fee entries accepted while deserializing.
pub const MAX_TX_FEES: usize = 16;

/// Upper bound on signature programs accepted while deserializing.
pub const MAX_TX_PROGRAMS: usize = 16;

/// Upper bound on any single variable-length field.
pub const MAX_WIRE_FIELD_SIZE: usize = 1024 * 1024;
