//! Binary serialization primitives for the Ontology wire format.
//!
//! The wire format is built from two composite primitives: variable-length
//! integers (1/3/5/9 bytes, `0xFD`/`0xFE`/`0xFF` prefixed) and
//! variable-length byte strings (varint length followed by raw bytes).
//! All fixed-width integers are little-endian; hash and address fields are
//! raw byte sequences and never pass through numeric conversion.

mod reader;
mod serializable;
mod writer;

pub use reader::MemoryReader;
pub use serializable::{helper, Serializable, SerializableExt};
pub use writer::BinaryWriter;

use thiserror::Error;

/// Result type for IO operations.
pub type IoResult<T> = std::result::Result<T, IoError>;

/// Errors raised while reading or writing wire bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IoError {
    /// The input ended before a complete value could be read.
    #[error("unexpected end of data at position {position}")]
    UnexpectedEof { position: usize },

    /// A decoded value violated a structural constraint.
    #[error("invalid {context}: {value}")]
    InvalidData { context: String, value: String },

    /// A var-string did not contain valid UTF-8.
    #[error("invalid utf-8 in var-string")]
    InvalidUtf8,
}
