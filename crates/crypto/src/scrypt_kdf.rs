//! Scrypt key derivation for the password-based key encryption scheme.

use thiserror::Error;
use zeroize::Zeroizing;

/// Errors raised by scrypt derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KdfError {
    /// N not a power of two, or r/p out of range.
    #[error("scrypt: invalid cost parameters")]
    InvalidParams,

    /// The requested output length is unsupported.
    #[error("scrypt: invalid derived key length")]
    InvalidOutputLength,
}

/// Derives an `N`-byte key from `passphrase` and `salt`.
///
/// The cost parameters feed the derived bytes directly, so they must
/// match the ones used at encryption time exactly.
pub fn derive_key<const N: usize>(
    passphrase: &[u8],
    salt: &[u8],
    n: u64,
    r: u32,
    p: u32,
) -> Result<Zeroizing<[u8; N]>, KdfError> {
    if n.count_ones() != 1 {
        return Err(KdfError::InvalidParams);
    }

    let params = scrypt::Params::new(n.ilog2() as u8, r, p, N)
        .map_err(|_| KdfError::InvalidParams)?;

    let mut derived = Zeroizing::new([0u8; N]);
    scrypt::scrypt(passphrase, salt, &params, derived.as_mut_slice())
        .map_err(|_| KdfError::InvalidOutputLength)?;

    Ok(derived)
}
