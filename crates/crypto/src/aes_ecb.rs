//! Raw AES-256-ECB block operations.
//!
//! The encrypted-key scheme encrypts exactly two cipher blocks with no
//! padding and no chaining, so the cipher is applied block-by-block over
//! an aligned buffer.

use aes::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes256;
use thiserror::Error;

const AES_BLOCK_SIZE: usize = 16;

/// Errors raised by the block cipher wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EcbError {
    /// The buffer is not a multiple of the AES block size.
    #[error("aes-ecb: data length not block-aligned")]
    UnalignedData,
}

/// Encrypts `data` in place with AES-256-ECB, no padding.
pub fn encrypt_aligned(key: &[u8; 32], data: &mut [u8]) -> Result<(), EcbError> {
    if data.len() % AES_BLOCK_SIZE != 0 {
        return Err(EcbError::UnalignedData);
    }

    let cipher = Aes256::new(GenericArray::from_slice(key));
    for chunk in data.chunks_mut(AES_BLOCK_SIZE) {
        cipher.encrypt_block(GenericArray::from_mut_slice(chunk));
    }
    Ok(())
}

/// Decrypts `data` in place with AES-256-ECB, no padding.
pub fn decrypt_aligned(key: &[u8; 32], data: &mut [u8]) -> Result<(), EcbError> {
    if data.len() % AES_BLOCK_SIZE != 0 {
        return Err(EcbError::UnalignedData);
    }

    let cipher = Aes256::new(GenericArray::from_slice(key));
    for chunk in data.chunks_mut(AES_BLOCK_SIZE) {
        cipher.decrypt_block(GenericArray::from_mut_slice(chunk));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypt_decrypt_round_trip() {
        let key = [0x42u8; 32];
        let mut data = *b"exactly 32 bytes of plaintext!!!";
        let original = data;

        encrypt_aligned(&key, &mut data).unwrap();
        assert_ne!(data, original);
        decrypt_aligned(&key, &mut data).unwrap();
        assert_eq!(data, original);
    }

    #[test]
    fn unaligned_buffer_is_rejected() {
        let key = [0u8; 32];
        let mut data = [0u8; 17];
        assert_eq!(
            encrypt_aligned(&key, &mut data).unwrap_err(),
            EcbError::UnalignedData
        );
        assert_eq!(
            decrypt_aligned(&key, &mut data).unwrap_err(),
            EcbError::UnalignedData
        );
    }

    #[test]
    fn ecb_blocks_are_independent() {
        let key = [7u8; 32];
        let mut data = [0xAAu8; 32];
        encrypt_aligned(&key, &mut data).unwrap();
        // Identical plaintext blocks yield identical ciphertext blocks.
        assert_eq!(data[..16], data[16..]);
    }
}
