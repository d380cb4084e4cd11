//! The encrypted private key scheme.
//!
//! Blob layout before Base58Check:
//!
//! ```text
//! 0x01 0x42 ‖ 0xE0 ‖ address_hash(4B) ‖ ciphertext(32B)
//! ```
//!
//! The salt is the first four bytes of the double SHA-256 of the Base58
//! address string. The same four bytes are stored in the blob so tooling
//! can associate a key with its address without decrypting.

use tracing::debug;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

use ont_core::Address;
use ont_crypto::hash::hash256;
use ont_crypto::keypair::PrivateKey;
use ont_crypto::scrypt_kdf::{derive_key, KdfError};
use ont_crypto::{aes_ecb, base58check};

use crate::{ScryptParameters, WalletError, WalletResult};

const HEADER: [u8; 3] = [0x01, 0x42, 0xE0];
const ADDRESS_HASH_LEN: usize = 4;
const CIPHERTEXT_LEN: usize = 32;
const BLOB_LEN: usize = HEADER.len() + ADDRESS_HASH_LEN + CIPHERTEXT_LEN;

/// First four bytes of the double SHA-256 of the address string.
fn address_hash(address: &Address) -> [u8; ADDRESS_HASH_LEN] {
    let digest = hash256(address.to_base58().as_bytes());
    let mut hash = [0u8; ADDRESS_HASH_LEN];
    hash.copy_from_slice(&digest[..ADDRESS_HASH_LEN]);
    hash
}

/// NFC-normalized passphrase bytes. Composed and decomposed spellings of
/// the same text derive the same key.
fn normalized(passphrase: &str) -> Zeroizing<Vec<u8>> {
    Zeroizing::new(passphrase.nfc().collect::<String>().into_bytes())
}

fn derive_halves(
    passphrase: &str,
    salt: &[u8; ADDRESS_HASH_LEN],
    params: &ScryptParameters,
) -> WalletResult<(Zeroizing<[u8; 32]>, Zeroizing<[u8; 32]>)> {
    if !params.is_valid() {
        return Err(WalletError::Kdf(KdfError::InvalidParams));
    }

    let derived = derive_key::<64>(&normalized(passphrase), salt, params.n, params.r, params.p)?;
    let mut half1 = Zeroizing::new([0u8; 32]);
    half1.copy_from_slice(&derived[..32]);
    let mut half2 = Zeroizing::new([0u8; 32]);
    half2.copy_from_slice(&derived[32..]);
    Ok((half1, half2))
}

/// Encrypts a private key under `passphrase` for storage.
pub fn encrypt_private_key(
    private_key: &PrivateKey,
    address: &Address,
    passphrase: &str,
    params: &ScryptParameters,
) -> WalletResult<String> {
    let salt = address_hash(address);
    let (xor_half, cipher_half) = derive_halves(passphrase, &salt, params)?;

    let mut ciphertext = [0u8; CIPHERTEXT_LEN];
    for (out, (key, pad)) in ciphertext
        .iter_mut()
        .zip(private_key.as_bytes().iter().zip(xor_half.iter()))
    {
        *out = key ^ pad;
    }
    aes_ecb::encrypt_aligned(&cipher_half, &mut ciphertext)?;

    let mut blob = [0u8; BLOB_LEN];
    blob[..3].copy_from_slice(&HEADER);
    blob[3..7].copy_from_slice(&salt);
    blob[7..].copy_from_slice(&ciphertext);

    debug!(address = %address, n = params.n, "encrypted private key");
    Ok(base58check::encode(&blob))
}

/// Decrypts a stored key.
///
/// The passphrase is not authenticated: a wrong passphrase yields a
/// different, structurally valid key. Use [`decrypt_verified`] when the
/// owning address is known.
pub fn decrypt_private_key(
    encrypted: &str,
    passphrase: &str,
    params: &ScryptParameters,
) -> WalletResult<PrivateKey> {
    let blob = base58check::decode(encrypted)?;
    if blob.len() != BLOB_LEN || blob[..3] != HEADER {
        return Err(WalletError::Format);
    }

    let mut salt = [0u8; ADDRESS_HASH_LEN];
    salt.copy_from_slice(&blob[3..7]);
    let (xor_half, cipher_half) = derive_halves(passphrase, &salt, params)?;

    let mut plaintext = Zeroizing::new([0u8; CIPHERTEXT_LEN]);
    plaintext.copy_from_slice(&blob[7..]);
    aes_ecb::decrypt_aligned(&cipher_half, plaintext.as_mut_slice())?;
    for (byte, pad) in plaintext.iter_mut().zip(xor_half.iter()) {
        *byte ^= pad;
    }

    Ok(PrivateKey::from_bytes(plaintext.as_slice())?)
}

/// Decrypts a stored key and confirms it belongs to `address`.
pub fn decrypt_verified(
    encrypted: &str,
    passphrase: &str,
    address: &Address,
    params: &ScryptParameters,
) -> WalletResult<PrivateKey> {
    let private_key = decrypt_private_key(encrypted, passphrase, params)?;
    let derived = Address::from_public_key(&private_key.public_key());
    if address_hash(&derived) != address_hash(address) {
        debug!(address = %address, "encrypted key verification failed");
        return Err(WalletError::KeyMismatch);
    }
    Ok(private_key)
}
