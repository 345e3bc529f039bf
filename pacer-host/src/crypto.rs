// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! AES-256-CBC encryption helpers.
//!
//! The payload format is the IV followed by the ciphertext: [`encrypt`]
//! draws a fresh random 16-byte IV per call and prepends it, [`decrypt`]
//! splits it back off. Keys are raw 32-byte values; [`derive_key`] produces
//! one from a passphrase via SHA-256.
//!
//! These are thin wrappers, not a protocol: no authentication tag, no key
//! stretching, no versioning.

use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use pacer_core::{PacerError, Result};
use rand::RngCore;
use sha2::{Digest, Sha256};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// IV length in bytes (AES block size).
pub const IV_LEN: usize = 16;

/// Encrypts plaintext with AES-256-CBC and PKCS#7 padding.
///
/// Returns the random IV followed by the ciphertext, ready for
/// [`decrypt`]. Encrypting the same plaintext twice yields different
/// payloads.
///
/// # Errors
/// Returns an error when the key is not [`KEY_LEN`] bytes.
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let mut iv = [0u8; IV_LEN];
    rand::rng().fill_bytes(&mut iv);

    let cipher = Aes256CbcEnc::new_from_slices(key, &iv).map_err(|_| {
        PacerError::crypto_error(format!(
            "encryption key must be {KEY_LEN} bytes, got {}",
            key.len()
        ))
    })?;
    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut payload = Vec::with_capacity(IV_LEN + ciphertext.len());
    payload.extend_from_slice(&iv);
    payload.extend_from_slice(&ciphertext);
    Ok(payload)
}

/// Decrypts a payload produced by [`encrypt`].
///
/// # Errors
/// Returns an error when the key is not [`KEY_LEN`] bytes, the payload is
/// too short to carry an IV, or padding does not check out after
/// decryption (wrong key or corrupted payload).
pub fn decrypt(payload: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    if payload.len() < IV_LEN {
        return Err(PacerError::crypto_error(format!(
            "payload of {} bytes is too short to carry a {IV_LEN}-byte IV",
            payload.len()
        )));
    }
    let (iv, ciphertext) = payload.split_at(IV_LEN);

    let cipher = Aes256CbcDec::new_from_slices(key, iv).map_err(|_| {
        PacerError::crypto_error(format!(
            "decryption key must be {KEY_LEN} bytes, got {}",
            key.len()
        ))
    })?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| PacerError::crypto_error("wrong key or corrupted payload"))
}

/// Derives a 32-byte key from a passphrase via SHA-256.
///
/// Deterministic; the same passphrase always yields the same key. For
/// interactive secrets prefer a real KDF upstream and pass the raw key in.
#[must_use]
pub fn derive_key(passphrase: &str) -> [u8; KEY_LEN] {
    Sha256::digest(passphrase.as_bytes()).into()
}
