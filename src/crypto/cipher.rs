//! AES-GCM sealing and opening of text fields.

use crate::config::NONCE_SIZE;
use crate::crypto::key::KeyHandle;
use crate::encoding::Envelope;
use crate::error::{Error, Result};
use rand::rngs::OsRng;
use rand::RngCore;

/// Encrypt `plaintext` with a prepared [`KeyHandle`].
///
/// Every call draws a fresh 96-bit nonce from the OS random source. No
/// associated data is bound.
///
/// Returns: base64(nonce (12 bytes) || ciphertext || tag (16 bytes))
pub fn encrypt_with_handle(plaintext: &str, handle: &KeyHandle) -> Result<String> {
    if plaintext.is_empty() {
        return Err(Error::missing("Plain text"));
    }

    let mut nonce = [0u8; NONCE_SIZE];
    OsRng.try_fill_bytes(&mut nonce).map_err(|e| {
        tracing::error!(error = %e, "random source failed while drawing nonce");
        Error::Crypto
    })?;

    let sealed = handle.seal(&nonce, plaintext.as_bytes()).map_err(|e| {
        tracing::error!(handle_id = handle.id(), "AEAD encryption failed");
        e
    })?;

    Ok(Envelope::new(nonce, sealed).encode())
}

/// Decrypt a field produced by [`encrypt_with_handle`].
///
/// A wrong key, corrupted bytes, and tampering all surface as the same
/// [`Error::Authentication`].
pub fn decrypt_with_handle(ciphertext: &str, handle: &KeyHandle) -> Result<String> {
    if ciphertext.is_empty() {
        return Err(Error::missing("Encrypted text"));
    }

    let envelope = Envelope::parse(ciphertext)?;

    let plaintext = handle
        .open(envelope.nonce(), envelope.sealed())
        .map_err(|e| {
            tracing::warn!(handle_id = handle.id(), "field failed authentication");
            e
        })?;

    String::from_utf8(plaintext).map_err(|_| Error::Encoding)
}

/// Encrypt `plaintext` with a raw 16- or 32-byte key.
///
/// Builds a transient [`KeyHandle`]; prefer [`encrypt_with_handle`] when
/// sealing many fields with the same key.
pub fn encrypt(plaintext: &str, key: impl AsRef<[u8]>) -> Result<String> {
    let key = key.as_ref();
    if key.is_empty() {
        return Err(Error::missing("Encryption key"));
    }
    if plaintext.is_empty() {
        return Err(Error::missing("Plain text"));
    }

    let handle = KeyHandle::new(key)?;
    encrypt_with_handle(plaintext, &handle)
}

/// Decrypt a field with a raw 16- or 32-byte key.
pub fn decrypt(ciphertext: &str, key: impl AsRef<[u8]>) -> Result<String> {
    let key = key.as_ref();
    if key.is_empty() {
        return Err(Error::missing("Encryption key"));
    }
    if ciphertext.is_empty() {
        return Err(Error::missing("Encrypted text"));
    }

    let handle = KeyHandle::new(key)?;
    decrypt_with_handle(ciphertext, &handle)
}
