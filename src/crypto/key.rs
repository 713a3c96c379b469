//! Validated AES-GCM key handles.

use crate::config::{KeySize, NONCE_SIZE};
use crate::error::{Error, Result};
use aes_gcm::aead::Aead;
use aes_gcm::{Aes128Gcm, Aes256Gcm, KeyInit, Nonce};
use rand::RngCore;
use std::fmt;

/// Random bytes behind [`KeyHandle::id`].
const HANDLE_ID_LEN: usize = 8;

enum Engine {
    Aes128(Aes128Gcm),
    Aes256(Aes256Gcm),
}

/// A validated key and its expanded AES-GCM key schedule.
///
/// Building the key schedule is the costly part of setup, so services that
/// seal many fields with one key should build a single handle and reuse it.
/// The handle is immutable and `Send + Sync`; wrap it in an `Arc` to share
/// it between threads.
pub struct KeyHandle {
    engine: Engine,
    id: String,
}

impl KeyHandle {
    /// Validate `key` and derive its key schedule.
    ///
    /// Fails with [`Error::Validation`] for an empty key and
    /// [`Error::InvalidKeySize`] for any length other than 16 or 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self> {
        if key.is_empty() {
            return Err(Error::missing("Encryption key"));
        }
        let size = KeySize::from_len(key.len())?;

        let engine = match size {
            KeySize::Aes128 => Aes128Gcm::new_from_slice(key).map(Engine::Aes128),
            KeySize::Aes256 => Aes256Gcm::new_from_slice(key).map(Engine::Aes256),
        }
        .map_err(|_| Error::InvalidKeySize(key.len()))?;

        let mut id_bytes = [0u8; HANDLE_ID_LEN];
        rand::thread_rng().fill_bytes(&mut id_bytes);
        let id = hex::encode(id_bytes);

        tracing::debug!(key_bits = size.bits(), handle_id = %id, "built key handle");
        Ok(Self { engine, id })
    }

    /// Size of the wrapped key.
    pub fn key_size(&self) -> KeySize {
        match self.engine {
            Engine::Aes128(_) => KeySize::Aes128,
            Engine::Aes256(_) => KeySize::Aes256,
        }
    }

    /// Random hex id drawn when the handle is built. Carries nothing about
    /// the key, so two handles over the same key get different ids.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns ciphertext || tag.
    pub(crate) fn seal(&self, nonce: &[u8; NONCE_SIZE], plaintext: &[u8]) -> Result<Vec<u8>> {
        let nonce = Nonce::from_slice(nonce);
        let sealed = match &self.engine {
            Engine::Aes128(cipher) => cipher.encrypt(nonce, plaintext),
            Engine::Aes256(cipher) => cipher.encrypt(nonce, plaintext),
        };
        sealed.map_err(|_| Error::Crypto)
    }

    /// Expects ciphertext || tag.
    pub(crate) fn open(&self, nonce: &[u8; NONCE_SIZE], sealed: &[u8]) -> Result<Vec<u8>> {
        let nonce = Nonce::from_slice(nonce);
        let opened = match &self.engine {
            Engine::Aes128(cipher) => cipher.decrypt(nonce, sealed),
            Engine::Aes256(cipher) => cipher.decrypt(nonce, sealed),
        };
        opened.map_err(|_| Error::Authentication)
    }
}

impl fmt::Debug for KeyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyHandle")
            .field("key_size", &self.key_size())
            .field("id", &self.id)
            .finish()
    }
}

impl TryFrom<&[u8]> for KeyHandle {
    type Error = Error;

    fn try_from(key: &[u8]) -> Result<Self> {
        Self::new(key)
    }
}

impl TryFrom<&str> for KeyHandle {
    type Error = Error;

    /// The key size is the UTF-8 byte length of `key`, not its char count.
    fn try_from(key: &str) -> Result<Self> {
        Self::new(key.as_bytes())
    }
}

/// Build a reusable [`KeyHandle`] from raw key bytes.
pub fn make_key_handle(key: impl AsRef<[u8]>) -> Result<KeyHandle> {
    KeyHandle::new(key.as_ref())
}
