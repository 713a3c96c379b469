//! Text envelope for sealed fields.
//!
//! Layout of the decoded bytes:
//!
//! ```text
//! nonce (12 bytes) || ciphertext (N bytes) || tag (16 bytes)
//! ```
//!
//! encoded as standard base64 with padding.

use crate::config::{MIN_WIRE_LEN, NONCE_SIZE, TAG_SIZE};
use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// A decoded sealed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    nonce: [u8; NONCE_SIZE],
    /// ciphertext || tag
    sealed: Vec<u8>,
}

impl Envelope {
    /// Assemble an envelope from a nonce and the AEAD output (ciphertext || tag).
    pub(crate) fn new(nonce: [u8; NONCE_SIZE], sealed: Vec<u8>) -> Self {
        debug_assert!(sealed.len() >= TAG_SIZE);
        Self { nonce, sealed }
    }

    /// Decode an encoded field.
    ///
    /// Fails with [`Error::Decoding`] on malformed base64 or when the decoded
    /// bytes are shorter than nonce + tag.
    pub fn parse(encoded: &str) -> Result<Self> {
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| Error::Decoding(format!("invalid base64: {e}")))?;
        Self::from_bytes(&bytes)
    }

    /// Split raw wire bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < MIN_WIRE_LEN {
            return Err(Error::Decoding(format!(
                "ciphertext too short: need at least {MIN_WIRE_LEN} bytes, got {}",
                bytes.len()
            )));
        }

        let (nonce_bytes, sealed) = bytes.split_at(NONCE_SIZE);
        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(nonce_bytes);

        Ok(Self {
            nonce,
            sealed: sealed.to_vec(),
        })
    }

    /// Wire bytes: nonce || ciphertext || tag.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(NONCE_SIZE + self.sealed.len());
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.sealed);
        out
    }

    /// Base64 (standard, padded) of the wire bytes.
    pub fn encode(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    pub fn nonce(&self) -> &[u8; NONCE_SIZE] {
        &self.nonce
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.sealed[..self.plaintext_len()]
    }

    pub fn tag(&self) -> &[u8] {
        &self.sealed[self.plaintext_len()..]
    }

    /// Length of the plaintext this envelope carries.
    pub fn plaintext_len(&self) -> usize {
        self.sealed.len() - TAG_SIZE
    }

    /// ciphertext || tag, the input the AEAD open step expects.
    pub(crate) fn sealed(&self) -> &[u8] {
        &self.sealed
    }
}
