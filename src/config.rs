//! Configuration constants and types for fieldseal.

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Nonce size for AES-GCM (96 bits).
pub const NONCE_SIZE: usize = 12;

/// Authentication tag size (128 bits).
pub const TAG_SIZE: usize = 16;

/// Shortest valid decoded blob: nonce and tag around an empty ciphertext.
pub const MIN_WIRE_LEN: usize = NONCE_SIZE + TAG_SIZE;

/// Environment variable the CLI reads the key from by default.
pub const DEFAULT_KEY_ENV: &str = "FIELDSEAL_KEY";

/// Supported AES key sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySize {
    /// 16-byte key, AES-128-GCM.
    Aes128,
    /// 32-byte key, AES-256-GCM.
    Aes256,
}

impl KeySize {
    /// Classify a key by its byte length.
    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(KeySize::Aes128),
            32 => Ok(KeySize::Aes256),
            other => Err(Error::InvalidKeySize(other)),
        }
    }

    /// Key length in bytes.
    pub fn byte_len(self) -> usize {
        match self {
            KeySize::Aes128 => 16,
            KeySize::Aes256 => 32,
        }
    }

    /// Key length in bits.
    pub fn bits(self) -> usize {
        self.byte_len() * 8
    }
}

/// Where the CLI takes its key from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    /// Read from an environment variable.
    Env(String),
    /// Read from a file; one trailing newline is dropped.
    File(PathBuf),
    /// Ask on the terminal without echo.
    Prompt,
}

impl Default for KeySource {
    fn default() -> Self {
        KeySource::Env(DEFAULT_KEY_ENV.to_string())
    }
}

impl KeySource {
    /// Load the raw key bytes. Size is checked later, by the handle.
    pub fn load(&self) -> Result<Vec<u8>> {
        let raw = match self {
            KeySource::Env(var) => std::env::var(var)
                .map_err(|_| Error::Validation(format!("Environment variable {var} is not set")))?
                .into_bytes(),
            KeySource::File(path) => std::fs::read(path).map_err(|e| {
                Error::Validation(format!("Cannot read key file {}: {e}", path.display()))
            })?,
            KeySource::Prompt => rpassword::prompt_password("Encryption key: ")
                .map_err(|e| Error::Validation(format!("Cannot read key from terminal: {e}")))?
                .into_bytes(),
        };

        let key = strip_line_ending(raw);
        if key.is_empty() {
            return Err(Error::missing("Encryption key"));
        }
        Ok(key)
    }
}

fn strip_line_ending(mut raw: Vec<u8>) -> Vec<u8> {
    if raw.last() == Some(&b'\n') {
        raw.pop();
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
    }
    raw
}
