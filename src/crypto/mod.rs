//! Cryptographic operations for fieldseal.
//!
//! This module provides:
//! - AES-128-GCM / AES-256-GCM sealing of text fields
//! - Reusable, validated key handles

mod cipher;
mod key;

pub use cipher::{decrypt, decrypt_with_handle, encrypt, encrypt_with_handle};
pub use key::{make_key_handle, KeyHandle};
