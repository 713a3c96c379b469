//! Field Seal
//!
//! Authenticated encryption of short text fields (secrets, PII) into
//! base64 blobs that are safe to store in text columns or send over the wire.
//!
//! # Features
//!
//! - **AES-GCM**: 128- or 256-bit keys, 96-bit random nonce per call, 128-bit tag
//! - **Key handles**: build the key schedule once and share it across threads
//! - **Flat errors**: validation, decoding and authentication failures are distinct
//!
//! # Wire format
//!
//! ```text
//! base64( nonce (12) || ciphertext (N) || tag (16) )
//! ```
//!
//! # Example
//!
//! ```rust
//! use fieldseal::{decrypt_with_handle, encrypt_with_handle, make_key_handle};
//!
//! let handle = make_key_handle("qwertyuiopoiuytr").unwrap();
//!
//! let sealed = encrypt_with_handle("HPS_TEST", &handle).unwrap();
//! let opened = decrypt_with_handle(&sealed, &handle).unwrap();
//! assert_eq!(opened, "HPS_TEST");
//! ```

pub mod config;
pub mod crypto;
pub mod encoding;
pub mod error;

pub use config::{KeySize, KeySource};
pub use crypto::{
    decrypt, decrypt_with_handle, encrypt, encrypt_with_handle, make_key_handle, KeyHandle,
};
pub use encoding::Envelope;
pub use error::{Error, ErrorKind, Result};
