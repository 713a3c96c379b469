//! Wire encoding for sealed fields.
//!
//! This module provides:
//! - The `nonce || ciphertext || tag` byte layout
//! - Standard base64 text encoding of that layout

mod envelope;

pub use envelope::Envelope;
