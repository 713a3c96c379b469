//! Error types for fieldseal.

use thiserror::Error;

/// Result type alias for fieldseal operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while sealing or opening a field.
///
/// Everything except [`Error::Crypto`] is caller-correctable and is raised
/// before any cipher work happens on a known-invalid input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Missing plaintext, key, or ciphertext argument.
    #[error("{0}")]
    Validation(String),

    /// Key byte length is not 16 or 32.
    #[error("AES key size must be 16 bytes for 128-bit enc and 32 bytes for 256-bit enc")]
    InvalidKeySize(usize),

    /// Malformed base64 or a blob shorter than nonce + tag.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Tag verification failed (wrong key, corruption, or tampering).
    #[error("Decryption failed: ciphertext could not be authenticated")]
    Authentication,

    /// Decrypted bytes are not valid UTF-8.
    #[error("Decrypted data is not valid UTF-8")]
    Encoding,

    /// The AEAD primitive or the random source failed while encrypting.
    #[error("Encryption failed: internal cipher error")]
    Crypto,
}

/// Stable, matchable name for each [`Error`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ValidationError,
    InvalidKeySize,
    DecodingError,
    AuthenticationFailure,
    EncodingError,
    CryptoFailure,
}

impl Error {
    /// The kind of this error, without any attached detail.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::ValidationError,
            Error::InvalidKeySize(_) => ErrorKind::InvalidKeySize,
            Error::Decoding(_) => ErrorKind::DecodingError,
            Error::Authentication => ErrorKind::AuthenticationFailure,
            Error::Encoding => ErrorKind::EncodingError,
            Error::Crypto => ErrorKind::CryptoFailure,
        }
    }

    /// HTTP status a service should answer with for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::Crypto => 500,
            _ => 400,
        }
    }

    pub(crate) fn missing(what: &str) -> Self {
        Error::Validation(format!("{what} is missing"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_codes() {
        assert_eq!(Error::Validation("x".into()).http_status(), 400);
        assert_eq!(Error::InvalidKeySize(13).http_status(), 400);
        assert_eq!(Error::Decoding("x".into()).http_status(), 400);
        assert_eq!(Error::Authentication.http_status(), 400);
        assert_eq!(Error::Encoding.http_status(), 400);
        assert_eq!(Error::Crypto.http_status(), 500);
    }

    #[test]
    fn test_kinds_match_variants() {
        assert_eq!(Error::missing("Plain text").kind(), ErrorKind::ValidationError);
        assert_eq!(Error::InvalidKeySize(0).kind(), ErrorKind::InvalidKeySize);
        assert_eq!(Error::Authentication.kind(), ErrorKind::AuthenticationFailure);
        assert_eq!(Error::Crypto.kind(), ErrorKind::CryptoFailure);
    }

    #[test]
    fn test_missing_message() {
        assert_eq!(
            Error::missing("Encryption key").to_string(),
            "Encryption key is missing"
        );
    }

    #[test]
    fn test_invalid_key_size_message_is_fixed() {
        assert_eq!(
            Error::InvalidKeySize(13).to_string(),
            "AES key size must be 16 bytes for 128-bit enc and 32 bytes for 256-bit enc"
        );
        assert_eq!(
            Error::InvalidKeySize(13).to_string(),
            Error::InvalidKeySize(33).to_string()
        );
    }

    #[test]
    fn test_authentication_message_has_no_cause() {
        let msg = Error::Authentication.to_string().to_lowercase();
        assert!(!msg.contains("key"));
        assert!(!msg.contains("tamper"));
    }
}
