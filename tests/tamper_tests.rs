//! Tamper tests - corrupt sealed fields and verify they are rejected.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use fieldseal::{decrypt, decrypt_with_handle, encrypt, make_key_handle, Error};

const KEY: &str = "qwertyuiopoiuytr";
const OTHER_KEY: &str = "poiuytrewqqwerty";

/// Flip a single bit of the decoded blob and re-encode it.
fn flip_bit(sealed: &str, bit: usize) -> String {
    let mut bytes = STANDARD.decode(sealed).expect("Output is not base64");
    bytes[bit / 8] ^= 1 << (bit % 8);
    STANDARD.encode(bytes)
}

#[test]
fn test_every_single_bit_flip_detected() {
    let handle = make_key_handle(KEY).expect("Failed to build handle");
    let sealed = encrypt("HPS_TEST", KEY).expect("Failed to encrypt");
    let total_bits = STANDARD.decode(&sealed).unwrap().len() * 8;

    for bit in 0..total_bits {
        let tampered = flip_bit(&sealed, bit);
        assert_eq!(
            decrypt_with_handle(&tampered, &handle),
            Err(Error::Authentication),
            "bit {bit} flip was not detected"
        );
    }
}

#[test]
fn test_wrong_key_fails() {
    let sealed = encrypt("Secret data", KEY).unwrap();
    assert_eq!(decrypt(&sealed, OTHER_KEY), Err(Error::Authentication));
}

#[test]
fn test_wrong_key_and_tampering_are_indistinguishable() {
    let sealed = encrypt("Secret data", KEY).unwrap();

    let wrong_key = decrypt(&sealed, OTHER_KEY).unwrap_err();
    let tampered = decrypt(&flip_bit(&sealed, 100), KEY).unwrap_err();

    assert_eq!(wrong_key, tampered);
    assert_eq!(wrong_key.to_string(), tampered.to_string());
}

#[test]
fn test_truncated_tag_fails() {
    let sealed = encrypt("Secret data", KEY).unwrap();
    let mut bytes = STANDARD.decode(&sealed).unwrap();
    bytes.pop();

    // Still at least nonce + tag long, so it reaches the cipher.
    assert_eq!(
        decrypt(&STANDARD.encode(&bytes), KEY),
        Err(Error::Authentication)
    );
}

#[test]
fn test_truncated_below_minimum_is_decoding_error() {
    let sealed = encrypt("abc", KEY).unwrap();
    let bytes = STANDARD.decode(&sealed).unwrap();

    for len in [0, 1, 12, 27] {
        let truncated = STANDARD.encode(&bytes[..len]);
        if truncated.is_empty() {
            continue;
        }
        assert!(
            matches!(decrypt(&truncated, KEY), Err(Error::Decoding(_))),
            "length {len} was not rejected as malformed"
        );
    }
}

#[test]
fn test_appended_bytes_fail() {
    let sealed = encrypt("Secret data", KEY).unwrap();
    let mut bytes = STANDARD.decode(&sealed).unwrap();
    bytes.push(0);

    assert_eq!(
        decrypt(&STANDARD.encode(&bytes), KEY),
        Err(Error::Authentication)
    );
}

#[test]
fn test_swapped_nonce_fails() {
    let first = STANDARD.decode(encrypt("Secret data", KEY).unwrap()).unwrap();
    let mut second = STANDARD.decode(encrypt("Secret data", KEY).unwrap()).unwrap();
    second[..12].copy_from_slice(&first[..12]);

    assert_eq!(
        decrypt(&STANDARD.encode(&second), KEY),
        Err(Error::Authentication)
    );
}

#[test]
fn test_malformed_base64_is_decoding_error() {
    for input in ["%%%", "abc", "YWJj=YWJj", "not base64 at all!"] {
        assert!(
            matches!(decrypt(input, KEY), Err(Error::Decoding(_))),
            "{input:?} was not rejected as malformed"
        );
    }
}

#[test]
fn test_blob_wrapped_in_whitespace_is_decoding_error() {
    let sealed = encrypt("HPS_TEST", KEY).unwrap();
    let wrapped = format!("  \n{sealed}\r\n\t ");

    assert!(matches!(decrypt(&wrapped, KEY), Err(Error::Decoding(_))));
    assert_eq!(decrypt(&sealed, KEY).unwrap(), "HPS_TEST");
}
