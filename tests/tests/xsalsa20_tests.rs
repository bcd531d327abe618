//! Known-answer and interface tests for the XSalsa20 stream cipher

use sha2::{Digest, Sha256};
use xsalsa_algorithms::error::Error;
use xsalsa_algorithms::stream::salsa::xsalsa20::{stream, xor};
use xsalsa_algorithms::stream::StreamCipher;
use xsalsa_algorithms::types::Nonce;
use xsalsa_algorithms::{Salsa20, XSalsa20};
use xsalsa_tests::vectors;

#[test]
fn test_xor_known_answers() {
    for (i, vector) in vectors::XOR_VECTORS.iter().enumerate() {
        let out = xor(vector.input, vector.nonce, vector.key).unwrap();
        assert_eq!(
            hex::encode(&out),
            vector.output_hex,
            "XOR vector {} mismatch",
            i
        );
    }
}

#[test]
fn test_stream_first_block() {
    let key = hex::decode(vectors::FIRSTKEY_HEX).unwrap();
    let nonce = hex::decode(vectors::FIRSTNONCE_HEX).unwrap();

    let out = stream(32, &nonce, &key).unwrap();
    assert_eq!(hex::encode(&out), vectors::FIRST_32_HEX);
}

#[test]
fn test_stream_long_run_digest() {
    // Runs the counter across 65536 blocks; catches block-boundary and
    // counter-layout bugs that a single-block vector cannot
    let key = hex::decode(vectors::FIRSTKEY_HEX).unwrap();
    let nonce = hex::decode(vectors::FIRSTNONCE_HEX).unwrap();

    let out = stream(vectors::LONG_STREAM_LEN, &nonce, &key).unwrap();
    assert_eq!(out.len(), vectors::LONG_STREAM_LEN);

    let digest = Sha256::digest(&out);
    assert_eq!(hex::encode(digest), vectors::LONG_STREAM_SHA256);
}

#[test]
fn test_stream_zero_length() {
    let out = stream(0, vectors::ASCII_NONCE, vectors::ASCII_KEY).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_rejects_bad_lengths_without_output() {
    let err = stream(64, &[0u8; 24], &[0u8; 31]).unwrap_err();
    assert_eq!(
        err,
        Error::Length {
            context: "XSalsa20 key",
            expected: 32,
            actual: 31,
        }
    );

    let err = xor(b"payload", &[0u8; 23], &[0u8; 32]).unwrap_err();
    assert_eq!(
        err,
        Error::Length {
            context: "XSalsa20 nonce",
            expected: 24,
            actual: 23,
        }
    );
}

/// Drive any stream cipher through the common trait
fn roundtrip_via_trait<C: StreamCipher>(cipher: &mut C, message: &[u8]) -> Vec<u8> {
    let mut buffer = message.to_vec();
    cipher.encrypt(&mut buffer).unwrap();
    assert_ne!(&buffer[..], message);

    cipher.reset().unwrap();
    cipher.decrypt(&mut buffer).unwrap();
    buffer
}

#[test]
fn test_length_error_converts_to_api_error() {
    let err = stream(64, &[0u8; 24], &[0u8; 16]).unwrap_err();

    let api_err: xsalsa_api::Error = err.into();
    assert_eq!(
        api_err,
        xsalsa_api::Error::InvalidLength {
            context: "XSalsa20 key",
            expected: 32,
            actual: 16,
        }
    );
    assert_eq!(
        api_err.to_string(),
        "XSalsa20 key: invalid length (expected 32, got 16)"
    );
}

#[test]
fn test_trait_sizes_match_params() {
    use xsalsa_params::traditional::salsa;

    assert_eq!(<XSalsa20 as StreamCipher>::KEY_SIZE, salsa::SALSA20_KEY_SIZE);
    assert_eq!(
        <XSalsa20 as StreamCipher>::NONCE_SIZE,
        salsa::XSALSA20_NONCE_SIZE
    );
    assert_eq!(
        <XSalsa20 as StreamCipher>::BLOCK_SIZE,
        salsa::SALSA20_BLOCK_SIZE
    );
    assert_eq!(<Salsa20 as StreamCipher>::NONCE_SIZE, salsa::SALSA20_NONCE_SIZE);
}

#[test]
fn test_stream_cipher_trait_roundtrips() {
    let message = b"the trait surface must behave like the inherent one";

    let mut xsalsa = XSalsa20::new(vectors::ASCII_KEY, &Nonce::<24>::new(*vectors::ASCII_NONCE));
    assert_eq!(roundtrip_via_trait(&mut xsalsa, message), message.to_vec());

    let mut salsa = Salsa20::new(vectors::ASCII_KEY, &Nonce::<8>::new([7u8; 8]));
    assert_eq!(roundtrip_via_trait(&mut salsa, message), message.to_vec());
}

#[test]
fn test_trait_seek_matches_stream_offset() {
    let mut cipher = XSalsa20::new(vectors::ASCII_KEY, &Nonce::<24>::new(*vectors::ASCII_NONCE));
    StreamCipher::seek(&mut cipher, 1).unwrap();

    let mut second_block = [0u8; 64];
    StreamCipher::keystream(&mut cipher, &mut second_block).unwrap();

    let reference = stream(128, vectors::ASCII_NONCE, vectors::ASCII_KEY).unwrap();
    assert_eq!(&second_block[..], &reference[64..]);
}
