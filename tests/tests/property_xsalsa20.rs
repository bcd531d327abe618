//! Property-based tests for the XSalsa20 stream cipher

use proptest::prelude::*;
use xsalsa_algorithms::stream::salsa::xsalsa20::{stream, xor};

proptest! {
    #[test]
    fn xsalsa20_xor_roundtrip(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 24]>(),
        data in prop::collection::vec(any::<u8>(), 0..=512)
    ) {
        let ciphertext = xor(&data, &nonce, &key).unwrap();
        prop_assert_eq!(ciphertext.len(), data.len());

        let plaintext = xor(&ciphertext, &nonce, &key).unwrap();
        prop_assert_eq!(plaintext, data);
    }

    #[test]
    fn xsalsa20_stream_length_and_prefix(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 24]>(),
        len in 0usize..=512,
        extra in 0usize..=192
    ) {
        let short = stream(len, &nonce, &key).unwrap();
        prop_assert_eq!(short.len(), len);

        let long = stream(len + extra, &nonce, &key).unwrap();
        prop_assert_eq!(&long[..len], &short[..]);
    }

    #[test]
    fn xsalsa20_key_bit_avalanche(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 24]>(),
        byte_index in 0usize..32,
        bit in 0u32..8
    ) {
        let base = stream(256, &nonce, &key).unwrap();

        let mut flipped_key = key;
        flipped_key[byte_index] ^= 1 << bit;
        let flipped = stream(256, &nonce, &flipped_key).unwrap();

        // Unrelated keystreams agree on roughly 1/256 of bytes; far more
        // agreement than that means the flipped bit failed to diffuse
        let differing = base
            .iter()
            .zip(flipped.iter())
            .filter(|(a, b)| a != b)
            .count();
        prop_assert!(differing > 192, "only {} of 256 bytes changed", differing);
    }

    #[test]
    fn xsalsa20_nonce_bit_avalanche(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 24]>(),
        byte_index in 0usize..24,
        bit in 0u32..8
    ) {
        let base = stream(256, &nonce, &key).unwrap();

        let mut flipped_nonce = nonce;
        flipped_nonce[byte_index] ^= 1 << bit;
        let flipped = stream(256, &flipped_nonce, &key).unwrap();

        let differing = base
            .iter()
            .zip(flipped.iter())
            .filter(|(a, b)| a != b)
            .count();
        prop_assert!(differing > 192, "only {} of 256 bytes changed", differing);
    }
}
