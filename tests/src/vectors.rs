//! Known-answer fixtures for the XSalsa20 stream cipher
//!
//! The byte-level vectors come from the NaCl test suite; the ASCII fixtures
//! are the ones commonly used to cross-check XSalsa20 implementations
//! against each other.

/// A single XOR known-answer vector
pub struct XorVector {
    /// Input bytes fed to the cipher
    pub input: &'static [u8],
    /// 24-byte nonce
    pub nonce: &'static [u8],
    /// 32-byte key
    pub key: &'static [u8],
    /// Expected output, hex encoded
    pub output_hex: &'static str,
}

/// ASCII key fixture shared by the XOR vectors
pub const ASCII_KEY: &[u8; 32] = b"this is 32-byte key for xsalsa20";

/// ASCII nonce fixture shared by the XOR vectors
pub const ASCII_NONCE: &[u8; 24] = b"24-byte nonce for xsalsa";

/// XOR known-answer vectors
pub const XOR_VECTORS: &[XorVector] = &[
    XorVector {
        input: b"Hello world!",
        nonce: ASCII_NONCE,
        key: ASCII_KEY,
        output_hex: "002d4513843fc240c401e541",
    },
    // XOR with zeros reveals the raw keystream
    XorVector {
        input: &[0u8; 64],
        nonce: ASCII_NONCE,
        key: ASCII_KEY,
        output_hex: "4848297feb1fb52fb66d81609bd547fabcbe7026edc8b5e5e449d088bfa69c08\
                     8f5d8da1d791267c2c195a7f8cae9c4b4050d08ce6d3a151ec265f3a58e47648",
    },
];

/// NaCl stream-test key, hex encoded
pub const FIRSTKEY_HEX: &str = "1b27556473e985d462cd51197a9a46c76009549eac6474f206c4ee0844f68389";

/// NaCl stream-test nonce, hex encoded
pub const FIRSTNONCE_HEX: &str = "69696ee955b62b73cd62bda875fc73d68219e0036b7a0b37";

/// First 32 keystream bytes under `FIRSTKEY_HEX`/`FIRSTNONCE_HEX`
pub const FIRST_32_HEX: &str = "eea6a7251c1e72916d11c2cb214d3c252539121d8e234e652d651fa4c8cff880";

/// Length of the long-run keystream sample
pub const LONG_STREAM_LEN: usize = 4_194_304;

/// SHA-256 of the `LONG_STREAM_LEN`-byte keystream under the same key/nonce
pub const LONG_STREAM_SHA256: &str =
    "662b9d0e3463029156069b12f918691a98f7dfb2ca0393c96bbfc6b1fbd630a2";
