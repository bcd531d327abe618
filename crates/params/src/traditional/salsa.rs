//! Constants for the Salsa20 family of stream ciphers

/// Salsa20 key size in bytes
pub const SALSA20_KEY_SIZE: usize = 32;

/// Salsa20 nonce size in bytes
pub const SALSA20_NONCE_SIZE: usize = 8;

/// Salsa20 block size in bytes
pub const SALSA20_BLOCK_SIZE: usize = 64;

/// Number of Salsa20 rounds (applied as `SALSA20_ROUNDS / 2` double rounds)
pub const SALSA20_ROUNDS: usize = 20;

/// XSalsa20 extended nonce size in bytes
pub const XSALSA20_NONCE_SIZE: usize = 24;

/// HSalsa20 input size in bytes (the nonce prefix it compresses)
pub const HSALSA20_INPUT_SIZE: usize = 16;

/// HSalsa20 output size in bytes (a full Salsa20 key)
pub const HSALSA20_OUTPUT_SIZE: usize = 32;

/// The Salsa20 constant words, "expand 32-byte k" in little-endian
pub const SALSA20_CONSTANTS: [u32; 4] = [0x61707865, 0x3320646e, 0x79622d32, 0x6b206574];
