//! Salsa family of stream cipher implementations
//!
//! The family is layered the way the construction itself is: the Salsa20
//! core drives everything, HSalsa20 is the key-compression step built from
//! the same permutation, and XSalsa20 combines the two to support a 24-byte
//! nonce.

/// HSalsa20 subkey derivation
pub mod hsalsa20;
/// Salsa20 stream cipher with the native 8-byte nonce
pub mod salsa20;
/// XSalsa20 stream cipher with an extended 24-byte nonce
pub mod xsalsa20;

// Re-export for convenience
pub use hsalsa20::hsalsa20;
pub use salsa20::Salsa20;
pub use xsalsa20::XSalsa20;
