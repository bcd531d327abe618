//! Stream cipher primitives for the xsalsa library
//!
//! This crate implements the Salsa20 family: the Salsa20 core permutation,
//! the HSalsa20 subkey derivation, and the XSalsa20 extended-nonce stream
//! cipher built from them. The library is designed to be usable in both
//! `std` and `no_std` environments.
//!
//! # Security Features
//!
//! - Secure memory handling with automatic zeroization
//! - Constant-time comparison for nonces and derived keys
//! - A 64-bit block counter that fails closed instead of wrapping

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Type system
pub mod types;
pub use types::{ConstantTimeEq, FixedSize, Nonce, RandomGeneration};

// Stream cipher implementations
pub mod stream;
pub use stream::salsa::hsalsa20::hsalsa20;
pub use stream::salsa::salsa20::Salsa20;
pub use stream::salsa::xsalsa20::XSalsa20;
pub use stream::StreamCipher;

// Re-export security types from xsalsa-common
pub use xsalsa_common::security::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};

// Algorithm compatibility traits
pub use types::nonce::{Salsa20Compatible, XSalsa20Compatible};
