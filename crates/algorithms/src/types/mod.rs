//! Type-safe wrappers for cryptographic types
//!
//! This module provides domain-specific types with compile-time and runtime
//! guarantees for cipher operations, designed to be ergonomic while
//! preventing common mistakes.

// Submodules
pub mod nonce;

// Sealed trait module (not public)
pub(crate) mod sealed;

// Re-export main types
pub use nonce::Nonce;

// Import and re-export core types
pub use xsalsa_api::types::SecretBytes;

// Import and re-export security types from xsalsa-common
pub use xsalsa_common::security::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};

// Common cryptographic traits
use rand::{CryptoRng, RngCore};

/// Trait for cryptographic types with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}

/// Trait for cryptographic types that can be randomly generated
pub trait RandomGeneration: Sized {
    /// Generate a random instance using the provided RNG
    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> crate::error::Result<Self>;
}

/// Trait for types that have a fixed size
pub trait FixedSize {
    /// Get the size in bytes
    fn size() -> usize;
}

// Re-export algorithm compatibility traits from submodules
pub use nonce::{Salsa20Compatible, XSalsa20Compatible};
