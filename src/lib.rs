//! # xsalsa
//!
//! A pure Rust implementation of the XSalsa20 extended-nonce stream cipher.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! xsalsa = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `alloc`: Allocator support without `std`; enables the `Vec`-returning
//!   `stream`/`xor` operations
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`xsalsa-api`]: Error taxonomy and core types
//! - [`xsalsa-common`]: Secure memory handling
//! - [`xsalsa-internal`]: Constant-time and endianness utilities
//! - [`xsalsa-params`]: Algorithm constants
//! - [`xsalsa-algorithms`]: The Salsa20/HSalsa20/XSalsa20 primitives

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use xsalsa_api as api;
pub use xsalsa_common as common;
pub use xsalsa_internal as internal;
pub use xsalsa_params as params;

pub use xsalsa_algorithms as algorithms;

/// Common imports for xsalsa users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export the cipher types and operations
    pub use crate::algorithms::stream::salsa::hsalsa20::hsalsa20;
    pub use crate::algorithms::stream::salsa::salsa20::Salsa20;
    pub use crate::algorithms::stream::salsa::xsalsa20::XSalsa20;
    pub use crate::algorithms::stream::StreamCipher;

    #[cfg(feature = "alloc")]
    pub use crate::algorithms::stream::salsa::xsalsa20::{stream, xor};

    // Re-export core types
    pub use crate::algorithms::types::Nonce;
    pub use crate::api::types::SecretBytes;

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecretBuffer, ZeroizeGuard};
}
