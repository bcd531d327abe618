//! Public API traits and types for the xsalsa library
//!
//! This crate provides the public API surface for the xsalsa workspace,
//! including the error taxonomy, serialization seams, and the secret byte
//! containers shared by every other crate.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use types::SecretBytes;

#[cfg(feature = "alloc")]
pub use traits::{Serialize, SerializeSecret};
