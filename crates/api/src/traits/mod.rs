//! Trait definitions for the xsalsa public API

#[cfg(feature = "alloc")]
pub mod serialize;

#[cfg(feature = "alloc")]
pub use serialize::{Serialize, SerializeSecret};
