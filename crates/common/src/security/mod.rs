//! Security primitives and memory safety utilities
//!
//! This module provides foundational security types used throughout the
//! xsalsa workspace to ensure proper handling of sensitive material.

pub mod secret;

// Re-export core security types
pub use secret::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};
