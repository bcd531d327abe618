//! Common implementations and shared functionality for the xsalsa library
//!
//! This crate provides the secure-memory utilities used across the
//! workspace: fixed-size secret buffers, ephemeral secrets that zeroize on
//! drop, and scope guards for transient sensitive values.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};
