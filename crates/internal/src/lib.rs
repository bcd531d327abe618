//! Internal utilities for the xsalsa library
//!
//! Shared low-level helpers used by the other workspace crates. Nothing in
//! here is part of the public cipher contract.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
