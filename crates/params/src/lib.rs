//! Constant values for the xsalsa library
//!
//! This crate collects the fixed parameters of the Salsa20 cipher family in
//! one place so that every other crate in the workspace agrees on them.

#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod traditional;

pub use traditional::salsa;
