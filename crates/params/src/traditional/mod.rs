//! Constants for traditional (pre-quantum) cryptographic algorithms

pub mod salsa;
