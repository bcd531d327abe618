//! Testing utilities and shared fixtures for the xsalsa library

pub mod vectors;
