//! XSalsa20 stream cipher implementation
//!
//! XSalsa20 extends Salsa20's 8-byte nonce to 24 bytes: the first 16 nonce
//! bytes are folded into the key with HSalsa20, and the remaining 8 bytes
//! drive a regular Salsa20 keystream under the derived subkey. The extended
//! nonce is large enough to be chosen at random per message, which the
//! native nonce is not.
//!
//! Based on "Extending the Salsa20 nonce":
//! <https://cr.yp.to/snuffle/xsalsa-20081128.pdf>

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crate::stream::salsa::hsalsa20::hsalsa20;
use crate::stream::salsa::salsa20::Salsa20;
use crate::types::nonce::XSalsa20Compatible;
use crate::types::Nonce;
use xsalsa_common::security::SecretBuffer;
use xsalsa_params::traditional::salsa as params;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec;
#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Size of XSalsa20 key in bytes
pub const XSALSA20_KEY_SIZE: usize = params::SALSA20_KEY_SIZE;
/// Size of XSalsa20 nonce in bytes
pub const XSALSA20_NONCE_SIZE: usize = params::XSALSA20_NONCE_SIZE;

/// XSalsa20 stream cipher with an extended 24-byte nonce
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct XSalsa20 {
    /// Salsa20 instance keyed with the HSalsa20-derived subkey
    inner: Salsa20,
}

impl XSalsa20 {
    /// Creates a new XSalsa20 instance with the specified key and nonce
    pub fn new<const N: usize>(key: &[u8; XSALSA20_KEY_SIZE], nonce: &Nonce<N>) -> Self
    where
        Nonce<N>: XSalsa20Compatible,
    {
        let nonce_bytes = nonce.as_ref();

        // Fold the nonce prefix into the key
        let mut prefix = [0u8; params::HSALSA20_INPUT_SIZE];
        prefix.copy_from_slice(&nonce_bytes[..params::HSALSA20_INPUT_SIZE]);
        let subkey = hsalsa20(key, &prefix);

        // The remaining 8 bytes are the native Salsa20 nonce
        let mut native = [0u8; params::SALSA20_NONCE_SIZE];
        native.copy_from_slice(&nonce_bytes[params::HSALSA20_INPUT_SIZE..]);
        let native_nonce = Nonce::<{ params::SALSA20_NONCE_SIZE }>::new_unchecked(native);

        let key_buf = SecretBuffer::new(*subkey);
        Self {
            inner: Salsa20::from_secret_key(&key_buf, &native_nonce),
        }
    }

    /// Encrypt or decrypt data in place using the XSalsa20 stream cipher
    pub fn process(&mut self, data: &mut [u8]) -> Result<()> {
        self.inner.process(data)
    }

    /// Encrypt data in place
    pub fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.inner.process(data)
    }

    /// Decrypt data in place
    pub fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.inner.process(data)
    }

    /// Generate keystream directly into an output buffer
    pub fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        self.inner.keystream(output)
    }

    /// Seek to a block position in the keystream
    ///
    /// `block_index` is the index of the next 64-byte block to be produced.
    pub fn seek(&mut self, block_index: u64) {
        self.inner.seek(block_index)
    }

    /// Reset to the start of the keystream for the same key and nonce
    pub fn reset(&mut self) {
        self.inner.reset()
    }
}

/// Produce `len` bytes of XSalsa20 keystream for the given nonce and key
///
/// The key must be exactly 32 bytes and the nonce exactly 24 bytes. The
/// output is a deterministic function of `(key, nonce, len)`: the same
/// arguments always produce the same bytes, and a shorter request is a
/// prefix of a longer one. `len` may be zero.
#[cfg(feature = "alloc")]
pub fn stream(len: usize, nonce: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let mut cipher = cipher_for(nonce, key)?;

    let mut out = vec![0u8; len];
    cipher.keystream(&mut out)?;
    Ok(out)
}

/// Combine data with the XSalsa20 keystream for the given nonce and key
///
/// Each output byte is the corresponding input byte XORed with the
/// keystream, so the output always has the same length as the input. XOR is
/// self-inverse: applying this operation to plaintext encrypts it, applying
/// it to the resulting ciphertext with the same key and nonce decrypts it.
#[cfg(feature = "alloc")]
pub fn xor(input: &[u8], nonce: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let mut cipher = cipher_for(nonce, key)?;

    let mut out = input.to_vec();
    cipher.process(&mut out)?;
    Ok(out)
}

/// Validate slice lengths and build the cipher
#[cfg(feature = "alloc")]
fn cipher_for(nonce: &[u8], key: &[u8]) -> Result<XSalsa20> {
    validate::length("XSalsa20 key", key.len(), XSALSA20_KEY_SIZE)?;
    validate::length("XSalsa20 nonce", nonce.len(), XSALSA20_NONCE_SIZE)?;

    let mut key_bytes = [0u8; XSALSA20_KEY_SIZE];
    key_bytes.copy_from_slice(key);

    let mut nonce_bytes = [0u8; XSALSA20_NONCE_SIZE];
    nonce_bytes.copy_from_slice(nonce);
    let nonce = Nonce::new(nonce_bytes);

    let cipher = XSalsa20::new(&key_bytes, &nonce);
    key_bytes.zeroize();

    Ok(cipher)
}
