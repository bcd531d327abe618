//! Salsa20 stream cipher implementation
//!
//! This module implements the Salsa20 stream cipher as specified by
//! Daniel J. Bernstein in "The Salsa20 family of stream ciphers".
//!
//! The 16-word state is laid out with the constant words on the diagonal
//! (positions 0, 5, 10 and 15), the key words at 1..5 and 11..15, the nonce
//! at 6..8 and the 64-bit little-endian block counter at 8..10. This layout
//! determines the numeric output and is part of the algorithm, not an
//! implementation choice.

use byteorder::{ByteOrder, LittleEndian};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::types::nonce::Salsa20Compatible;
use crate::types::Nonce;
use xsalsa_common::security::{EphemeralSecret, SecretBuffer};
use xsalsa_params::traditional::salsa as params;

/// Size of Salsa20 key in bytes
pub const SALSA20_KEY_SIZE: usize = params::SALSA20_KEY_SIZE;
/// Size of Salsa20 nonce in bytes
pub const SALSA20_NONCE_SIZE: usize = params::SALSA20_NONCE_SIZE;
/// Size of Salsa20 block in bytes
pub const SALSA20_BLOCK_SIZE: usize = params::SALSA20_BLOCK_SIZE;

/// Salsa20 stream cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Salsa20 {
    /// The key schedule
    state: [u32; 16],
    /// Keystream buffer
    buffer: [u8; SALSA20_BLOCK_SIZE],
    /// Current position in the buffer
    position: usize,
    /// Current block counter
    counter: u64,
    /// Set once every 64-bit block index has been produced
    exhausted: bool,
}

impl Salsa20 {
    /// Creates a new Salsa20 instance with the specified key and nonce
    pub fn new<const N: usize>(key: &[u8; SALSA20_KEY_SIZE], nonce: &Nonce<N>) -> Self
    where
        Nonce<N>: Salsa20Compatible,
    {
        // Wrap key in SecretBuffer for secure handling
        let key_buf = SecretBuffer::new(*key);
        Self::with_counter_secure(&key_buf, nonce, 0)
    }

    /// Creates a new Salsa20 instance with the specified key, nonce, and
    /// starting block counter
    pub fn with_counter<const N: usize>(
        key: &[u8; SALSA20_KEY_SIZE],
        nonce: &Nonce<N>,
        counter: u64,
    ) -> Self
    where
        Nonce<N>: Salsa20Compatible,
    {
        let key_buf = SecretBuffer::new(*key);
        Self::with_counter_secure(&key_buf, nonce, counter)
    }

    /// Internal method that works with SecretBuffer for secure key handling
    fn with_counter_secure<const N: usize>(
        key: &SecretBuffer<SALSA20_KEY_SIZE>,
        nonce: &Nonce<N>,
        counter: u64,
    ) -> Self
    where
        Nonce<N>: Salsa20Compatible,
    {
        let mut state = [0u32; 16];

        // "expand 32-byte k" on the diagonal
        state[0] = params::SALSA20_CONSTANTS[0];
        state[5] = params::SALSA20_CONSTANTS[1];
        state[10] = params::SALSA20_CONSTANTS[2];
        state[15] = params::SALSA20_CONSTANTS[3];

        // Key (8 words, split around the nonce and counter block)
        let key_bytes = key.as_ref();
        for i in 0..4 {
            state[1 + i] = LittleEndian::read_u32(&key_bytes[i * 4..]);
            state[11 + i] = LittleEndian::read_u32(&key_bytes[16 + i * 4..]);
        }

        // Nonce (2 words)
        let nonce_bytes = nonce.as_ref();
        state[6] = LittleEndian::read_u32(&nonce_bytes[0..4]);
        state[7] = LittleEndian::read_u32(&nonce_bytes[4..8]);

        // Counter (2 words, 64-bit little-endian)
        state[8] = counter as u32;
        state[9] = (counter >> 32) as u32;

        Self {
            state,
            buffer: [0; SALSA20_BLOCK_SIZE],
            position: SALSA20_BLOCK_SIZE, // Force initial keystream generation
            counter,
            exhausted: false,
        }
    }

    /// Creates from a SecretBuffer key (internal use)
    pub(crate) fn from_secret_key<const N: usize>(
        key: &SecretBuffer<SALSA20_KEY_SIZE>,
        nonce: &Nonce<N>,
    ) -> Self
    where
        Nonce<N>: Salsa20Compatible,
    {
        Self::with_counter_secure(key, nonce, 0)
    }

    /// The Salsa20 quarter round function
    #[inline]
    fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
        state[b] ^= state[a].wrapping_add(state[d]).rotate_left(7);
        state[c] ^= state[b].wrapping_add(state[a]).rotate_left(9);
        state[d] ^= state[c].wrapping_add(state[b]).rotate_left(13);
        state[a] ^= state[d].wrapping_add(state[c]).rotate_left(18);
    }

    /// Apply the 20-round permutation: 10 double rounds, each a column round
    /// followed by a row round
    pub(crate) fn rounds(state: &mut [u32; 16]) {
        for _ in 0..params::SALSA20_ROUNDS / 2 {
            // Column rounds
            Self::quarter_round(state, 0, 4, 8, 12);
            Self::quarter_round(state, 5, 9, 13, 1);
            Self::quarter_round(state, 10, 14, 2, 6);
            Self::quarter_round(state, 15, 3, 7, 11);

            // Row rounds
            Self::quarter_round(state, 0, 1, 2, 3);
            Self::quarter_round(state, 5, 6, 7, 4);
            Self::quarter_round(state, 10, 11, 8, 9);
            Self::quarter_round(state, 15, 12, 13, 14);
        }
    }

    /// Generate a block of keystream
    fn generate_keystream(&mut self) -> Result<()> {
        // A wrapped counter would re-emit earlier blocks; refuse instead
        if self.exhausted {
            return Err(Error::CounterOverflow {
                algorithm: "Salsa20",
            });
        }

        // Create a working copy of the state with the current counter
        let mut working_state = self.state;
        working_state[8] = self.counter as u32;
        working_state[9] = (self.counter >> 32) as u32;

        Self::rounds(&mut working_state);

        // Create output by adding the working state to the original state
        // Use EphemeralSecret to ensure intermediate values are zeroized
        let mut output_state = EphemeralSecret::new([0u32; 16]);
        for i in 0..16 {
            let original_val = match i {
                8 => self.counter as u32,
                9 => (self.counter >> 32) as u32,
                _ => self.state[i],
            };
            output_state[i] = working_state[i].wrapping_add(original_val);
        }

        // Convert to bytes (little-endian)
        for i in 0..16 {
            LittleEndian::write_u32(&mut self.buffer[i * 4..], output_state[i]);
        }

        working_state.zeroize();

        // Reset position and advance the counter for the next block
        self.position = 0;
        match self.counter.checked_add(1) {
            Some(next) => self.counter = next,
            None => self.exhausted = true,
        }
        Ok(())
    }

    /// Encrypt or decrypt data in place using the Salsa20 stream cipher
    pub fn process(&mut self, data: &mut [u8]) -> Result<()> {
        for byte in data.iter_mut() {
            // Generate new keystream block if needed
            if self.position >= SALSA20_BLOCK_SIZE {
                self.generate_keystream()?;
            }

            // XOR data with keystream
            *byte ^= self.buffer[self.position];
            self.position += 1;
        }
        Ok(())
    }

    /// Encrypt data in place
    pub fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Decrypt data in place
    pub fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Generate keystream directly into an output buffer
    pub fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        // Zero the output buffer
        for byte in output.iter_mut() {
            *byte = 0;
        }

        // Force generation from a block boundary (ignore any leftover position)
        self.position = SALSA20_BLOCK_SIZE;

        // Then run the encryption pass to copy the keystream
        self.process(output)
    }

    /// Seek to a block position in the keystream
    ///
    /// `block_index` is the index of the next 64-byte block to be produced.
    pub fn seek(&mut self, block_index: u64) {
        self.counter = block_index;
        self.exhausted = false;

        // Force regeneration on next use
        self.position = SALSA20_BLOCK_SIZE;

        // Clear any old keystream
        self.buffer.zeroize();
    }

    /// Reset to initial state with the same key, nonce and starting counter
    pub fn reset(&mut self) {
        // The starting counter still lives in state words 8 and 9
        self.counter = ((self.state[9] as u64) << 32) | self.state[8] as u64;
        self.exhausted = false;
        self.position = SALSA20_BLOCK_SIZE; // Force keystream regeneration
        self.buffer.zeroize(); // Clear keystream buffer
    }
}

#[cfg(test)]
mod tests;
