//! HSalsa20 subkey derivation
//!
//! HSalsa20 compresses a 32-byte key and a 16-byte input block into a fresh
//! 32-byte key, using the same permutation as Salsa20 but without the final
//! feed-forward addition. XSalsa20 uses it to absorb the first 16 bytes of
//! its 24-byte nonce, leaving a cipher that only needs the native 8-byte
//! nonce under the derived key.
//!
//! Defined in "Extending the Salsa20 nonce":
//! <https://cr.yp.to/snuffle/xsalsa-20110204.pdf>

use zeroize::Zeroize;

use crate::stream::salsa::salsa20::Salsa20;
use xsalsa_api::types::SecretBytes;
use xsalsa_internal::endian::{u32_from_le_bytes, u32_to_le_bytes};
use xsalsa_params::traditional::salsa as params;

/// Size of the HSalsa20 input block in bytes
pub const HSALSA20_INPUT_SIZE: usize = params::HSALSA20_INPUT_SIZE;
/// Size of the HSalsa20 output in bytes
pub const HSALSA20_OUTPUT_SIZE: usize = params::HSALSA20_OUTPUT_SIZE;

/// Word positions whose values form the HSalsa20 output: the four diagonal
/// constant positions followed by the four words that absorbed the input
/// block. The selection is part of the algorithm and must match it exactly.
const OUTPUT_WORDS: [usize; 8] = [0, 5, 10, 15, 6, 7, 8, 9];

/// Derive a 32-byte subkey from a key and a 16-byte input block
///
/// The state is laid out exactly as for Salsa20, with the input block in the
/// positions Salsa20 reserves for its nonce and counter. The output is taken
/// from the permuted words directly; skipping the feed-forward is what makes
/// the function usable as a key-derivation step.
pub fn hsalsa20(
    key: &[u8; params::SALSA20_KEY_SIZE],
    input: &[u8; HSALSA20_INPUT_SIZE],
) -> SecretBytes<HSALSA20_OUTPUT_SIZE> {
    let mut state = [0u32; 16];

    state[0] = params::SALSA20_CONSTANTS[0];
    state[5] = params::SALSA20_CONSTANTS[1];
    state[10] = params::SALSA20_CONSTANTS[2];
    state[15] = params::SALSA20_CONSTANTS[3];

    for i in 0..4 {
        state[1 + i] = u32_from_le_bytes(&key[i * 4..]);
        state[6 + i] = u32_from_le_bytes(&input[i * 4..]);
        state[11 + i] = u32_from_le_bytes(&key[16 + i * 4..]);
    }

    Salsa20::rounds(&mut state);

    let mut subkey = SecretBytes::zeroed();
    for (i, &word) in OUTPUT_WORDS.iter().enumerate() {
        subkey.as_mut()[i * 4..(i + 1) * 4].copy_from_slice(&u32_to_le_bytes(state[word]));
    }

    state.zeroize();

    subkey
}
