use super::*;
use crate::error::Error;
use crate::types::Nonce;

// Subkey and nonce suffix from the NaCl test suite: the XSalsa20 stream
// under (firstkey, firstnonce) equals the Salsa20 stream under this derived
// key and the final 8 nonce bytes.
const SECONDKEY: &str = "dc908dda0b9344a953629b733820778880f3ceb421bb61b91cbd4c3e66256ce4";
const NONCE_SUFFIX: [u8; 8] = [0x82, 0x19, 0xe0, 0x03, 0x6b, 0x7a, 0x0b, 0x37];
const EXPECTED_32: &str = "eea6a7251c1e72916d11c2cb214d3c252539121d8e234e652d651fa4c8cff880";

fn secondkey() -> [u8; SALSA20_KEY_SIZE] {
    hex::decode(SECONDKEY).unwrap().try_into().unwrap()
}

#[test]
fn test_salsa20_known_stream() {
    let key = secondkey();
    let nonce = Nonce::<SALSA20_NONCE_SIZE>::new(NONCE_SUFFIX);

    let mut salsa = Salsa20::new(&key, &nonce);
    let mut keystream = [0u8; 32];
    salsa.keystream(&mut keystream).unwrap();

    assert_eq!(hex::encode(keystream), EXPECTED_32);
}

#[test]
fn test_salsa20_keystream_matches_encrypt() {
    let key = [0x42; SALSA20_KEY_SIZE];
    let nonce = Nonce::<SALSA20_NONCE_SIZE>::new([0x24; SALSA20_NONCE_SIZE]);

    let mut salsa = Salsa20::new(&key, &nonce);

    // Generate keystream and test encryption
    let mut keystream = [0u8; 64];
    salsa.keystream(&mut keystream).unwrap();

    let plaintext = [0x12; 64];
    let mut ciphertext = plaintext;

    // Reset to start
    salsa.reset();
    salsa.encrypt(&mut ciphertext).unwrap();

    // Manual XOR to verify
    let mut expected = [0u8; 64];
    for i in 0..64 {
        expected[i] = plaintext[i] ^ keystream[i];
    }

    assert_eq!(ciphertext, expected);
}

#[test]
fn test_salsa20_with_counter_block_offset() {
    let key = [0x42; SALSA20_KEY_SIZE];
    let nonce = Nonce::<SALSA20_NONCE_SIZE>::new([0x24; SALSA20_NONCE_SIZE]);

    // Two consecutive blocks from a cipher starting at block 0
    let mut salsa = Salsa20::new(&key, &nonce);
    let mut two_blocks = [0u8; 128];
    salsa.keystream(&mut two_blocks).unwrap();

    // A cipher starting at block 1 must produce the second block
    let mut offset = Salsa20::with_counter(&key, &nonce, 1);
    let mut second_block = [0u8; 64];
    offset.keystream(&mut second_block).unwrap();

    assert_eq!(&two_blocks[64..], &second_block[..]);
}

#[test]
fn test_salsa20_seek() {
    let key = [0x42; SALSA20_KEY_SIZE];
    let nonce = Nonce::<SALSA20_NONCE_SIZE>::new([0x24; SALSA20_NONCE_SIZE]);

    // Create two ciphers
    let mut salsa1 = Salsa20::new(&key, &nonce);
    let mut salsa2 = Salsa20::new(&key, &nonce);

    // Advance salsa1 by processing some data: 200 bytes consumes blocks
    // 0..=3, so the next block to be produced is block 4
    let mut data = [0u8; 200];
    salsa1.process(&mut data).unwrap();

    salsa2.seek(4);

    // Both should now produce the same keystream
    let mut ks1 = [0u8; 64];
    let mut ks2 = [0u8; 64];

    salsa1.keystream(&mut ks1).unwrap();
    salsa2.keystream(&mut ks2).unwrap();

    assert_eq!(ks1, ks2);
}

#[test]
fn test_salsa20_reset_restores_start_counter() {
    let key = [0x07; SALSA20_KEY_SIZE];
    let nonce = Nonce::<SALSA20_NONCE_SIZE>::new([0x31; SALSA20_NONCE_SIZE]);

    let mut salsa = Salsa20::with_counter(&key, &nonce, 5);

    let mut first = [0u8; 96];
    salsa.keystream(&mut first).unwrap();

    salsa.reset();

    let mut again = [0u8; 96];
    salsa.keystream(&mut again).unwrap();

    assert_eq!(first, again);
}

#[test]
fn test_salsa20_counter_exhaustion() {
    let key = [0x42; SALSA20_KEY_SIZE];
    let nonce = Nonce::<SALSA20_NONCE_SIZE>::new([0x24; SALSA20_NONCE_SIZE]);

    let mut salsa = Salsa20::new(&key, &nonce);
    salsa.seek(u64::MAX);

    // The final block index is still addressable
    let mut last_block = [0u8; 64];
    salsa.keystream(&mut last_block).unwrap();
    assert_ne!(last_block, [0u8; 64]);

    // One byte past it must fail instead of wrapping
    let mut overflow = [0u8; 1];
    let err = salsa.keystream(&mut overflow).unwrap_err();
    assert_eq!(
        err,
        Error::CounterOverflow {
            algorithm: "Salsa20",
        }
    );

    // seek back recovers the cipher
    salsa.seek(0);
    let mut block0 = [0u8; 64];
    salsa.keystream(&mut block0).unwrap();
    assert_ne!(block0, last_block);
}
