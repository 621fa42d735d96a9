//======================================================================
// src/sponge.rs
// Rate-block helpers shared by the hash and AEAD constructions.
//======================================================================

use crate::consts::{PAD_BYTE, RATE_BYTES};
use crate::permutation::{permute, State};

/// Loads up to `RATE_BYTES` bytes as a big-endian word, zero-filling the tail.
#[inline]
pub(crate) fn load_block(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() <= RATE_BYTES);
    let mut block = [0u8; RATE_BYTES];
    block[..bytes.len()].copy_from_slice(bytes);
    u64::from_be_bytes(block)
}

/// Loads a final partial block followed by the `0x80 00..` padding.
#[inline]
pub(crate) fn load_padded_block(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() < RATE_BYTES);
    let mut block = [0u8; RATE_BYTES];
    block[..bytes.len()].copy_from_slice(bytes);
    block[bytes.len()] = PAD_BYTE;
    u64::from_be_bytes(block)
}

/// Writes the leading `out.len()` bytes of the big-endian encoding of `word`.
#[inline]
pub(crate) fn store_block(word: u64, out: &mut [u8]) {
    debug_assert!(out.len() <= RATE_BYTES);
    out.copy_from_slice(&word.to_be_bytes()[..out.len()]);
}

/// Absorbs `data` into the rate word with `0x80` padding, permuting `rounds` after every block.
///
/// A length that is a multiple of the rate still absorbs one extra all-padding block.
pub(crate) fn absorb_padded(state: &mut State, data: &[u8], rounds: usize) {
    let mut blocks = data.chunks_exact(RATE_BYTES);
    for block in blocks.by_ref() {
        state[0] ^= load_block(block);
        permute(state, rounds);
    }
    state[0] ^= load_padded_block(blocks.remainder());
    permute(state, rounds);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_lands_after_data() {
        assert_eq!(load_padded_block(&[]), 0x8000_0000_0000_0000);
        assert_eq!(load_padded_block(&[0xAA, 0xBB]), 0xAABB_8000_0000_0000);
        assert_eq!(
            load_padded_block(&[1, 2, 3, 4, 5, 6, 7]),
            0x0102_0304_0506_0780
        );
    }

    #[test]
    fn store_truncates_to_prefix() {
        let mut out = [0u8; 3];
        store_block(0x0102_0304_0506_0708, &mut out);
        assert_eq!(out, [1, 2, 3]);
        assert_eq!(load_block(&out), 0x0102_0300_0000_0000);
    }
}
