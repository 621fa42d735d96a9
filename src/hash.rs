//======================================================================
// src/hash.rs
// Keyless sponge hash with a fixed 256-bit digest.
//
// The state starts at zero and every absorb and squeeze step runs the
// full 12-round permutation. This differs from the published Ascon-Hash
// (non-zero IV, fewer interior rounds in later revisions) so its digests
// are not interchangeable with standard Ascon-Hash vectors.
//======================================================================

use crate::consts::{DIGEST_SIZE, RATE_BYTES, ROUNDS_A, STATE_WORDS};
use crate::permutation::permute;
use crate::sponge::absorb_padded;

/// A 32-byte hash output.
pub type Digest = [u8; DIGEST_SIZE];

/// Hashes `data` into a 32-byte digest.
///
/// Deterministic for every input, including the empty string.
pub fn ascon_hash(data: &[u8]) -> Digest {
    let mut state = [0u64; STATE_WORDS];
    absorb_padded(&mut state, data, ROUNDS_A);

    let mut digest = [0u8; DIGEST_SIZE];
    for (i, chunk) in digest.chunks_exact_mut(RATE_BYTES).enumerate() {
        if i > 0 {
            permute(&mut state, ROUNDS_A);
        }
        chunk.copy_from_slice(&state[0].to_be_bytes());
    }
    digest
}
