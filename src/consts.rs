//======================================================================
// src/consts.rs
// Ascon parameters shared by the permutation and every construction.
//======================================================================

/// Number of 64-bit words in the state.
pub const STATE_WORDS: usize = 5;

/// Sponge rate in bytes; the rest of the 40-byte state is capacity.
pub const RATE_BYTES: usize = 8;

pub const KEY_SIZE: usize = 16;
pub const NONCE_SIZE: usize = 16;
pub const TAG_SIZE: usize = 16;
pub const DIGEST_SIZE: usize = 32;

/// Rounds used for initialization, finalization and hashing (`p^a`).
pub const ROUNDS_A: usize = 12;

/// Rounds used between data blocks of the AEAD (`p^b`).
pub const ROUNDS_B: usize = 6;

/// Round constants, XORed into word 2. A reduced permutation runs the last `rounds` of these.
pub const RC: [u64; ROUNDS_A] = [
    0xf0, 0xe1, 0xd2, 0xc3, 0xb4, 0xa5, 0x96, 0x87, 0x78, 0x69, 0x5a, 0x4b,
];

/// Rotation pairs of the linear diffusion layer, one per state word.
pub const ROTATIONS: [(u32, u32); STATE_WORDS] = [(19, 28), (61, 39), (1, 6), (10, 17), (7, 41)];

/// Ascon-128 initial value: key bits, rate bits, `a` and `b` rounds.
pub const ASCON128_IV: u64 = ((KEY_SIZE as u64 * 8) << 56)
    | ((RATE_BYTES as u64 * 8) << 48)
    | ((ROUNDS_A as u64) << 40)
    | ((ROUNDS_B as u64) << 32);

/// First padding byte appended after a partial (or empty) final block.
pub const PAD_BYTE: u8 = 0x80;

/// Flipped in word 4 once associated data has been absorbed.
pub const DOMAIN_SEPARATOR: u64 = 1;
