//======================================================================
// src/permutation.rs
// The Ascon-p permutation over the 320-bit state.
//======================================================================

use crate::consts::{RC, ROTATIONS, ROUNDS_A, STATE_WORDS};

/// The 320-bit permutation state as five 64-bit words.
pub type State = [u64; STATE_WORDS];

/// Applies the last `rounds` rounds of Ascon-p to `state`.
///
/// Round `r` runs over `12 - rounds..12`, so `permute(s, 6)` is Ascon's `p^6` and
/// `permute(s, 0)` leaves the state untouched. Two calls always replay the tail of the
/// schedule; use [`permute_range`] to run the leading rounds.
///
/// # Panics
///
/// Panics if `rounds > 12`.
#[inline]
pub fn permute(state: &mut State, rounds: usize) {
    assert!(
        rounds <= ROUNDS_A,
        "Ascon-p supports at most {ROUNDS_A} rounds, got {rounds}"
    );
    permute_range(state, ROUNDS_A - rounds, ROUNDS_A);
}

/// Applies rounds `start..end` of the 12-round schedule.
///
/// # Panics
///
/// Panics if `start > end` or `end > 12`.
#[inline]
pub fn permute_range(state: &mut State, start: usize, end: usize) {
    assert!(
        start <= end && end <= ROUNDS_A,
        "invalid Ascon-p round window {start}..{end}"
    );
    for &rc in &RC[start..end] {
        round(state, rc);
    }
}

#[inline(always)]
fn round(state: &mut State, rc: u64) {
    // 1. Constant addition
    state[2] ^= rc;

    // 2. Substitution layer (bit-sliced 5-bit S-box)
    let [mut x0, mut x1, mut x2, mut x3, mut x4] = *state;
    x0 ^= x4;
    x4 ^= x3;
    x2 ^= x1;

    let t0 = !x0 & x1;
    let t1 = !x1 & x2;
    let t2 = !x2 & x3;
    let t3 = !x3 & x4;
    let t4 = !x4 & x0;

    x0 ^= t1;
    x1 ^= t2;
    x2 ^= t3;
    x3 ^= t4;
    x4 ^= t0;

    x1 ^= x0;
    x0 ^= x4;
    x3 ^= x2;
    x2 = !x2;

    *state = [x0, x1, x2, x3, x4];

    // 3. Linear diffusion layer
    for (word, &(a, b)) in state.iter_mut().zip(ROTATIONS.iter()) {
        *word ^= word.rotate_right(a) ^ word.rotate_right(b);
    }
}
