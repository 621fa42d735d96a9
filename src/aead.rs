//======================================================================
// src/aead.rs
// Ascon-128 AEAD mode.
//
// Duplex sponge with a 64-bit rate: p^12 for initialization and
// finalization, p^6 between associated data and message blocks.
//======================================================================

use crate::consts::{
    ASCON128_IV, DOMAIN_SEPARATOR, RATE_BYTES, ROUNDS_A, ROUNDS_B, TAG_SIZE,
};
use crate::permutation::{permute, State};
use crate::sponge::{absorb_padded, load_block, load_padded_block, store_block};
use aead::{
    consts::{U0, U16},
    generic_array::GenericArray,
    AeadCore, AeadInPlace, Key, KeyInit, KeySizeUser, Nonce, Tag,
};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Ascon-128 authenticated cipher bound to a 128-bit key.
#[derive(Clone, ZeroizeOnDrop)]
pub struct Ascon128 {
    key: [u64; 2],
}

impl KeySizeUser for Ascon128 {
    type KeySize = U16;
}

impl KeyInit for Ascon128 {
    fn new(key: &Key<Self>) -> Self {
        let (k0, k1) = key.split_at(RATE_BYTES);
        Self {
            key: [load_block(k0), load_block(k1)],
        }
    }
}

impl AeadCore for Ascon128 {
    type NonceSize = U16;
    type TagSize = U16;
    type CiphertextOverhead = U0;
}

impl AeadInPlace for Ascon128 {
    fn encrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
    ) -> aead::Result<Tag<Self>> {
        Ok(self.seal(nonce, associated_data, buffer))
    }

    fn decrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
        tag: &Tag<Self>,
    ) -> aead::Result<()> {
        let mut state = self.initialize(nonce);
        absorb_associated_data(&mut state, associated_data);

        // Recover plaintext; the ciphertext word becomes the new rate.
        let mut blocks = buffer.chunks_exact_mut(RATE_BYTES);
        for block in blocks.by_ref() {
            let c = load_block(block);
            store_block(state[0] ^ c, block);
            state[0] = c;
            permute(&mut state, ROUNDS_B);
        }
        let last = blocks.into_remainder();
        store_block(state[0] ^ load_block(last), last);
        state[0] ^= load_padded_block(last);

        let calculated_tag = self.finalize(state);
        if bool::from(calculated_tag.ct_eq(tag.as_slice())) {
            Ok(())
        } else {
            // Never hand back unauthenticated plaintext.
            buffer.zeroize();
            Err(aead::Error)
        }
    }
}

impl Ascon128 {
    /// Encrypts `plaintext`, returning the ciphertext (same length) and a detached 16-byte tag.
    pub fn encrypt(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        plaintext: &[u8],
    ) -> (Vec<u8>, Tag<Self>) {
        let mut buffer = plaintext.to_vec();
        let tag = self.seal(nonce, associated_data, &mut buffer);
        (buffer, tag)
    }

    /// Verifies `tag` and decrypts `ciphertext`.
    ///
    /// Returns [`aead::Error`] and no plaintext when authentication fails.
    pub fn decrypt(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        ciphertext: &[u8],
        tag: &Tag<Self>,
    ) -> aead::Result<Vec<u8>> {
        let mut buffer = ciphertext.to_vec();
        self.decrypt_in_place_detached(nonce, associated_data, &mut buffer, tag)?;
        Ok(buffer)
    }

    /// Encrypts `buffer` in place and returns the tag. Infallible.
    pub(crate) fn seal(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
    ) -> Tag<Self> {
        let mut state = self.initialize(nonce);
        absorb_associated_data(&mut state, associated_data);

        let mut blocks = buffer.chunks_exact_mut(RATE_BYTES);
        for block in blocks.by_ref() {
            state[0] ^= load_block(block);
            store_block(state[0], block);
            permute(&mut state, ROUNDS_B);
        }
        // The padded final block is never followed by p^6.
        let last = blocks.into_remainder();
        state[0] ^= load_padded_block(last);
        store_block(state[0], last);

        self.finalize(state)
    }

    fn initialize(&self, nonce: &Nonce<Self>) -> State {
        let (n0, n1) = nonce.split_at(RATE_BYTES);
        let mut state = [
            ASCON128_IV,
            self.key[0],
            self.key[1],
            load_block(n0),
            load_block(n1),
        ];
        permute(&mut state, ROUNDS_A);
        state[3] ^= self.key[0];
        state[4] ^= self.key[1];
        state
    }

    fn finalize(&self, mut state: State) -> Tag<Self> {
        state[1] ^= self.key[0];
        state[2] ^= self.key[1];
        permute(&mut state, ROUNDS_A);
        state[3] ^= self.key[0];
        state[4] ^= self.key[1];

        let mut tag = [0u8; TAG_SIZE];
        tag[..8].copy_from_slice(&state[3].to_be_bytes());
        tag[8..].copy_from_slice(&state[4].to_be_bytes());
        GenericArray::from(tag)
    }
}

/// Absorbs associated data (nothing when empty) and applies the domain separator.
fn absorb_associated_data(state: &mut State, associated_data: &[u8]) {
    if !associated_data.is_empty() {
        absorb_padded(state, associated_data, ROUNDS_B);
    }
    state[4] ^= DOMAIN_SEPARATOR;
}
