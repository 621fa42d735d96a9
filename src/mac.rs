//======================================================================
// src/mac.rs
// Ascon MAC: the Ascon-128 tag over a message under a fixed zero nonce.
//======================================================================

use crate::aead::Ascon128;
use crate::consts::NONCE_SIZE;
use aead::{consts::U16, Key, KeyInit, KeySizeUser, Nonce, Tag};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Message authentication code built on [`Ascon128`].
///
/// Every tag is computed with the all-zero nonce and empty associated data. Reusing one nonce
/// is acceptable only because the ciphertext produced along the way is wiped and never leaves
/// this type.
#[derive(Clone, ZeroizeOnDrop)]
pub struct AsconMac {
    cipher: Ascon128,
}

impl KeySizeUser for AsconMac {
    type KeySize = U16;
}

impl KeyInit for AsconMac {
    fn new(key: &Key<Self>) -> Self {
        Self {
            cipher: Ascon128::new(key),
        }
    }
}

impl AsconMac {
    /// Computes the 16-byte tag of `message`.
    pub fn mac(&self, message: &[u8]) -> Tag<Ascon128> {
        let nonce = Nonce::<Ascon128>::from([0u8; NONCE_SIZE]);
        let mut scratch = message.to_vec();
        let tag = self.cipher.seal(&nonce, &[], &mut scratch);
        scratch.zeroize();
        tag
    }

    /// Returns `true` iff `tag` is the tag of `message`, compared in constant time.
    pub fn verify(&self, message: &[u8], tag: &Tag<Ascon128>) -> bool {
        self.mac(message).ct_eq(tag.as_slice()).into()
    }
}
