#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//======================================================================
// src/lib.rs
// Crate entry point. Declares the public API and wires the modules.
//======================================================================


// --- Module declarations ---
pub mod consts;
pub mod permutation;
mod sponge;

pub mod hash;
pub mod aead;
pub mod mac;

pub mod error;
pub mod reference;


// --- Re-exports ---
pub use ::aead as aead_api;
pub use ::aead::{AeadCore, AeadInPlace, Error, Key, KeyInit, Nonce, Tag};

pub use crate::aead::Ascon128;
pub use crate::error::ReferenceError;
pub use crate::hash::{ascon_hash, Digest};
pub use crate::mac::AsconMac;
pub use crate::permutation::{permute, permute_range, State};
