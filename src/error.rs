//======================================================================
// src/error.rs
// Errors of the reference comparison adapters.
//======================================================================

use thiserror::Error;

/// Errors reported by the [`reference`](crate::reference) adapters.
///
/// Authentication failures of the Ascon constructions themselves are reported as
/// [`aead::Error`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("reference cryptography backend is not available; enable the `reference` feature")]
    Unavailable,
    #[error("invalid key length: {0} bytes")]
    InvalidKeyLength(usize),
    #[error("invalid nonce length: {0} bytes")]
    InvalidNonceLength(usize),
    #[error("authentication failed")]
    Authentication,
}
