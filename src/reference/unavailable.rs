use super::{GCM_TAG_SIZE, SHA256_OUTPUT_SIZE};
use crate::error::ReferenceError;
use core::convert::Infallible;

/// Placeholder for AES-GCM; cannot be constructed without the `reference` feature.
#[derive(Clone, Debug)]
pub struct AesGcmAdapter {
    never: Infallible,
}

impl AesGcmAdapter {
    pub fn new(_key: &[u8]) -> Result<Self, ReferenceError> {
        Err(ReferenceError::Unavailable)
    }

    pub fn encrypt(
        &self,
        _nonce: &[u8],
        _plaintext: &[u8],
        _associated_data: &[u8],
    ) -> Result<(Vec<u8>, [u8; GCM_TAG_SIZE]), ReferenceError> {
        match self.never {}
    }

    pub fn decrypt(
        &self,
        _nonce: &[u8],
        _ciphertext: &[u8],
        _tag: &[u8; GCM_TAG_SIZE],
        _associated_data: &[u8],
    ) -> Result<Vec<u8>, ReferenceError> {
        match self.never {}
    }
}

/// Placeholder for SHA-256; cannot be constructed without the `reference` feature.
#[derive(Clone, Debug)]
pub struct Sha256Adapter {
    never: Infallible,
}

impl Sha256Adapter {
    pub fn new() -> Result<Self, ReferenceError> {
        Err(ReferenceError::Unavailable)
    }

    pub fn hash(&self, _data: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
        match self.never {}
    }
}

/// Placeholder for HMAC-SHA-256; cannot be constructed without the `reference` feature.
#[derive(Clone, Debug)]
pub struct HmacSha256Adapter {
    never: Infallible,
}

impl HmacSha256Adapter {
    pub fn new(_key: &[u8]) -> Result<Self, ReferenceError> {
        Err(ReferenceError::Unavailable)
    }

    pub fn mac(&self, _message: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
        match self.never {}
    }
}
