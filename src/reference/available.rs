use super::{GCM_NONCE_SIZE, GCM_TAG_SIZE, SHA256_OUTPUT_SIZE};
use crate::error::ReferenceError;
use aead::{consts::U12, generic_array::GenericArray, AeadInPlace, KeyInit};
use aes_gcm::{aes::Aes192, Aes128Gcm, Aes256Gcm, AesGcm};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type Aes192Gcm = AesGcm<Aes192, U12>;
type HmacSha256 = Hmac<Sha256>;
type GcmNonce = GenericArray<u8, U12>;

#[derive(Clone)]
enum GcmCipher {
    Aes128(Aes128Gcm),
    Aes192(Aes192Gcm),
    Aes256(Aes256Gcm),
}

/// AES-GCM with a detached 16-byte tag; the key size selects AES-128, -192 or -256.
#[derive(Clone)]
pub struct AesGcmAdapter {
    cipher: GcmCipher,
}

impl AesGcmAdapter {
    pub fn new(key: &[u8]) -> Result<Self, ReferenceError> {
        let invalid = |_| ReferenceError::InvalidKeyLength(key.len());
        let cipher = match key.len() {
            16 => GcmCipher::Aes128(Aes128Gcm::new_from_slice(key).map_err(invalid)?),
            24 => GcmCipher::Aes192(Aes192Gcm::new_from_slice(key).map_err(invalid)?),
            32 => GcmCipher::Aes256(Aes256Gcm::new_from_slice(key).map_err(invalid)?),
            len => return Err(ReferenceError::InvalidKeyLength(len)),
        };
        Ok(Self { cipher })
    }

    /// Returns the ciphertext and the tag split off its end.
    pub fn encrypt(
        &self,
        nonce: &[u8],
        plaintext: &[u8],
        associated_data: &[u8],
    ) -> Result<(Vec<u8>, [u8; GCM_TAG_SIZE]), ReferenceError> {
        let nonce = gcm_nonce(nonce)?;
        let mut buffer = plaintext.to_vec();
        let tag = match &self.cipher {
            GcmCipher::Aes128(c) => c.encrypt_in_place_detached(nonce, associated_data, &mut buffer),
            GcmCipher::Aes192(c) => c.encrypt_in_place_detached(nonce, associated_data, &mut buffer),
            GcmCipher::Aes256(c) => c.encrypt_in_place_detached(nonce, associated_data, &mut buffer),
        }
        .map_err(|_| ReferenceError::Authentication)?;

        let mut out = [0u8; GCM_TAG_SIZE];
        out.copy_from_slice(&tag);
        Ok((buffer, out))
    }

    pub fn decrypt(
        &self,
        nonce: &[u8],
        ciphertext: &[u8],
        tag: &[u8; GCM_TAG_SIZE],
        associated_data: &[u8],
    ) -> Result<Vec<u8>, ReferenceError> {
        let nonce = gcm_nonce(nonce)?;
        let tag = GenericArray::from_slice(tag);
        let mut buffer = ciphertext.to_vec();
        match &self.cipher {
            GcmCipher::Aes128(c) => c.decrypt_in_place_detached(nonce, associated_data, &mut buffer, tag),
            GcmCipher::Aes192(c) => c.decrypt_in_place_detached(nonce, associated_data, &mut buffer, tag),
            GcmCipher::Aes256(c) => c.decrypt_in_place_detached(nonce, associated_data, &mut buffer, tag),
        }
        .map_err(|_| ReferenceError::Authentication)?;
        Ok(buffer)
    }
}

fn gcm_nonce(nonce: &[u8]) -> Result<&GcmNonce, ReferenceError> {
    if nonce.len() != GCM_NONCE_SIZE {
        return Err(ReferenceError::InvalidNonceLength(nonce.len()));
    }
    Ok(GenericArray::from_slice(nonce))
}

/// SHA-256.
#[derive(Clone, Debug, Default)]
pub struct Sha256Adapter {
    _private: (),
}

impl Sha256Adapter {
    pub fn new() -> Result<Self, ReferenceError> {
        Ok(Self::default())
    }

    pub fn hash(&self, data: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
        let mut out = [0u8; SHA256_OUTPUT_SIZE];
        out.copy_from_slice(&Sha256::digest(data));
        out
    }
}

/// HMAC-SHA-256 with a key of any length.
#[derive(Clone)]
pub struct HmacSha256Adapter {
    mac: HmacSha256,
}

impl HmacSha256Adapter {
    pub fn new(key: &[u8]) -> Result<Self, ReferenceError> {
        let mac = <HmacSha256 as Mac>::new_from_slice(key)
            .map_err(|_| ReferenceError::InvalidKeyLength(key.len()))?;
        Ok(Self { mac })
    }

    pub fn mac(&self, message: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
        let mut mac = self.mac.clone();
        Mac::update(&mut mac, message);
        let mut out = [0u8; SHA256_OUTPUT_SIZE];
        out.copy_from_slice(&Mac::finalize(mac).into_bytes());
        out
    }
}
