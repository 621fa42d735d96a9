//======================================================================
// src/reference/mod.rs
// Adapters over established primitives (AES-GCM, SHA-256, HMAC-SHA-256)
// used as comparison baselines by the benchmarks.
//
// Backend availability is fixed at build time by the `reference`
// feature. Without it the adapter types are uninhabited and every
// constructor returns `ReferenceError::Unavailable`; the Ascon
// primitives never depend on this module.
//======================================================================

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "reference")] {
        mod available;
        pub use self::available::*;
    } else {
        mod unavailable;
        pub use self::unavailable::*;
    }
}

/// Size of the AES-GCM nonce accepted by [`AesGcmAdapter`].
pub const GCM_NONCE_SIZE: usize = 12;

/// Size of the detached AES-GCM tag.
pub const GCM_TAG_SIZE: usize = 16;

/// Size of SHA-256 and HMAC-SHA-256 outputs.
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Reports whether the reference backend was compiled in.
pub const fn is_available() -> bool {
    cfg!(feature = "reference")
}
