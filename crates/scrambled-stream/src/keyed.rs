//! Keyed draw primitives.
//!
//! A key is an arbitrary string; its stream value is the first 8 bytes of
//! `SHA-256(key)`, big-endian. `draw_index` and `coin` map that value onto
//! the two shapes scramble generation needs: a bounded index and a bit.

use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors from draw operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StreamError {
    /// A draw was requested over an empty range.
    #[error("draw bound must be non-zero")]
    EmptyRange,
}

/// Derive the stream value for a key.
///
/// Same key, same value - on every platform and in every release. This is
/// the frozen mapping the verification contract rests on.
#[must_use]
pub fn derive_u64(key: &str) -> u64 {
    let digest = Sha256::digest(key.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}

/// Draw a uniform index in `0..bound` for a key.
///
/// # Errors
///
/// Returns [`StreamError::EmptyRange`] if `bound` is zero.
pub fn draw_index(key: &str, bound: u64) -> Result<u64, StreamError> {
    if bound == 0 {
        return Err(StreamError::EmptyRange);
    }

    Ok(derive_u64(key) % bound)
}

/// Draw a coin flip for a key.
#[must_use]
pub fn coin(key: &str) -> bool {
    derive_u64(key) % 2 == 1
}
