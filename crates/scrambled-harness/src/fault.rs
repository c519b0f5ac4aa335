//! Reproducible corruption of scramble strings.
//!
//! Tamper tests need corruption that is random enough to cover the whole
//! string but reproducible from a seed when a case fails. A ChaCha8 stream
//! seeded per test gives both.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Replacement pool: the full move alphabet plus depth digits.
const REPLACEMENTS: &[u8] = b"RULDFB'2 0123456789";

/// Seeded single-character corruptor.
#[derive(Debug)]
pub struct Corruptor {
    rng: ChaCha8Rng,
}

impl Corruptor {
    /// Create a corruptor from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Replace one character with a different one from the move alphabet.
    ///
    /// The result always differs from the input. Returns `None` for an
    /// empty input, which has nothing to corrupt.
    pub fn corrupt(&mut self, text: &str) -> Option<String> {
        if text.is_empty() {
            return None;
        }

        let bytes = text.as_bytes();
        let position = self.rng.gen_range(0..bytes.len());

        let replacement = loop {
            let candidate = REPLACEMENTS[self.rng.gen_range(0..REPLACEMENTS.len())];
            if candidate != bytes[position] {
                break candidate;
            }
        };

        let mut corrupted = bytes.to_vec();
        corrupted[position] = replacement;

        String::from_utf8(corrupted).ok()
    }
}
