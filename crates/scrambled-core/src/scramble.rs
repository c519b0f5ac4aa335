//! The generated scramble value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::moves::Move;

/// A generated scramble.
///
/// Constructed fresh by each generation call, immutable afterwards, owned by
/// the caller. The token reproduces the exact sequence through
/// [`verify_scramble_sync`](crate::verify_scramble_sync).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scramble {
    /// Moves in performance order.
    pub moves: Vec<Move>,
    /// The moves joined by single spaces.
    pub scramble: String,
    /// The seed token that reproduces this scramble.
    pub token: String,
    /// Cube size the scramble was generated for.
    pub size: u32,
}

impl Scramble {
    pub(crate) fn new(moves: Vec<Move>, token: String, size: u32) -> Self {
        let scramble = moves.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
        Self { moves, scramble, token, size }
    }

    /// Number of moves in the scramble.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }
}

impl fmt::Display for Scramble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.scramble)
    }
}
